use std::path::{Path, PathBuf};

use super::{model::split_documents, Fs};
use crate::service::{config_format::ConfigFormat, Retrieve};
use crate::BoxResult;

impl<F> Retrieve for Fs<F>
where
    F: ConfigFormat + Send + Sync,
{
    async fn retrieve_manifest_paths(&self) -> BoxResult<Vec<PathBuf>> {
        self.discover().await
    }

    async fn retrieve_documents(&self, path: &Path) -> BoxResult<Vec<String>> {
        let content = tokio::fs::read(path).await?;
        let documents = split_documents(&String::from_utf8_lossy(&content));
        tracing::debug!("found {} yaml documents in {path:?}", documents.len());
        Ok(documents)
    }
}
