use std::path::PathBuf;

use serde::Serialize;

use super::Fs;
use crate::service::{config_format::ConfigFormat, Create};
use crate::BoxResult;

impl<F> Fs<F>
where
    F: ConfigFormat,
{
    /// Make sure the output dir exists.
    pub async fn prepare_output(&self) -> BoxResult<()> {
        tokio::fs::create_dir_all(&self.output).await?;
        Ok(())
    }
}

impl<F> Create for Fs<F>
where
    F: ConfigFormat + Send + Sync,
{
    async fn create_resource<T: Serialize + Sync>(&self, stem: &str, resource: &T) -> BoxResult<PathBuf> {
        let path = self.output_path(stem);
        let bytes = self.format.ser(resource)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &bytes).await?;
        Ok(path)
    }
}
