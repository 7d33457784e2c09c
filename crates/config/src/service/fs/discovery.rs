use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use crate::{service::config_format::ConfigFormat, BoxResult};

use super::Fs;

const MANIFEST_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Whether the file looks like a kubernetes manifest, by extension, case insensitive.
pub fn is_manifest(path: &Path) -> bool {
    path.extension().and_then(OsStr::to_str).is_some_and(|ext| MANIFEST_EXTENSIONS.iter().any(|m| ext.eq_ignore_ascii_case(m)))
}

impl<F> Fs<F>
where
    F: ConfigFormat,
{
    /// Manifest files directly inside the input dir, sorted by path.
    pub async fn discover(&self) -> BoxResult<Vec<PathBuf>> {
        let mut dir = tokio::fs::read_dir(&self.input).await?;
        let mut manifests = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            if !is_manifest(&path) {
                tracing::trace!("skip {path:?}, not a yaml file");
                continue;
            }
            match tokio::fs::metadata(&path).await {
                Ok(metadata) if metadata.is_file() => manifests.push(path),
                Ok(_) => tracing::debug!("skip {path:?}, not a regular file"),
                Err(e) => tracing::warn!("fail to stat {path:?}: {e}"),
            }
        }
        manifests.sort();
        tracing::debug!("discovered {} manifests in {:?}", manifests.len(), self.input);
        Ok(manifests)
    }
}
