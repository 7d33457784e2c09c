use std::path::{Path, PathBuf};

use std::future::Future;
use serde::Serialize;

use crate::{BoxResult, ConvertConfig};

/// Serialization formats
pub mod config_format;
/// File system backend
pub mod fs;

use config_format::{ConfigFormat, Toml};

/// Where ingress manifests come from.
pub trait Retrieve: Sync + Send {
    /// Paths of every manifest to convert, in a stable order.
    fn retrieve_manifest_paths(&self) -> impl Future<Output = BoxResult<Vec<PathBuf>>> + Send;
    /// Raw YAML documents of one manifest, blank documents excluded.
    fn retrieve_documents(&self, path: &Path) -> impl Future<Output = BoxResult<Vec<String>>> + Send;
}

/// Where converted resources go.
pub trait Create: Sync + Send {
    /// Persist one resource under `stem`, returns where it was written.
    fn create_resource<T: Serialize + Sync>(&self, stem: &str, resource: &T) -> impl Future<Output = BoxResult<PathBuf>> + Send;
}

/// Load a [`ConvertConfig`] from a toml file.
pub async fn load_convert_config(path: impl AsRef<Path>) -> BoxResult<ConvertConfig> {
    let path = path.as_ref();
    let config: ConvertConfig = Toml::default().de(&tokio::fs::read(path).await?)?;
    tracing::debug!("convert config loaded from {path:?}: {config:?}");
    Ok(config)
}
