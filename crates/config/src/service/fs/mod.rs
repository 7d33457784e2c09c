use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    sync::Arc,
};
pub mod create;
pub mod discovery;
pub mod model;
pub mod retrieve;

use crate::{constants::DEFAULT_NAMESPACE, service::config_format::ConfigFormat};

/// # Filesystem Backend
///
/// ## Structure
/// ``` no_rust
/// input/                      output/
/// |- web.yaml            ==>  |- default-web.json
/// |- shop.yml                 |- retail-shop.json
/// |- README.md (ignored)      |- tls/
///                             |  |- retail-shop-shop-tls.json
/// ```
/// Only the first level of the input dir is read.
#[derive(Debug, Clone)]
pub struct Fs<F> {
    pub input: Arc<Path>,
    pub output: Arc<Path>,
    pub format: F,
}

impl<F> Fs<F>
where
    F: ConfigFormat,
{
    pub fn new(input: impl AsRef<Path>, output: impl AsRef<Path>, format: F) -> Self {
        Self {
            input: Arc::from(input.as_ref().to_path_buf()),
            output: Arc::from(output.as_ref().to_path_buf()),
            format,
        }
    }

    /// `<output>/<stem>.<ext>`, dots inside `stem` are kept.
    pub fn output_path(&self, stem: &str) -> PathBuf {
        let mut file_name = OsString::from(stem);
        file_name.push(".");
        file_name.push(self.format.extension());
        self.output.join(file_name)
    }
}

/// File stem of a resource, `{namespace}-{name}`.
pub fn resource_stem(namespace: Option<&str>, name: &str) -> String {
    format!("{}-{}", namespace.filter(|ns| !ns.is_empty()).unwrap_or(DEFAULT_NAMESPACE), name)
}

/// Subdirectory of the output dir holding ApisixTls resources.
pub const TLS_OUTPUT_DIR: &str = "tls";

/// File stem of an ApisixTls resource, `tls/{namespace}-{name}`.
pub fn tls_resource_stem(namespace: Option<&str>, name: &str) -> String {
    format!("{TLS_OUTPUT_DIR}/{}", resource_stem(namespace, name))
}
