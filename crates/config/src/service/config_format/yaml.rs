use std::ffi::{OsStr, OsString};

use crate::BoxError;

use super::ConfigFormat;
#[derive(Debug, Clone)]
pub struct Yaml {
    pub extension: OsString,
}

impl Default for Yaml {
    fn default() -> Self {
        Self {
            extension: OsString::from("yaml"),
        }
    }
}

impl ConfigFormat for Yaml {
    fn extension(&self) -> &OsStr {
        &self.extension
    }
    fn de<T: serde::de::DeserializeOwned>(&self, slice: &[u8]) -> Result<T, BoxError> {
        Ok(serde_yaml_ng::from_slice(slice)?)
    }
    fn ser<T: serde::Serialize>(&self, t: &T) -> Result<Vec<u8>, BoxError> {
        // field names come straight from serde, `apiVersion` keeps its casing
        Ok(serde_yaml_ng::to_string(t)?.into_bytes())
    }
}
