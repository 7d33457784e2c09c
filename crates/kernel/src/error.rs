use thiserror::Error;

/// Reasons an Ingress cannot be turned into an ApisixRoute.
///
/// Malformed annotations are never an error, they fall back to a default instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("ingress {name} has no rules")]
    NoRules { name: String },

    #[error("ingress {name} has no path backed by a service")]
    NoRoutablePaths { name: String },
}
