//! Resource model shared by the converter crates.
//!
//! The output side are the APISIX ingress-controller custom resources ([`ApisixRoute`], [`ApisixTls`]),
//! the input side is re-exported from [`k8s_openapi`].
pub mod plugin;
pub use plugin::*;

pub mod route;
pub use route::*;

pub mod tls;
pub use tls::*;

pub mod convert_config;
pub use convert_config::*;

pub mod constants;

pub use k8s_openapi::api::networking::v1::Ingress;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
pub type BoxResult<T> = Result<T, BoxError>;
