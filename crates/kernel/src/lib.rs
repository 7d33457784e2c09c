//! # Ingress converter kernel crate.
//!
//! Pure conversion from a decoded [`Ingress`](ingress_converter_model::Ingress) into APISIX resources.
//! Nothing in this crate performs I/O, every function may be called concurrently on disjoint inputs.

#![deny(clippy::unwrap_used, clippy::dbg_macro, clippy::unimplemented, clippy::todo, clippy::missing_safety_doc)]
#![warn(clippy::missing_errors_doc, clippy::indexing_slicing, missing_debug_implementations)]
/// ingress to apisix conversion
pub mod convert;
/// conversion errors
pub mod error;

pub use convert::{annotation::translate_annotations, path::normalize_path, route::build_route, tls::build_tls};
pub use error::ConvertError;
pub use ingress_converter_model as model;
