#![warn(clippy::indexing_slicing, clippy::unwrap_used, clippy::dbg_macro, clippy::undocumented_unsafe_blocks)]
//! This crate is aim to move resources between the file system and the converter:
//! discovering ingress manifests, decoding them, and writing APISIX resources back.

/// re-export ingress_converter_model
pub use ingress_converter_model as model;
/// Formats and file system services
pub mod service;

pub use model::*;
