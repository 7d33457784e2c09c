use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Convert Kubernetes Ingress manifests into APISIX resources
#[derive(Debug, Serialize, Deserialize, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory holding the ingress manifests (`*.yaml` / `*.yml`), only the first level is read
    #[arg(short, long, env = "INGRESS_CONVERTER_INPUT")]
    pub input: PathBuf,
    /// Directory the converted resources are written to, created when missing
    #[arg(short, long, env = "INGRESS_CONVERTER_OUTPUT", default_value = "output")]
    pub output: PathBuf,
    /// Output format
    #[arg(short, long, env = "INGRESS_CONVERTER_FORMAT", value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    /// Conversion config file (toml)
    ///
    /// # Example
    /// ```toml
    /// duplicate_plugins = "last_wins"
    /// [rewrite]
    /// kind = "uri"
    /// ```
    #[arg(short, long, env = "INGRESS_CONVERTER_CONFIG")]
    pub config: Option<PathBuf>,
    /// Also emit one ApisixTls for each `spec.tls` entry
    #[arg(long, env = "INGRESS_CONVERTER_WITH_TLS")]
    pub with_tls: bool,
}
