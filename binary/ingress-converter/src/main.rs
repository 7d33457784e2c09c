use clap::Parser;
use ingress_converter_config::{
    service::{
        config_format::{ConfigFormat, Json, Yaml},
        fs::Fs,
        load_convert_config,
    },
    BoxError, ConvertConfig,
};
use tracing_subscriber::EnvFilter;

mod args;
mod batch;

use args::OutputFormat;

async fn start<F>(fs: Fs<F>, config: &ConvertConfig, with_tls: bool) -> Result<(), BoxError>
where
    F: ConfigFormat + Send + Sync,
{
    fs.prepare_output().await?;
    let summary = batch::run(&fs, config, with_tls).await?;
    if summary.failed > 0 {
        tracing::warn!("{} items failed, see the log above", summary.failed);
    }
    Ok(())
}

fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))).init();
    let args = args::Args::parse();
    tracing::debug!("start with {args:?}");
    let rt = tokio::runtime::Builder::new_multi_thread().enable_all().thread_name(env!("CARGO_PKG_NAME")).build().expect("fail to build runtime");
    rt.block_on(async move {
        let config = match &args.config {
            Some(path) => load_convert_config(path).await?,
            None => ConvertConfig::default(),
        };
        match args.format {
            OutputFormat::Json => start(Fs::new(&args.input, &args.output, Json::default()), &config, args.with_tls).await,
            OutputFormat::Yaml => start(Fs::new(&args.input, &args.output, Yaml::default()), &config, args.with_tls).await,
        }
    })
}
