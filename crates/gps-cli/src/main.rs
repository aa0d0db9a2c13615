//! `gps` binary: parse flags, set up logging, evaluate and print.

use anyhow::Context;
use gps_cli::cli::{self, DEFAULT_LOG_FILTER};
use gps_cli::{SandboxConfig, SandboxError};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = cli::command().get_matches();

    let invocation = match cli::invocation(&matches) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(SandboxError::from(e).exit_code());
        }
    };

    let filter = match &invocation.log_filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = execute(&invocation) {
        let code = e
            .downcast_ref::<SandboxError>()
            .map_or(1, SandboxError::exit_code);
        eprintln!("error: {e:#}");
        std::process::exit(code);
    }
}

fn execute(invocation: &cli::Invocation) -> anyhow::Result<()> {
    let base = match &invocation.config_path {
        Some(path) => SandboxConfig::load(path)
            .map_err(SandboxError::from)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SandboxConfig::default(),
    };
    let config = base.with_overrides(&invocation.overrides);
    tracing::debug!(?config, "effective configuration");

    let output = gps_cli::run(&config)?;
    print!("{output}");
    Ok(())
}
