//! restencoder demo server
//!
//! Serves a few fixed endpoints whose responses are written by the
//! restencoder helpers.
//!
//! ```text
//! GET  /status   200 + JSON body + Cache-Control
//! POST /items    201 + JSON body
//! GET  /failure  500 error envelope (status default)
//! GET  /invalid  400 error envelope (explicit status kept)
//! *              404 via respond_error
//! ```

use std::path::PathBuf;

use clap::Parser;

use restencoder::config::{load_config, DemoConfig};
use restencoder::{demo, observability};

#[derive(Parser)]
#[command(name = "restencoder-demo")]
#[command(about = "Demo server for the restencoder response helpers", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DemoConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    observability::logging::init(&config.observability)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        log_level = %config.observability.log_level,
        "Configuration loaded"
    );

    demo::run(&config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
