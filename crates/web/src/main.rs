//! Tillpoint hosting server binary

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tillpoint_core::tracing::{
    config::{InstrumentationConfig, LogFormat},
    init::init_tracing,
};
use tillpoint_web::Settings;

/// Serve the Tillpoint admin and POS front-end
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML or YAML)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Override the bind address
    #[arg(short = 'b', long)]
    bind: Option<SocketAddr>,

    /// Override the static bundle directory
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Emit JSON logs
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        settings.server.bind_addr = bind;
    }
    if let Some(static_dir) = cli.static_dir {
        settings.server.static_dir = static_dir;
    }

    let mut instrumentation = InstrumentationConfig::from_env();
    instrumentation.service_name = "tillpoint-web".to_string();
    if std::env::var("RUST_LOG").is_err() {
        instrumentation.log_level.clone_from(&settings.server.log_level);
    }
    if cli.json_logs {
        instrumentation.format = LogFormat::Json;
    }
    init_tracing(&instrumentation)?;

    tillpoint_web::serve(settings).await?;
    Ok(())
}
