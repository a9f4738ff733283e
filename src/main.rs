use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pesangon_engine::api::{AppState, create_router};
use pesangon_engine::config::{ConfigLoader, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "pesangon-engine")]
#[command(about = "Severance (pesangon) calculator service", version)]
struct Cli {
    /// Directory holding regulation.yaml, contact.yaml and server.yaml
    #[arg(long, default_value = "./config/pesangon")]
    config: PathBuf,

    /// Address to listen on. Overrides server.yaml
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on. Overrides server.yaml
    #[arg(long)]
    port: Option<u16>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let mut config = ConfigLoader::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

    if cli.host.is_some() || cli.port.is_some() {
        let current = config.server().clone();
        let server = ServerConfig {
            host: cli.host.unwrap_or(current.host),
            port: cli.port.unwrap_or(current.port),
        };
        config = config
            .with_server(server)
            .context("applying command line server overrides")?;
    }

    let address = config.server().bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {}", address))?;

    info!(
        address = %address,
        regulation = %config.regulation().code,
        "Severance calculator listening"
    );

    let router = create_router(AppState::new(config));
    axum::serve(listener, router).await.context("serving HTTP")?;

    Ok(())
}
