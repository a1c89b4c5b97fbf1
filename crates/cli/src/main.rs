use anyhow::Context;
use clap::Parser;
use safubot_api::AppState;
use safubot_domain::CliOverrides;
use std::net::SocketAddr;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "safubot")]
#[command(version)]
#[command(about = "SafuBot - Telegram scam checker for crypto addresses and domains")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP port for the webhook listener
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Public webhook URL to register with Telegram
    #[arg(long)]
    webhook_url: Option<String>,

    /// Scam database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind,
        webhook_url: cli.webhook_url,
        database_path: cli.database,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting SafuBot v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool, &config)?;
    let use_cases = di::UseCases::new(&repos, &config);

    match config.server.webhook_url.as_deref() {
        Some(url) => {
            repos.telegram.delete_webhook().await?;
            repos.telegram.set_webhook(url).await?;
        }
        None => warn!("No webhook_url configured; leaving Telegram webhook unchanged"),
    }

    let app_state = AppState {
        handle_message: use_cases.handle_message,
        lookup: use_cases.lookup,
    };

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .context("Invalid bind address")?;

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
