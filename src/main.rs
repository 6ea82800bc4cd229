use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use connect_four_server::config::AppConfig;
use connect_four_server::leaderboard::LeaderboardStore;
use connect_four_server::web::{self, AppState};

/// Serve a two-player Connect Four game over HTTP.
#[derive(Parser)]
#[command(name = "connect-four-server", about = "Serve a two-player Connect Four game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the listen address, e.g. 0.0.0.0:8000
    #[arg(long)]
    bind: Option<String>,

    /// Override the leaderboard file
    #[arg(long)]
    leaderboard: Option<PathBuf>,

    /// Override the directory served under /static/
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(path) = cli.leaderboard {
        config.leaderboard.path = path;
    }
    if let Some(dir) = cli.assets {
        config.server.assets_dir = dir;
    }
    config
        .validate()
        .context("invalid configuration after command-line overrides")?;

    let state = AppState::new(LeaderboardStore::new(&config.leaderboard));
    let app = web::router(state, &config.server.assets_dir);

    let listener = TcpListener::bind(config.server.bind.as_str())
        .await
        .with_context(|| format!("binding {}", config.server.bind))?;
    tracing::info!(
        addr = %config.server.bind,
        leaderboard = %config.leaderboard.path.display(),
        assets = %config.server.assets_dir.display(),
        "listening"
    );

    axum::serve(listener, app).await.context("server stopped")?;
    Ok(())
}
