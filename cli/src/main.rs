//! Market Service — CLI Server
//!
//! ```sh
//! # Run with default config (~/.config/market-service/config.toml)
//! market-service
//!
//! # Custom config path
//! market-service --config /etc/market-service/config.toml
//!
//! # Throwaway run on the seeded in-memory store
//! market-service --in-memory --api-port 8081
//!
//! # Validate config without starting
//! market-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use market::config::AppConfig;
use market::server::{init_tracing, ServerHandle, ServerOptions};

/// Market Service — product catalog and shopping cart REST API.
#[derive(Parser, Debug)]
#[command(
    name = "market-service",
    version,
    about = "Product catalog and shopping cart REST API",
    long_about = "Market Service — REST API for browsing the product catalog \
                  and managing per-account shopping carts.\n\n\
                  Default config: ~/.config/market-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "MARKET_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    api_port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Use the seeded in-memory store instead of the database.
    #[arg(long)]
    in_memory: bool,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(market::default_config_path);

    let loaded = AppConfig::load(&config_path);
    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    };

    // ── Apply CLI overrides ───────────────────────────────────
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(port) = cli.api_port {
        config.server.api_port = port;
    }
    if cli.in_memory {
        config.database.in_memory = true;
    }

    init_tracing(&config);
    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Config validation mode ────────────────────────────────
    if cli.check {
        config.validate()?;
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.api_address());
        if config.database.in_memory {
            println!("   Database    : in-memory");
        } else {
            println!("   Database    : {}", config.database.url);
        }
        println!("   Principal   : header '{}', default '{}'", config.auth.principal_header, config.auth.default_principal);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ──────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
