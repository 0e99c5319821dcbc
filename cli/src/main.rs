//! Roombook CLI server
//!
//! ```sh
//! # Run with default config (~/.config/roombook/config.toml)
//! roombook
//!
//! # Custom config path
//! roombook --config /etc/roombook/config.toml
//!
//! # Override the port
//! roombook --port 8080
//!
//! # Validate config without starting
//! roombook --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use roombook::config::AppConfig;
use roombook::server::{init_tracing, ServerHandle, ServerOptions};

/// Roombook: meeting-room reservation REST service.
#[derive(Parser, Debug)]
#[command(
    name = "roombook",
    version,
    about = "Meeting-room reservation REST service",
    long_about = "Roombook: users, rooms and reservations behind a REST API \
                  with overlap and ownership checks.\n\n\
                  Default config: ~/.config/roombook/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "ROOMBOOK_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

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

    let config_path = cli.config.unwrap_or_else(roombook::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => {
            let mut cfg = AppConfig::default();
            cfg.apply_env_overrides()?;
            (cfg, Some(e))
        }
    };

    // The log level override must land before tracing is initialized
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config);

    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.server.address());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
