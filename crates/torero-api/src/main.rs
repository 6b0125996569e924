//! torero API server binary.
//!
//! A REST facade over the torero automation CLI: catalog listings, service
//! describe, and execution endpoints, served by axum.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use torero_api::{config::AppConfig, daemon, router::build_router, state::AppState};
use torero_exec::ToreroInvoker;

#[derive(Parser, Debug)]
#[command(
    name = "torero-api",
    version,
    about = "REST API facade for the torero automation CLI"
)]
struct Cli {
    /// Server bind address
    #[arg(long)]
    host: Option<String>,

    /// Server port
    #[arg(short, long)]
    port: Option<u16>,

    /// Log filter level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Accepted for interface compatibility; hot reload is not supported
    #[arg(long)]
    reload: bool,

    /// Detach and run as a background daemon
    #[arg(long)]
    daemon: bool,

    /// PID file path
    #[arg(long)]
    pid_file: Option<PathBuf>,

    /// Log file path (daemon mode)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Check torero availability and exit
    #[arg(long)]
    check: bool,
}

impl Cli {
    /// Overlay CLI flags on the environment-derived configuration.
    fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if self.pid_file.is_some() {
            config.pid_file = self.pid_file;
        }
        if self.log_file.is_some() {
            config.log_file = self.log_file;
        }
        config
    }
}

/// Initialize tracing/logging.
fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let check = cli.check;
    let daemonize = cli.daemon;
    let reload = cli.reload;

    let mut config_warning = None;
    let config = cli.apply(AppConfig::from_env().unwrap_or_else(|e| {
        config_warning = Some(e.to_string());
        AppConfig::default()
    }));

    if check {
        return run_check(&config).await;
    }

    if daemonize {
        return daemon::spawn_daemon(&config);
    }

    init_tracing(&config.log_level);

    if let Some(warning) = config_warning {
        tracing::warn!(error = %warning, "Failed to load config from environment, using defaults");
    }
    if reload {
        tracing::warn!("--reload is not supported; continuing without it");
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting torero API");
    tracing::info!(
        host = %config.host,
        port = config.port,
        binary = %config.binary,
        "Configuration loaded"
    );

    // Only write a PID file in the foreground when one was asked for.
    let track_pid = config.pid_file.is_some();
    if track_pid {
        daemon::write_pid_file(&config)?;
    }

    let state = AppState::new(config.clone());
    let app = build_router(state);

    // Bind to address
    let addr: SocketAddr = config.bind_address().parse()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(address = %addr, "Server listening");

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if track_pid {
        daemon::remove_pid_file(&config);
    }

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Probe torero availability and exit with a matching status code.
async fn run_check(config: &AppConfig) -> Result<()> {
    let invoker = ToreroInvoker::with_binary(&config.binary);
    match invoker.check().await {
        Ok(version) => {
            println!("torero {} is available", version);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
