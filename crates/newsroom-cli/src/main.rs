use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use newsroom_core::config::RootConfig;
use newsroom_infrastructure::{ConfigService, WorkspacePaths};
use tracing_subscriber::{EnvFilter, Registry, prelude::*, reload};

mod commands;

#[derive(Parser)]
#[command(name = "newsroom")]
#[command(about = "Newsroom workspace CLI - session, notifications and navigation", long_about = None)]
struct Cli {
    /// Use DIR instead of the platform config directory
    #[arg(long, value_name = "DIR", global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bootstrap the store and print its state
    Status,
    /// Log in and persist the session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the persisted session
    Logout,
    /// Inspect or update the notification inbox
    Notifications {
        #[command(subcommand)]
        action: NotificationAction,
    },
    /// Print sidebar state and breadcrumbs for a route
    Nav {
        path: String,
        #[arg(long)]
        collapsed: bool,
    },
    /// Resolve a sidebar click
    Click { key: String },
}

#[derive(Subcommand)]
enum NotificationAction {
    /// List notifications, newest first
    List,
    /// Mark one notification as read
    Read { id: String },
    /// Mark every notification as read
    ReadAll,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = init_tracing()?;

    let paths = WorkspacePaths::new(cli.config_dir);
    let config = ConfigService::new(paths.clone())
        .get_config()
        .context("Failed to load config.toml")?;
    apply_config_filter(&filter, &config)?;
    tracing::debug!("[Bootstrap] Config loaded: {:?}", config);

    match cli.command {
        Commands::Status => commands::session::status(&paths, &config).await?,
        Commands::Login { username, password } => {
            commands::session::login(&paths, &config, username, password).await?
        }
        Commands::Logout => commands::session::logout(&paths, &config).await?,
        Commands::Notifications { action } => match action {
            NotificationAction::List => commands::notifications::list(&paths, &config).await?,
            NotificationAction::Read { id } => {
                commands::notifications::read(&paths, &config, &id).await?
            }
            NotificationAction::ReadAll => {
                commands::notifications::read_all(&paths, &config).await?
            }
        },
        Commands::Nav { path, collapsed } => commands::navigation::nav(&path, collapsed)?,
        Commands::Click { key } => commands::navigation::click(&key)?,
    }

    Ok(())
}

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Installs the stderr subscriber before config is read, at `RUST_LOG` or `info`.
fn init_tracing() -> Result<FilterHandle> {
    let initial = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter, handle) = reload::Layer::new(initial);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))?;
    Ok(handle)
}

/// Swaps in `log_level` from the config unless `RUST_LOG` is set.
fn apply_config_filter(handle: &FilterHandle, config: &RootConfig) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let Some(directive) = config_directive(rust_log.as_deref(), config) else {
        return Ok(());
    };

    match EnvFilter::try_new(directive) {
        Ok(filter) => handle
            .reload(filter)
            .context("Failed to apply log_level from config.toml"),
        Err(e) => {
            tracing::warn!("[Config] Ignoring invalid log_level '{}': {}", directive, e);
            Ok(())
        }
    }
}

fn config_directive<'a>(rust_log: Option<&str>, config: &'a RootConfig) -> Option<&'a str> {
    match rust_log {
        Some(value) if !value.trim().is_empty() => None,
        _ => Some(config.log_level.as_str()),
    }
}
