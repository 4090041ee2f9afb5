//! File logging. The terminal belongs to the UI, so nothing is written to it.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use realdesk_core::config::LoggingConfig;

/// Log file: CLI override, then config, then `realdesk.log` beside the config.
pub fn log_path(config: &LoggingConfig, cli_override: Option<&Path>) -> PathBuf {
    cli_override
        .map(Path::to_path_buf)
        .or_else(|| config.file.clone())
        .unwrap_or_else(|| realdesk_core::config::default_dir().join("realdesk.log"))
}

/// `RUST_LOG` wins over the configured directive.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

fn open(path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Install the global subscriber. Returns the file being written.
pub fn init(config: &LoggingConfig, cli_override: Option<&Path>) -> anyhow::Result<PathBuf> {
    let path = log_path(config, cli_override);
    let file = open(&path)?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(env_filter(config))
        .try_init()
        .context("installing log subscriber")?;
    Ok(path)
}
