use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Returns the default log path inside the user's data directory.
/// Falls back to `./palettr.log` when no data dir is found.
pub fn default_log_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        data_dir.join("palettr").join("palettr.log")
    } else {
        PathBuf::from("palettr.log")
    }
}

/// Installs the global subscriber. Output goes to a file so the
/// alternate screen stays clean.
pub fn init(path: &Path, level: &str) -> Result<()> {
    let file = open_log_file(path)?;
    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("failed to install log subscriber")?;
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
