use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::error::{ConsoleError, ConsoleResult};

/// Sends `tracing` output to a file; the terminal belongs to the console UI.
pub fn init_file_logging(log_path: &Path, filter: &str) -> ConsoleResult<()> {
    if let Some(parent) = log_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConsoleError::storage(format!("create log directory {}", parent.display()), e)
        })?;
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| ConsoleError::storage(format!("open log file {}", log_path.display()), e))?;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(log_file))
        .try_init()
        .map_err(|e| ConsoleError::Config(format!("install log subscriber: {}", e)))?;

    Ok(())
}
