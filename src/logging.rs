use crate::*;
use std::{fs::OpenOptions, sync::Mutex};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logging is off unless `log_file` is configured.
pub fn init_logging(config: &Config) -> Result {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| Error::Internal(format!("logging already initialised: {e}")))?;
    info!("logging to {}", path.display());
    Ok(())
}
