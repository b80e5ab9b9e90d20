use crate::*;
use confique::Config as _;
use std::{collections::HashMap, path::Path, path::PathBuf};

#[derive(confique::Config)]
pub struct Config {
    /// Named connection strings, e.g. `prod = "mysql://reader@db1/app"`.
    pub aliases: Option<HashMap<String, String>>,

    /// Per-command keymap overrides, keyed by command name.
    pub keymaps: Option<HashMap<String, String>>,

    /// Close the results window when its tab loses focus.
    #[config(env = "NVIM_MYSQL_AUTO_CLOSE_RESULTS", default = false)]
    pub auto_close_results: bool,

    /// Which auxiliary window (`results` or `tree`) takes the split by default.
    #[config(env = "NVIM_MYSQL_AUX_WINDOW_PREF", default = "results")]
    pub aux_window_pref: String,

    #[config(env = "NVIM_MYSQL_USE_SPINNER", default = true)]
    pub use_spinner: bool,

    /// Upper bound for each schema lookup issued while completing.
    #[config(env = "NVIM_MYSQL_COMPLETION_TIMEOUT_MS", default = 5000)]
    pub completion_timeout_ms: u64,

    #[config(env = "NVIM_MYSQL_LOG", default = "info")]
    pub log_filter: String,

    /// Stdout is the RPC channel, so logs only go somewhere when this is set.
    #[config(env = "NVIM_MYSQL_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[cfg(test)]
    #[config(env = "NVIM_MYSQL_CONTAINER_RAMDISKED", default = true)]
    pub container_ramdisked: bool,
    #[cfg(test)]
    #[config(env = "NVIM_MYSQL_CONTAINER_LOGS", default = false)]
    pub container_logs: bool,
}

impl Config {
    /// Environment first, then the optional TOML file for anything unset.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().env();
        if let Some(file) = file {
            builder = builder.file(file);
        }
        Ok(builder.load()?)
    }

    /// Resolve `target` through the alias table. Returns the connection string and,
    /// for aliases, the alias name to display as the server name.
    pub fn resolve_alias<'a>(&'a self, target: &'a str) -> (&'a str, Option<&'a str>) {
        match self.aliases.as_ref().and_then(|a| a.get(target)) {
            Some(connection_string) => {
                debug!("'{target}' is an alias for '{connection_string}'");
                (connection_string, Some(target))
            }
            None => (target, None),
        }
    }

    pub fn completion_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.completion_timeout_ms)
    }
}

#[cfg(test)]
pub fn config() -> &'static Config {
    use std::sync::OnceLock;
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::builder()
            .env()
            .load()
            .expect("Failed to load one or more value configuration from the current environment")
    })
}
