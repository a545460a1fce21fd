use std::{env, net::SocketAddr, path::Path};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::StartupError;

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// HTTP bind address
    pub address: SocketAddr,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite file path, or `:memory:` for a throwaway database
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`
    pub level: String,
    /// Log directory; relative paths resolve against the working directory
    pub dir: String,
}

pub const IN_MEMORY_DATABASE: &str = ":memory:";

const CONFIG_PATH_ENV: &str = "LIBRARY_CONFIG_PATH";
const ENV_PREFIX: &str = "LIBRARY";

impl AppConfig {
    /// Loads `default` and `local` files from the config directory, then
    /// `LIBRARY__*` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or the result does not
    /// deserialize.
    pub fn load() -> Result<Self, StartupError> {
        let config_path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config".to_string());
        Self::load_from(Path::new(&config_path))
    }

    pub fn load_from(config_dir: &Path) -> Result<Self, StartupError> {
        let config = Config::builder()
            .set_default("server.address", "127.0.0.1:8080")?
            .set_default("database.path", "library.sqlite3")?
            .set_default("logging.level", library_core::default_log_level())?
            .set_default("logging.dir", "logs")?
            .add_source(File::from(config_dir.join("default")).required(false))
            .add_source(File::from(config_dir.join("local")).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn is_in_memory(&self) -> bool {
        self.database.path == IN_MEMORY_DATABASE
    }
}
