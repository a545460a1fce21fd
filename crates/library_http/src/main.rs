//! Library catalog server: loads config, starts logging, opens the database
//! and serves the HTTP API.

use std::path::PathBuf;

use library_core::db::{open_db, open_db_in_memory};
use library_http::config::AppConfig;
use library_http::error::StartupError;
use library_http::{serve, AppState};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;

    let log_dir = absolute_dir(&config.logging.dir)?;
    library_core::init_logging(&config.logging.level, &log_dir.to_string_lossy())
        .map_err(StartupError::Logging)?;

    let conn = if config.is_in_memory() {
        open_db_in_memory()?
    } else {
        open_db(&config.database.path)?
    };

    serve(AppState::new(conn), config.server.address).await?;
    Ok(())
}

fn absolute_dir(dir: &str) -> std::io::Result<PathBuf> {
    let path = PathBuf::from(dir);
    if path.is_absolute() {
        return Ok(path);
    }
    Ok(std::env::current_dir()?.join(path))
}
