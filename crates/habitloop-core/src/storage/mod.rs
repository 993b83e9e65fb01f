mod config;
pub mod store_db;

pub use config::Config;
pub use store_db::StoreDb;

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/habitloop[-dev]/` based on HABITLOOP_ENV.
///
/// Set HABITLOOP_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HABITLOOP_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("habitloop-dev")
    } else {
        base_dir.join("habitloop")
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
