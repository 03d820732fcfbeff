mod card_store;
mod config;
pub mod database;

pub use card_store::{BlobStore, CardStore, MemoryStore, CARDS_KEY};
pub use config::{Config, GestureConfig, SessionConfig, StorageConfig};
pub use database::Database;

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns the data directory, creating it if needed.
///
/// `CARDPILE_HOME` wins when set. Otherwise `~/.config/cardpile[-dev]/`
/// depending on `CARDPILE_ENV`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("CARDPILE_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("CARDPILE_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("cardpile-dev")
            } else {
                base_dir.join("cardpile")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
