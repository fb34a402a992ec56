mod config;

pub use config::{Config, InterpolationConfig, LoggingConfig, ProfileConfig};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/weightlog[-dev]/` based on WEIGHTLOG_ENV.
///
/// Set WEIGHTLOG_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("WEIGHTLOG_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("weightlog-dev")
    } else {
        base_dir.join("weightlog")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
