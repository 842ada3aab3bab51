//! Path management for FinTrack
//!
//! Only configuration lives on disk: the settings file and the optional audit
//! log. Ledger contents are never written out.
//!
//! ## Path Resolution Order
//!
//! 1. `FINTRACK_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (e.g. `~/.config/fintrack` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinTrackError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "FINTRACK_CONFIG_DIR";

/// Manages all paths used by FinTrack
#[derive(Debug, Clone)]
pub struct FinTrackPaths {
    base_dir: PathBuf,
}

impl FinTrackPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, FinTrackError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "fintrack")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    FinTrackError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Use a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the JSONL audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Create the config directory if it does not exist
    pub fn ensure_directories(&self) -> Result<(), FinTrackError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinTrackError::Io(format!("Failed to create config directory: {}", e)))
    }
}
