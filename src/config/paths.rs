//! Path management for Tally
//!
//! All persisted state lives in a single data directory.
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (the `--data-dir` flag or `TALLY_DATA_DIR`)
//! 2. The platform data directory reported by `directories`
//!    (e.g. `~/.local/share/tally` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TallyError;

/// Manages all paths used by Tally
#[derive(Debug, Clone)]
pub struct TallyPaths {
    /// Directory holding the balance, transaction log, settings and audit log
    data_dir: PathBuf,
}

impl TallyPaths {
    /// Resolve the data directory, preferring an explicit override
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the platform data
    /// directory cannot be determined.
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self, TallyError> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => resolve_default_path()?,
        };

        Ok(Self { data_dir })
    }

    /// Create TallyPaths with a custom data directory (useful for testing)
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the data directory
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Get the path to the balance file
    pub fn balance_file(&self) -> PathBuf {
        self.data_dir.join("balance.txt")
    }

    /// Get the path to the transaction log
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir.join("transactions.csv")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.data_dir.join("audit.log")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), TallyError> {
        std::fs::create_dir_all(&self.data_dir)
            .map_err(|e| TallyError::Io(format!("Failed to create data directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, TallyError> {
    ProjectDirs::from("", "", "tally")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TallyError::Config("Could not determine a home directory".into()))
}
