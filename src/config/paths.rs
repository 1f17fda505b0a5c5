//! Path management for Horizon
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `HORIZON_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/horizon` or `~/.config/horizon`
//! 3. Windows: `%APPDATA%\horizon`

use std::path::PathBuf;

use crate::error::{HorizonError, HorizonResult};

/// Manages all paths used by Horizon
#[derive(Debug, Clone)]
pub struct HorizonPaths {
    base_dir: PathBuf,
}

impl HorizonPaths {
    /// Resolve the paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> HorizonResult<Self> {
        let base_dir = if let Ok(custom) = std::env::var("HORIZON_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// The base directory (~/.config/horizon/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// The data directory (~/.config/horizon/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the planners snapshot
    pub fn planners_file(&self) -> PathBuf {
        self.data_dir().join("planners.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> HorizonResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| HorizonError::Io(format!("Cannot create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| HorizonError::Io(format!("Cannot create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Horizon has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> HorizonResult<PathBuf> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| HorizonError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("horizon"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> HorizonResult<PathBuf> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| HorizonError::Config("APPDATA environment variable not set".into()))?;
    Ok(PathBuf::from(appdata).join("horizon"))
}
