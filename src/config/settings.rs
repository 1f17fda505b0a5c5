//! User settings for Horizon
//!
//! Caller-side configuration only: defaults applied when creating planners
//! and the planner the CLI falls back to. The engine itself has no built-in
//! defaults; it always receives its configuration as explicit parameters.

use serde::{Deserialize, Serialize};

use crate::error::{HorizonError, HorizonResult};
use crate::models::DEFAULT_ALERT_THRESHOLD;

use super::paths::HorizonPaths;

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_threshold() -> f64 {
    DEFAULT_ALERT_THRESHOLD
}

/// User settings for Horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Planner used when a command doesn't name one
    #[serde(default)]
    pub default_planner: Option<String>,

    /// Currency symbol applied to new planners
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Commitment limit applied to new planners
    #[serde(default = "default_threshold")]
    pub alert_threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_planner: None,
            currency: default_currency(),
            alert_threshold: default_threshold(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if missing
    pub fn load_or_create(paths: &HorizonPaths) -> HorizonResult<Self> {
        let path = paths.settings_file();

        if !path.exists() {
            let settings = Self::default();
            settings.save(paths)?;
            return Ok(settings);
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| HorizonError::Config(format!("Cannot read settings: {}", e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| HorizonError::Config(format!("Cannot parse settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &HorizonPaths) -> HorizonResult<()> {
        paths.ensure_directories()?;
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| HorizonError::Config(format!("Cannot serialize settings: {}", e)))?;
        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| HorizonError::Config(format!("Cannot write settings: {}", e)))
    }
}
