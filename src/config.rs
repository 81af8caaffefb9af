//! Configuration handling for the TUI

use crate::state::Progress;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable that overrides `schema_file`
pub const SCHEMA_FILE_ENV: &str = "DYNFORM_SCHEMA_FILE";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// JSON schema catalog replacing the built-in form types
    pub schema_file: Option<PathBuf>,
    /// Delay before the progress gauge resets, in milliseconds
    pub progress_reset_ms: Option<u64>,
    /// Form type selected at startup
    pub initial_form_type: Option<String>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "dynform", "dynform-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Path of the log file written by the tracing subscriber
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("dynform-tui.log"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                config
            }
            _ => Self::default(),
        };

        if let Ok(path) = std::env::var(SCHEMA_FILE_ENV) {
            if !path.is_empty() {
                config.schema_file = Some(PathBuf::from(path));
            }
        }

        Ok(config)
    }

    /// Progress reset delay, falling back to the default
    pub fn progress_reset_delay(&self) -> Duration {
        self.progress_reset_ms
            .map(Duration::from_millis)
            .unwrap_or(Progress::DEFAULT_RESET_DELAY)
    }
}
