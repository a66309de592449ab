//! Application settings and paths.

use crate::error::{ConfigError, ConfigResult};
use crate::scanner::{Protocol, ScanMode};
use crate::types::ScanInterval;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application directory paths following the XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/portsweep)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Locate the configuration directory without creating it.
    pub fn new() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "portsweep", "portsweep")
            .ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Host to scan when none is given on the command line.
    pub target: String,
    /// Transport protocol.
    pub protocol: Protocol,
    /// Half-open port interval, written as "bottom-top".
    pub range: ScanInterval,
    /// Per-port connection timeout in milliseconds.
    pub timeout_ms: u64,
    /// Scheduling mode.
    pub mode: ScanMode,
    /// Directory that receives result files.
    pub results_dir: PathBuf,
    /// Write a result file after each scan.
    pub save_results: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            target: "127.0.0.1".to_string(),
            protocol: Protocol::Tcp,
            range: ScanInterval::WELL_KNOWN,
            timeout_ms: 1000,
            mode: ScanMode::Concurrent,
            results_dir: PathBuf::from("ScanResults"),
            save_results: true,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location, falling back to defaults
    /// when no settings file exists.
    pub fn load() -> ConfigResult<Self> {
        let file = Paths::new()?.settings_file();

        if !file.exists() {
            tracing::debug!(path = %file.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let settings =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Save settings to a specific file, creating its parent directory.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
