use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_FILE: &str = "attendance_table.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default = "default_export_format")]
    pub export_format: ExportFormat,
    /// Read ambiguous numeric dates (03/04/2024) as day/month instead of month/day.
    #[serde(default)]
    pub day_first: bool,
    #[serde(default)]
    pub show_events: bool,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}
fn default_export_format() -> ExportFormat {
    ExportFormat::Csv
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_file: default_output_file(),
            export_format: default_export_format(),
            day_first: false,
            show_events: false,
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").map(PathBuf::from).ok();
            appdata
                .or_else(dirs::config_dir)
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rattendance")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Resolve the config file, honouring a `--config` override.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Write this configuration to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
