use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;
use crate::app::services::export::{ExportFormat, ExportOptions};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    #[serde(default)]
    pub default_export_format: ExportFormat,

    /// Where relative export filenames land. Unset means the working directory.
    #[serde(default)]
    pub export_directory: Option<PathBuf>,

    #[serde(default)]
    pub escape_html_content: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_export_format: ExportFormat::Rtf,
            export_directory: None,
            escape_html_content: false,
        }
    }
}

impl EditorSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                // File doesn't exist, use defaults
                let default = Self::default();
                if let Err(e) = default.save_to(path) {
                    log::debug!("Could not write default settings to {}: {}", path.display(), e);
                }
                default
            }
            Err(e) => {
                // Present but unreadable: leave it for the user to fix
                log::warn!("Failed to read settings from {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(dir) = &self.export_directory {
            if dir.as_os_str().is_empty() {
                return Err(AppError::Settings("export directory must not be empty".to_string()));
            }
        }

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("patternpad");
        path.push("settings.json");
        path
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            export_dir: self.export_directory.clone(),
            escape_html_content: self.escape_html_content,
        }
    }
}
