/// User settings and on-disk locations.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::palette::EXPORT_FILE_NAME;
use crate::types::GenerationMode;

const APP_DIR: &str = "swatchr";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Pause before a regeneration lands, in milliseconds.
    #[serde(default = "default_generation_delay_ms")]
    pub generation_delay_ms: u64,
    #[serde(default)]
    pub default_mode: GenerationMode,
    #[serde(default = "default_export_path")]
    pub export_path: PathBuf,
    /// Background the accessibility overlay scores each swatch against.
    #[serde(default = "default_contrast_background")]
    pub contrast_background: String,
}

fn default_generation_delay_ms() -> u64 {
    500
}

fn default_export_path() -> PathBuf {
    PathBuf::from(EXPORT_FILE_NAME)
}

fn default_contrast_background() -> String {
    "#FFFFFF".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generation_delay_ms: default_generation_delay_ms(),
            default_mode: GenerationMode::default(),
            export_path: default_export_path(),
            contrast_background: default_contrast_background(),
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join(APP_DIR).join("settings.json")
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings: {e}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings found, using defaults");
                Self::default()
            }
        }
    }
}

/// Directory holding the database and log file.
/// Falls back to the working directory when no data dir is found.
pub fn data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_DIR);
        std::fs::create_dir_all(&app_dir).ok();
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn default_db_path() -> PathBuf {
    data_dir().join("swatchr.db")
}

pub fn log_path() -> PathBuf {
    data_dir().join("swatchr.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.generation_delay_ms, 500);
        assert_eq!(settings.export_path, PathBuf::from("color-palette.css"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"generation_delay_ms": 0, "default_mode": "harmonious"}}"#).unwrap();
        let settings = Settings::load_from(file.path());
        assert_eq!(settings.generation_delay_ms, 0);
        assert_eq!(settings.default_mode, GenerationMode::Harmonious);
        assert_eq!(settings.contrast_background, "#FFFFFF");
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert_eq!(Settings::load_from(file.path()), Settings::default());
    }
}
