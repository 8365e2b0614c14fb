use crate::event::{ReminderMethod, ReminderOverride};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Summary used when a transcript has nothing left after the date and time
    pub default_title: String,
    pub time_zone: String,
    pub reminders: Vec<ReminderOverride>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            default_title: "새 일정".to_string(),
            time_zone: "Asia/Seoul".to_string(),
            reminders: vec![
                ReminderOverride { method: ReminderMethod::Email, minutes: 24 * 60 },
                ReminderOverride { method: ReminderMethod::Popup, minutes: 60 },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub listen_addr: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { listen_addr: "127.0.0.1:3000".to_string() }
    }
}

impl Config {
    /// Load from the per-user config file, creating it with defaults if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content).context("Failed to write config file")?;

        Ok(())
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "voicecal", "voicecal")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.calendar.default_title, "새 일정");
        assert_eq!(config.calendar.time_zone, "Asia/Seoul");
        assert_eq!(config.calendar.reminders.len(), 2);
        assert_eq!(config.calendar.reminders[0].minutes, 1440);
        assert_eq!(config.api.listen_addr, "127.0.0.1:3000");
    }

    #[test]
    fn test_config_save_load() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.calendar.default_title = "일정".to_string();
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_config_load_creates_missing_file() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("config.toml");

        let loaded = Config::load_from(&config_path)?;
        assert!(config_path.exists());
        assert_eq!(loaded, Config::default());

        Ok(())
    }

    #[test]
    fn test_config_partial_file_uses_defaults() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[api]\nlisten_addr = \"0.0.0.0:8080\"\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.api.listen_addr, "0.0.0.0:8080");
        assert_eq!(loaded.calendar, CalendarConfig::default());

        Ok(())
    }

    #[test]
    fn test_config_rejects_malformed_toml() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[calendar\n")?;

        assert!(Config::load_from(&config_path).is_err());
        Ok(())
    }
}
