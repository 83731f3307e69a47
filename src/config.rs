use crate::errors::{ConfigError, PomError, Result};
use po_api::{ClientConfig, BASE_URL_ENV};
use std::fs;
use std::path::{Path, PathBuf};

const API_SECTION: &str = "api";
const BASE_URL_KEY: &str = "base_url";

/// Configuration manager for pom, backed by `~/.po-manager/config.ini`
#[derive(Debug, Clone)]
pub struct Config {
    config_path: PathBuf,
    data: ini::Ini,
}

impl Config {
    /// Load the config from the default location
    pub fn new() -> Result<Self> {
        let config_dir = get_config_dir()?;
        Self::load_from(config_dir.join("config.ini"))
    }

    /// Load the config from an explicit file; a missing file yields an empty config.
    /// Nothing is created on disk until [`Config::save`].
    pub fn load_from(config_path: PathBuf) -> Result<Self> {
        let data = if config_path.exists() {
            ini::Ini::load_from_file(&config_path)
                .map_err(|e| ConfigError::IniError(e.to_string()))?
        } else {
            ini::Ini::new()
        };

        Ok(Config { config_path, data })
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Save the configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(config_dir) = self.config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir)
                    .map_err(|e| ConfigError::DirectoryCreationFailed(e.to_string()))?;
            }
        }

        self.data
            .write_to_file(&self.config_path)
            .map_err(|e| ConfigError::IniError(e.to_string()))?;
        Ok(())
    }

    /// Get a configuration value
    pub fn get_value(&self, section: &str, key: &str) -> Option<String> {
        self.data
            .get_from(Some(section), key)
            .map(|s| s.to_string())
    }

    /// Set a configuration value. The API base URL is validated before it is stored.
    pub fn set_value(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        if section == API_SECTION && key == BASE_URL_KEY {
            ClientConfig::new(value).map_err(|_| ConfigError::InvalidValue {
                field: format!("{}.{}", section, key),
                value: value.to_string(),
            })?;
        }
        self.data.with_section(Some(section)).set(key, value);
        Ok(())
    }

    /// Remove a configuration value, returning whether it was present
    pub fn unset_value(&mut self, section: &str, key: &str) -> bool {
        self.data
            .section_mut(Some(section))
            .and_then(|section_map| section_map.remove(key))
            .is_some()
    }

    /// Get API base URL: `PO_MANAGER_API_URL` first, then the file
    pub fn get_base_url(&self) -> Option<String> {
        self.resolve_base_url(std::env::var(BASE_URL_ENV).ok())
    }

    /// Pick the base URL given the environment value; blank counts as unset
    fn resolve_base_url(&self, from_env: Option<String>) -> Option<String> {
        from_env
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.get_value(API_SECTION, BASE_URL_KEY))
    }

    /// Set API base URL
    pub fn set_base_url(&mut self, base_url: &str) -> Result<()> {
        self.set_value(API_SECTION, BASE_URL_KEY, base_url)
    }

    /// Show all configuration as a formatted string
    pub fn show_config(&self) -> String {
        let mut output = String::new();

        for (section_name, section) in self.data.iter() {
            if section.is_empty() {
                continue;
            }
            if let Some(section_name) = section_name {
                output.push_str(&format!("[{}]\n", section_name));
            }

            for (key, value) in section.iter() {
                output.push_str(&format!("{} = {}\n", key, value));
            }
            output.push('\n');
        }

        output
    }
}

impl po_api::ApiConfig for Config {
    type Error = PomError;

    fn get_base_url(&self) -> std::result::Result<Option<String>, Self::Error> {
        Ok(Config::get_base_url(self))
    }
}

/// Load configuration
pub fn load_config() -> Result<Config> {
    Config::new()
}

/// Get configuration directory path
fn get_config_dir() -> Result<PathBuf> {
    let home_dir = home::home_dir().ok_or_else(|| {
        ConfigError::DirectoryCreationFailed("Could not find home directory".to_string())
    })?;

    Ok(home_dir.join(".po-manager"))
}
