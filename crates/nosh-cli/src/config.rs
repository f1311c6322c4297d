//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use nosh_domain::{DietProfile, TargetStrategy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the food database and log files.
    /// Defaults to `~/.nosh/data` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Diet profile and chosen target strategy, once set up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet: Option<DietConfig>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// The user's diet profile plus the strategy used for the daily target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DietConfig {
    /// The profile fed into the target formula
    pub profile: DietProfile,

    /// Which formula to use
    #[serde(default = "default_strategy")]
    pub strategy: TargetStrategy,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".nosh").join("config.toml"))
    }

    /// Load configuration from file or create default.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// The directory holding the database files.
    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".nosh").join("data"))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_strategy() -> TargetStrategy {
    TargetStrategy::HarrisBenedict
}

#[cfg(test)]
mod tests {
    use super::*;
    use nosh_domain::{ActivityLevel, Sex};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.data_dir.is_none());
        assert!(config.diet.is_none());
        assert!(config.settings.color);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut config = Config::default();
        config.data_dir = Some(PathBuf::from("/tmp/nosh-test"));
        config.diet = Some(DietConfig {
            profile: DietProfile {
                sex: Sex::Female,
                weight_kg: 62.0,
                height_cm: 168.0,
                age_years: 29,
                activity: ActivityLevel::LightlyActive,
            },
            strategy: TargetStrategy::MifflinStJeor,
        });

        let encoded = toml::to_string_pretty(&config).unwrap();
        let decoded: Config = toml::from_str(&encoded).unwrap();

        assert_eq!(decoded.data_dir, config.data_dir);
        let diet = decoded.diet.unwrap();
        assert_eq!(diet.profile.age_years, 29);
        assert_eq!(diet.strategy, TargetStrategy::MifflinStJeor);
    }

    #[test]
    fn test_missing_diet_section_defaults_to_none() {
        let decoded: Config = toml::from_str("[settings]\ncolor = false\n").unwrap();
        assert!(decoded.diet.is_none());
        assert!(!decoded.settings.color);
    }
}
