use std::fs;
use chrono::FixedOffset;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::presentation::ICON_BASE_URL;

#[derive(Deserialize, Debug)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize, Debug)]
pub struct Files {
    pub forecast_file: String,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    #[default]
    Text,
    Json,
}

#[derive(Deserialize, Debug)]
pub struct Presentation {
    #[serde(default = "default_icon_base_url")]
    pub icon_base_url: String,
    pub utc_offset_hours: Option<i32>,
    #[serde(default)]
    pub output: Output,
}

impl Default for Presentation {
    fn default() -> Self {
        Presentation {
            icon_base_url: default_icon_base_url(),
            utc_offset_hours: None,
            output: Output::default(),
        }
    }
}

impl Presentation {
    /// Returns the fixed offset to group days in, None means the local timezone
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        self.utc_offset_hours.and_then(|h| FixedOffset::east_opt(h * 3600))
    }
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub general: General,
    pub files: Files,
    #[serde(default)]
    pub presentation: Presentation,
}

fn default_icon_base_url() -> String {
    ICON_BASE_URL.to_string()
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {

    let toml = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&toml)?;

    Ok(config)
}
