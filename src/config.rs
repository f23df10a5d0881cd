use anyhow::Context;
use camino::{
    Utf8Path,
    Utf8PathBuf,
};
use serde::{
    Deserialize,
    Deserializer,
};
use std::collections::HashMap;
use tic_tac_toe::Team;
use tracing_subscriber::filter::EnvFilter;

fn default_computer_team() -> Team {
    Team::O
}

fn default_log_file_dir() -> Utf8PathBuf {
    Utf8PathBuf::from("./logs")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn deserialize_team<'de, D>(deserializer: D) -> Result<Team, D::Error>
where
    D: Deserializer<'de>,
{
    let team = String::deserialize(deserializer)?;
    team.parse().map_err(serde::de::Error::custom)
}

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(
        default = "default_computer_team",
        deserialize_with = "deserialize_team"
    )]
    computer_team: Team,

    #[serde(default)]
    show_tile_numbers: bool,

    #[serde(default = "default_log_file_dir")]
    log_file_dir: Utf8PathBuf,

    #[serde(default = "default_log_level")]
    log_level: String,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

impl Config {
    /// The team the computer plays. X always moves first.
    pub fn computer_team(&self) -> Team {
        self.computer_team
    }

    /// The team the human plays.
    pub fn human_team(&self) -> Team {
        self.computer_team.inverse()
    }

    /// Whether empty tiles are drawn with their index.
    pub fn show_tile_numbers(&self) -> bool {
        self.show_tile_numbers
    }

    pub fn log_file_dir(&self) -> &Utf8Path {
        &self.log_file_dir
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Load a config from a path
    pub fn load_from_path(path: &Utf8Path) -> anyhow::Result<Self> {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config from '{path}'"))
            .and_then(|s| Self::load_from_str(&s))
    }

    /// Load a config from a str
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("failed to parse config")
    }

    /// Validate a config
    pub fn validate(&self) -> Vec<ValidationMessage> {
        let mut errors = Vec::new();

        if let Err(e) = EnvFilter::try_new(&self.log_level) {
            errors.push(ValidationMessage {
                severity: Severity::Error,
                error: ValidationError::InvalidLogLevel {
                    level: self.log_level.clone(),
                    message: e.to_string(),
                },
            });
        }

        let mut unknown_keys: Vec<_> = self.extra.keys().cloned().collect();
        unknown_keys.sort();
        for key in unknown_keys {
            errors.push(ValidationMessage {
                severity: Severity::Warn,
                error: ValidationError::UnknownKey(key),
            });
        }

        errors
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            computer_team: default_computer_team(),
            show_tile_numbers: false,
            log_file_dir: default_log_file_dir(),
            log_level: default_log_level(),
            extra: HashMap::new(),
        }
    }
}

#[derive(Debug)]
pub struct ValidationMessage {
    severity: Severity,
    error: ValidationError,
}

impl ValidationMessage {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn error(&self) -> &ValidationError {
        &self.error
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid log level '{level}': {message}")]
    InvalidLogLevel { level: String, message: String },

    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}
