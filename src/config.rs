use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;
use crate::core::scoring::{MAX_SIMILARITY, MIN_BASE_SIMILARITY};
use crate::models::SimilarityBonuses;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
    /// Seed every request's rng with this value for reproducible responses
    pub seed: Option<u64>,
}

impl MatchingSettings {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay_ms(),
            seed: None,
        }
    }
}

fn default_processing_delay_ms() -> u64 { 1500 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub bonuses: BonusesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BonusesConfig {
    #[serde(default = "default_style_match_bonus")]
    pub style_match: u8,
    #[serde(default = "default_many_subjects_bonus")]
    pub many_subjects: u8,
    #[serde(default = "default_some_subjects_bonus")]
    pub some_subjects: u8,
    #[serde(default = "default_similarity_cap")]
    pub cap: u8,
}

impl Default for BonusesConfig {
    fn default() -> Self {
        Self {
            style_match: default_style_match_bonus(),
            many_subjects: default_many_subjects_bonus(),
            some_subjects: default_some_subjects_bonus(),
            cap: default_similarity_cap(),
        }
    }
}

impl From<&BonusesConfig> for SimilarityBonuses {
    fn from(config: &BonusesConfig) -> Self {
        Self {
            style_match: config.style_match,
            many_subjects: config.many_subjects,
            some_subjects: config.some_subjects,
            cap: config.cap,
        }
    }
}

impl BonusesConfig {
    /// Reject a cap that would let scores leave the 70..=98 band
    fn check(&self) -> Result<(), ConfigError> {
        if !(MIN_BASE_SIMILARITY..=MAX_SIMILARITY).contains(&self.cap) {
            return Err(ConfigError::Message(format!(
                "scoring.bonuses.cap must be between {} and {}, got {}",
                MIN_BASE_SIMILARITY, MAX_SIMILARITY, self.cap
            )));
        }
        Ok(())
    }
}

fn default_style_match_bonus() -> u8 { 5 }
fn default_many_subjects_bonus() -> u8 { 10 }
fn default_some_subjects_bonus() -> u8 { 5 }
fn default_similarity_cap() -> u8 { MAX_SIMILARITY }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Output formatter selected by `logging.format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl LoggingSettings {
    /// Unknown values fall back to JSON
    pub fn log_format(&self) -> LogFormat {
        match self.format.to_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Json,
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with STUDY_MATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., STUDY_MATCH__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;
        settings.scoring.bonuses.check()?;
        Ok(settings)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("STUDY_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
