use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringPolicy;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub sources: Vec<SourceSettings>,
    pub ingest: IngestSettings,
    pub store: StoreSettings,
    pub scoring: ScoringSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
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

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3001
}

/// One career-site board to aggregate.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    pub company: String,
    pub board: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngestSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_per_source_limit")]
    pub per_source_limit: usize,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            per_source_limit: default_per_source_limit(),
        }
    }
}

fn default_base_url() -> String {
    "https://boards-api.greenhouse.io".to_string()
}
fn default_per_source_limit() -> usize {
    50
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

fn default_data_dir() -> String {
    "data".to_string()
}
fn default_ttl_secs() -> u64 {
    300
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ScoringSettings {
    pub weights: WeightsConfig,
}

/// Scoring policy as configuration, so the weights are auditable and
/// tunable without touching the engine. Defaults mirror
/// `ScoringPolicy::default()`.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_phrase_title")]
    pub phrase_title: f64,
    #[serde(default = "default_phrase_other")]
    pub phrase_other: f64,
    #[serde(default = "default_term_title")]
    pub term_title: f64,
    #[serde(default = "default_term_other")]
    pub term_other: f64,
    #[serde(default = "default_term_cap")]
    pub term_cap: f64,
    #[serde(default = "default_seniority_high")]
    pub seniority_high: f64,
    #[serde(default = "default_seniority_medium")]
    pub seniority_medium: f64,
    #[serde(default = "default_seniority_low")]
    pub seniority_low: f64,
    #[serde(default = "default_domain_category")]
    pub domain_category: f64,
    #[serde(default = "default_domain_cap")]
    pub domain_cap: f64,
    #[serde(default = "default_role_type")]
    pub role_type: f64,
    #[serde(default = "default_negative_term")]
    pub negative_term: f64,
    #[serde(default = "default_moderate_category")]
    pub moderate_category: f64,
    #[serde(default = "default_location_bonus")]
    pub location_bonus: f64,
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,
    #[serde(default = "default_score_divisor")]
    pub score_divisor: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            phrase_title: default_phrase_title(),
            phrase_other: default_phrase_other(),
            term_title: default_term_title(),
            term_other: default_term_other(),
            term_cap: default_term_cap(),
            seniority_high: default_seniority_high(),
            seniority_medium: default_seniority_medium(),
            seniority_low: default_seniority_low(),
            domain_category: default_domain_category(),
            domain_cap: default_domain_cap(),
            role_type: default_role_type(),
            negative_term: default_negative_term(),
            moderate_category: default_moderate_category(),
            location_bonus: default_location_bonus(),
            match_threshold: default_match_threshold(),
            score_divisor: default_score_divisor(),
        }
    }
}

impl WeightsConfig {
    pub fn to_policy(&self) -> ScoringPolicy {
        ScoringPolicy {
            phrase_title: self.phrase_title,
            phrase_other: self.phrase_other,
            term_title: self.term_title,
            term_other: self.term_other,
            term_cap: self.term_cap,
            seniority_high: self.seniority_high,
            seniority_medium: self.seniority_medium,
            seniority_low: self.seniority_low,
            domain_category: self.domain_category,
            domain_cap: self.domain_cap,
            role_type: self.role_type,
            negative_term: self.negative_term,
            moderate_category: self.moderate_category,
            location_bonus: self.location_bonus,
            match_threshold: self.match_threshold,
            score_divisor: self.score_divisor,
        }
    }
}

fn default_phrase_title() -> f64 {
    0.5
}
fn default_phrase_other() -> f64 {
    0.25
}
fn default_term_title() -> f64 {
    0.2
}
fn default_term_other() -> f64 {
    0.1
}
fn default_term_cap() -> f64 {
    0.5
}
fn default_seniority_high() -> f64 {
    0.4
}
fn default_seniority_medium() -> f64 {
    0.25
}
fn default_seniority_low() -> f64 {
    0.1
}
fn default_domain_category() -> f64 {
    0.08
}
fn default_domain_cap() -> f64 {
    0.35
}
fn default_role_type() -> f64 {
    0.15
}
fn default_negative_term() -> f64 {
    0.3
}
fn default_moderate_category() -> f64 {
    0.25
}
fn default_location_bonus() -> f64 {
    0.05
}
fn default_match_threshold() -> f64 {
    0.20
}
fn default_score_divisor() -> f64 {
    2.0
}

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

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with RADAR_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with RADAR__)
            // e.g., RADAR__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("RADAR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("RADAR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_mirror_policy() {
        let weights = WeightsConfig::default();
        let policy = weights.to_policy();
        let defaults = ScoringPolicy::default();

        assert_eq!(policy.phrase_title, defaults.phrase_title);
        assert_eq!(policy.term_cap, defaults.term_cap);
        assert_eq!(policy.domain_cap, defaults.domain_cap);
        assert_eq!(policy.match_threshold, defaults.match_threshold);
        assert_eq!(policy.score_divisor, defaults.score_divisor);
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 3001);
        assert_eq!(settings.ingest.per_source_limit, 50);
        assert_eq!(settings.store.data_dir, "data");
        assert!(settings.sources.is_empty());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }
}
