//! CLI configuration

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use domain_disclosure::{DisclosureError, EngineSettings, QuestionBank, UsageMode};

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
    /// Which flow embeds the questionnaire; selects the cancellation behavior
    pub usage_mode: UsageMode,
    /// JSON question bank; the built-in medical bank when unset
    pub question_bank_path: Option<PathBuf>,
    pub engine: EngineSettings,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            usage_mode: UsageMode::Applicant,
            question_bank_path: None,
            engine: EngineSettings::default(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from `disclosure.toml` (optional) and `DISCLOSURE_*` variables
    ///
    /// Nested engine settings use a double underscore, e.g.
    /// `DISCLOSURE_ENGINE__ADVANCE_DELAY_MS=500`.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("disclosure").required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Loads configuration from TOML text only
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Loads the configured question bank
    pub fn load_bank(&self) -> Result<QuestionBank, DisclosureError> {
        match &self.question_bank_path {
            Some(path) => QuestionBank::from_path(path),
            None => Ok(QuestionBank::standard_medical()),
        }
    }
}

fn environment() -> Environment {
    Environment::with_prefix("DISCLOSURE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
