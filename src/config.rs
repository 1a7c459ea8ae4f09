use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub sheets: SheetsSettings,
    pub openai: OpenAiSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetsSettings {
    #[serde(default = "default_sheets_endpoint")]
    pub endpoint: String,
    pub spreadsheet_id: String,
    #[serde(default = "default_range")]
    pub range: String,
    pub access_token: String,
}

fn default_sheets_endpoint() -> String { "https://sheets.googleapis.com".to_string() }
fn default_range() -> String { "Form Responses".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    #[serde(default = "default_openai_endpoint")]
    pub endpoint: String,
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_openai_endpoint() -> String { "https://api.openai.com".to_string() }
fn default_model() -> String { "gpt-4o".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Candidate cap passed into the scoring prompt; the model may return
    /// fewer lines but is asked never to return more.
    #[serde(default = "default_max_matches")]
    pub max_matches: u8,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self { max_matches: default_max_matches() }
    }
}

fn default_max_matches() -> u8 { 10 }

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

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with MENTOR_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with MENTOR_)
            // e.g., MENTOR_OPENAI__MODEL -> openai.model
            .add_source(
                Environment::with_prefix("MENTOR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Pull secrets from their conventional environment variables
        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MENTOR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Override secret settings from plain environment variables
///
/// `OPENAI_API_KEY` and `SHEETS_ACCESS_TOKEN` are checked first, then the
/// prefixed forms (`MENTOR_OPENAI__API_KEY`, `MENTOR_SHEETS__ACCESS_TOKEN`).
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let api_key = env::var("OPENAI_API_KEY")
        .or_else(|_| env::var("MENTOR_OPENAI__API_KEY"))
        .ok();
    let access_token = env::var("SHEETS_ACCESS_TOKEN")
        .or_else(|_| env::var("MENTOR_SHEETS__ACCESS_TOKEN"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(api_key) = api_key {
        builder = builder.set_override("openai.api_key", api_key)?;
    }
    if let Some(access_token) = access_token {
        builder = builder.set_override("sheets.access_token", access_token)?;
    }

    builder.build()
}
