use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::filter;

pub const DEFAULT_FILE_NAME: &str = "lectern.toml";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
// Route the lesson form has always posted to. Its name belongs to the
// financials API and is pending product clarification: override it with
// `lesson_endpoint` once the lesson route is settled.
pub const DEFAULT_LESSON_ENDPOINT: &str = "/api/financials/deposit_amount";
pub const DEFAULT_COURSE_ID: u64 = 1;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SIGNUP_DELAY_MS: u64 = 3000;

/// How the signup screen authenticates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Waits for `signup_delay_ms` and always succeeds.
    #[default]
    Simulated,
    /// Posts the credentials to the API.
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_lesson_endpoint")]
    pub lesson_endpoint: String,
    /// Course displayed on the home page.
    #[serde(default = "default_course_id")]
    pub course_id: u64,
    /// Token of an existing session, the signup screen is skipped if set.
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub auth: AuthMode,
    #[serde(default = "default_signup_delay_ms")]
    pub signup_delay_ms: u64,
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Use iced debug feature if true.
    pub debug: Option<bool>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_lesson_endpoint() -> String {
    DEFAULT_LESSON_ENDPOINT.to_string()
}

fn default_course_id() -> u64 {
    DEFAULT_COURSE_ID
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_signup_delay_ms() -> u64 {
    DEFAULT_SIGNUP_DELAY_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            lesson_endpoint: default_lesson_endpoint(),
            course_id: DEFAULT_COURSE_ID,
            access_token: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            auth: AuthMode::default(),
            signup_delay_ms: DEFAULT_SIGNUP_DELAY_MS,
            log_level: None,
            debug: None,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_str::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        // check if log_level field is valid
        config.log_level()?;
        if config.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidField(
                "request_timeout_secs",
                "must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }

    /// Reads the file at `path`, falling back to the defaults if it does not exist.
    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::from_file(path) {
            Err(ConfigError::NotFound) => {
                tracing::info!("No configuration file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            res => res,
        }
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn signup_delay(&self) -> Duration {
        Duration::from_millis(self.signup_delay_ms)
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    InvalidField(&'static str, String),
    NotFound,
    ReadingFile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Config file not found"),
            Self::InvalidField(field, message) => {
                write!(f, "Config field {} is invalid: {}", field, message)
            }
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
