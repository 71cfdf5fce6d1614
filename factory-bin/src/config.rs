use std::env;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub exact: bool,
    pub output: OutputFormat,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            exact: false,
            output: OutputFormat::Text,
            log_level: "info".into(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let exact = lookup("FACTORY_EXACT")
            .map(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.exact);

        let output = match lookup("FACTORY_OUTPUT").as_deref() {
            None | Some("text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(other) => return Err(AppError::UnknownOutputFormat(other.to_string())),
        };

        Ok(Self {
            exact,
            output,
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        })
    }

    pub fn init_logging(&self) -> Result<(), AppError> {
        let filter = EnvFilter::try_new(&self.log_level)
            .map_err(|_| AppError::LogFilter(self.log_level.clone()))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();

        Ok(())
    }
}
