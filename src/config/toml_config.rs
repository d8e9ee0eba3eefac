use crate::core::partial_loader::{ERROR_HTML, SPINNER_DELAY, SPINNER_HTML};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, UiError};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const MAX_SPINNER_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub loader: LoaderSettings,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderSettings {
    pub base_url: String,
    pub spinner_delay_ms: u64,
    pub spinner_html: String,
    pub error_html: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            spinner_delay_ms: SPINNER_DELAY.as_millis() as u64,
            spinner_html: SPINNER_HTML.to_string(),
            error_html: ERROR_HTML.to_string(),
        }
    }
}

impl LoaderSettings {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl ConfigProvider for LoaderSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn spinner_delay(&self) -> Duration {
        Duration::from_millis(self.spinner_delay_ms)
    }

    fn spinner_html(&self) -> &str {
        &self.spinner_html
    }

    fn error_html(&self) -> &str {
        &self.error_html
    }
}

impl Validate for LoaderSettings {
    fn validate(&self) -> Result<()> {
        validate_url("loader.base_url", &self.base_url)?;
        validate_range(
            "loader.spinner_delay_ms",
            self.spinner_delay_ms,
            0..=MAX_SPINNER_DELAY_MS,
        )?;
        validate_non_empty_string("loader.error_html", &self.error_html)?;
        Ok(())
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UiError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| UiError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| UiError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.loader.validate()?;

        if let Some(level) = self.log_level() {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level) {
                return Err(UiError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }
}
