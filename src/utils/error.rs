use thiserror::Error;

#[derive(Error, Debug)]
pub enum UiError {
    #[error("Partial request to {endpoint} failed: {reason}")]
    FragmentFetchFailed {
        endpoint: String,
        status: Option<u16>,
        reason: String,
    },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Clipboard error: {message}")]
    Clipboard { message: String },
}

impl UiError {
    pub fn fetch_failed(endpoint: &str, status: Option<u16>, reason: impl Into<String>) -> Self {
        UiError::FragmentFetchFailed {
            endpoint: endpoint.to_string(),
            status,
            reason: reason.into(),
        }
    }

    /// HTTP status of a failed partial request, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            UiError::FragmentFetchFailed { status, .. } => *status,
            UiError::HttpClient(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            UiError::ConfigError { .. }
                | UiError::ConfigValidationError { .. }
                | UiError::InvalidConfigValueError { .. }
                | UiError::MissingConfigError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            UiError::FragmentFetchFailed {
                endpoint,
                status: Some(code),
                ..
            } => format!("Could not load '{}' (server answered {})", endpoint, code),
            UiError::FragmentFetchFailed { endpoint, .. } => {
                format!("Could not reach the server while loading '{}'", endpoint)
            }
            UiError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            UiError::MissingConfigError { field } => format!("Setting '{}' is required", field),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            UiError::FragmentFetchFailed { status: Some(_), .. } => {
                "Check that the endpoint name exists on the server"
            }
            UiError::FragmentFetchFailed { status: None, .. } | UiError::HttpClient(_) => {
                "Check that the server is running and --base-url points at it"
            }
            UiError::IoError(_) => "Check the file path and its permissions",
            UiError::Clipboard { .. } => "Copy the text manually",
            e if e.is_config_error() => "Fix the configuration file or command line flags",
            _ => "Run again with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, UiError>;
