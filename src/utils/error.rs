use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    /// Non-2xx answer from the location service, message taken from its body.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A 2xx answer whose body matched none of the known location shapes.
    /// The full payload is kept so the upstream format can be diagnosed.
    #[error("compute-fault-location returned an unexpected format: {payload}")]
    LocationFormat { payload: serde_json::Value },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GeoError {
    /// Short message meant for the terminal rather than the log.
    pub fn user_friendly_message(&self) -> String {
        match self {
            GeoError::ApiError(_) => "Could not reach the location service".to_string(),
            GeoError::Http { status, message } => {
                format!("Location service rejected the request ({}): {}", status, message)
            }
            GeoError::LocationFormat { .. } => {
                format!("Location service answered in an unknown format. {}", self)
            }
            GeoError::MissingConfigError { field } => {
                format!("{} must be set before starting", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
