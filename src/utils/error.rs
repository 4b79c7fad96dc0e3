use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoldbachError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid number '{value}': {reason}")]
    InvalidNumber { value: String, reason: String },

    #[error("Input closed before a valid number was entered")]
    InputClosed,
}

impl GoldbachError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            GoldbachError::IoError(e) => format!("Could not read or write the console: {}", e),
            GoldbachError::SerializationError(e) => format!("Could not encode the report: {}", e),
            GoldbachError::ConfigError { message } => format!("Configuration problem: {}", message),
            GoldbachError::InvalidConfigValueError { field, value, .. } => {
                format!("Setting '{}' has an invalid value '{}'", field, value)
            }
            GoldbachError::InvalidNumber { value, reason } => format!("{} (got '{}')", reason, value),
            GoldbachError::InputClosed => "No number was entered".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GoldbachError::IoError(_) => "Check that stdin and stdout are available".to_string(),
            GoldbachError::SerializationError(_) => "Try the text output format".to_string(),
            GoldbachError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            GoldbachError::InvalidConfigValueError { reason, .. } => reason.clone(),
            GoldbachError::InvalidNumber { .. } => {
                "Pass an even integer greater than or equal to 4".to_string()
            }
            GoldbachError::InputClosed => {
                "Run again and enter a number, or pass --number".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GoldbachError>;
