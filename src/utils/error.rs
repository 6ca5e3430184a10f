use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {context}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        context: String,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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
}

impl EtlError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::ApiError(_) => "Check network connectivity and the api.base_url setting",
            EtlError::UnexpectedStatus { status, .. } if status.as_u16() == 401 => {
                "Check that SERPAPI_KEY is set to a valid key"
            }
            EtlError::UnexpectedStatus { .. } => "Check the API key quota and request parameters",
            EtlError::CsvError(_) | EtlError::IoError(_) => {
                "Check that the output directory exists or can be created and is writable"
            }
            EtlError::SerializationError(_) => "The API response was not valid JSON",
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags and retry"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
