//! Error handling for the ATS scorer
//!
//! The scoring engine itself never fails; these errors come from the
//! surrounding input, configuration and output layers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, AtsError>;

impl From<toml::de::Error> for AtsError {
    fn from(err: toml::de::Error) -> Self {
        AtsError::Configuration(format!("Failed to parse config: {}", err))
    }
}

impl From<toml::ser::Error> for AtsError {
    fn from(err: toml::ser::Error) -> Self {
        AtsError::Configuration(format!("Failed to serialize config: {}", err))
    }
}
