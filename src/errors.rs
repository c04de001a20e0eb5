use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ConfigError::File: {0}")]
    File(#[from] std::io::Error),
    #[error("ConfigError::Document: {0}")]
    Document(#[from] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("ForecastError::File: {0}")]
    File(#[from] std::io::Error),
    #[error("ForecastError::Document: {0}")]
    Document(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("LoggingError::File: {0}")]
    File(#[from] std::io::Error),
    #[error("LoggingError::Config: {0}")]
    Config(String),
    #[error("LoggingError::Logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
