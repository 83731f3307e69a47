use thiserror::Error;

#[derive(Error, Debug)]
pub enum PomError {
    #[error("API error: {0}")]
    Api(#[from] po_api::ApiError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Config directory creation failed: {0}")]
    DirectoryCreationFailed(String),

    #[error("INI parsing error: {0}")]
    IniError(String),
}

pub type Result<T> = std::result::Result<T, PomError>;
