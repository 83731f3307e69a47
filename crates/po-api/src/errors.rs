use thiserror::Error;

/// API-specific errors for po-api
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("HTTP error: {0}")]
    Status(#[from] StatusError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// The exchange never completed; no HTTP status is available
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}

/// Non-2xx answers, raised only by the typed `PoManager` layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found")]
    NotFound,

    #[error("Service unavailable")]
    ServiceUnavailable,

    #[error("HTTP error {status}: {message}")]
    HttpError { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;
