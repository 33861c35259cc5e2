#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Channel not found: {0}")]
    ChannelNotFound(String),
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest_middleware::Error),
    #[error("HTTP error: {0}")]
    Response(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}
