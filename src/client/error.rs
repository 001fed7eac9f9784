use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no API token set")]
    MissingToken,

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("Server returned error: {status} - {message}")]
    ServerError { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, ClientError>;
