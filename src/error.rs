use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChConnectError {
    #[error("Invalid connection URI: {0}")]
    Uri(String),
    #[error("Invalid additional headers: {0}")]
    Headers(String),
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server error (status {status}): {message}")]
    Server { status: u16, message: String },
    #[error("Malformed server response: {0}")]
    Response(String),
    #[error("Driver error: {0}")]
    Driver(String),
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

pub type Result<T> = std::result::Result<T, ChConnectError>;
