use portal_session::SessionError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Session(#[from] SessionError),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
