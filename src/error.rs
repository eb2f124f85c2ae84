use thiserror::Error;

/// Errors raised by the library. Display strings double as the status text
/// shown to the operator.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Please enter a GitHub URL.")]
    MissingUrl,

    #[error("Invalid GitHub URL format.")]
    InvalidUrl(String),

    #[error("Repo not found or API limit reached.")]
    RepoUnavailable { status: u16 },

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("README has no content")]
    EmptyReadme,

    #[error("README is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("README is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("no clipboard command found (tried {0})")]
    NoClipboard(String),

    #[error(transparent)]
    Http(#[from] ureq::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = FolioError> = std::result::Result<T, E>;
