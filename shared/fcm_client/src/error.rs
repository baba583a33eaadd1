#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("credentials error: {0}")]
    Credentials(String),

    #[error("jwt error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    ///
    /// FCM responded with non-success status.
    /// `code` holds FCM error code (e.g. `UNREGISTERED`) when response contained one
    ///
    #[error("message rejected with status {status}: {message}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
