/// Application-level errors
///
/// The three failure classes the client distinguishes: local validation,
/// application errors reported by the backend with a message payload, and
/// transport or decode failures from the HTTP layer.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Non-2xx response whose body carried a `message` field. The message is
    /// shown to the user verbatim.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type AppResult<T> = Result<T, AppError>;
