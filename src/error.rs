use thiserror::Error;

/// Categorized fetch failures surfaced to the screen.
///
/// Every variant is recoverable: the user retries manually or the next
/// auto-refresh tick does. `Display` is the user-facing message, in Spanish
/// like the rest of the screen text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The host could not be resolved or reached
    #[error("Error de conexión. Verifica tu internet.")]
    Connection,

    /// The request exceeded the configured timeout
    #[error("Tiempo de espera agotado.")]
    Timeout,

    /// The server answered with a non-2xx status code
    #[error("Error del servidor: {0}")]
    Server(u16),

    /// Anything else: malformed JSON, missing fields, unexpected transport failure
    #[error("Error: {0}")]
    Unknown(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        // Timeout is checked first: a connect that times out counts as a
        // timeout for the user, not as an unreachable host.
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_connect() {
            FetchError::Connection
        } else {
            FetchError::Unknown(e.to_string())
        }
    }
}
