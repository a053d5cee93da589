/// Errors raised by business operations.
///
/// The HTTP layer never shows these details to clients; they are logged and
/// replaced by an opaque envelope.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
