use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the election model.
/// Every operation validates before mutating, so an error leaves state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed input: empty names, bad vote counts, duplicate or unknown candidates.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The operation is not allowed in the current election state.
    #[error("Illegal state: {0}")]
    IllegalState(String),
}

impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn illegal_state(msg: impl Into<String>) -> Self {
        Self::IllegalState(msg.into())
    }
}
