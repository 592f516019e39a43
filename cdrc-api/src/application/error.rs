use cdrc_common::{clock::ClockError, persistence::PersistenceError};
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ApplicationError {
    /// The database could not be reached.
    #[error("database unavailable: {0}")]
    Unavailable(#[source] PersistenceError),

    #[error("unexpected failure: {0}")]
    Unexpected(#[source] PersistenceError),

    #[error("could not determine today: {0}")]
    Clock(#[from] ClockError),
}

impl From<PersistenceError> for ApplicationError {
    fn from(err: PersistenceError) -> ApplicationError {
        match err {
            PersistenceError::Connection(_) => ApplicationError::Unavailable(err),
            PersistenceError::Query(_) | PersistenceError::Serialization(_) => ApplicationError::Unexpected(err),
        }
    }
}

impl ApplicationError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApplicationError::Unavailable(_) => "unavailable",
            ApplicationError::Unexpected(_) => "unexpected",
            ApplicationError::Clock(_) => "clock",
        }
    }
}
