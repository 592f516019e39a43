use std::error::Error as StdError;

use thiserror::Error as ThisError;

type ErasedError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, ThisError)]
pub enum PersistenceError {
    /// No connection could be obtained from the backend.
    #[error("connection error: {0}")]
    Connection(#[source] ErasedError),

    #[error("query error: {0}")]
    Query(#[source] ErasedError),

    #[error("serialization error: {0}")]
    Serialization(#[source] ErasedError),
}

impl PersistenceError {
    pub fn by_connection(source: impl Into<ErasedError>) -> PersistenceError {
        PersistenceError::Connection(source.into())
    }

    pub fn by_query(source: impl Into<ErasedError>) -> PersistenceError {
        PersistenceError::Query(source.into())
    }

    pub fn by_serialization(source: impl Into<ErasedError>) -> PersistenceError {
        PersistenceError::Serialization(source.into())
    }

    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            PersistenceError::Connection(_) => "connection",
            PersistenceError::Query(_) => "query",
            PersistenceError::Serialization(_) => "serialization",
        }
    }
}
