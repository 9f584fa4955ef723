use thiserror::Error;

/// Errors raised when building a [`HashTable`](crate::HashTable).
///
/// Absence of a key is not an error: lookups report it with `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, TableError>;
