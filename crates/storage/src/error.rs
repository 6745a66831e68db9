use thiserror::Error;

/// Errors surfaced by a [`crate::Storage`] implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("username '{0}' is already taken")]
    UsernameTaken(String),
}
