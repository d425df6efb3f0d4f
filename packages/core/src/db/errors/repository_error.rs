use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Could not find document with key {0}")]
    NotFound(String),
    #[error("Invalid document key: {0}")]
    InvalidKey(String),
    #[error("Document {0} has no key, it must be stored first")]
    MissingKey(String),
    #[error("Database operation failed: {0}")]
    Database(#[from] polodb_core::Error),
    #[error("Could not serialize document: {0}")]
    Serialization(#[from] polodb_core::bson::ser::Error),
    #[error("Database task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),
}
