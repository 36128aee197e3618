use domain_vector::VectorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error(transparent)]
    Embedding(#[from] VectorError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InventoryResult<T> = Result<T, InventoryError>;

impl From<mongodb::error::Error> for InventoryError {
    fn from(err: mongodb::error::Error) -> Self {
        InventoryError::Database(err.to_string())
    }
}

impl From<mongodb::bson::de::Error> for InventoryError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        InventoryError::Internal(format!("Unexpected document shape: {}", err))
    }
}
