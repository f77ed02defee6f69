use thiserror::Error;

/// Field-level validation failures raised by [`crate::domain::Product`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("price cannot be negative: {0}")]
    NegativePrice(f64),
    #[error("price must be a finite number")]
    NonFinitePrice,
    #[error("quantity cannot be negative: {0}")]
    NegativeQuantity(i64),
}

/// Errors returned by the inventory service and its client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
