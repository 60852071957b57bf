use thiserror::Error;

use crate::domain::customer::CustomerError;
use crate::domain::product::ProductError;

#[derive(Debug, Error)]
pub enum OrderError {
  #[error("Invalid order: {0}")]
  InvalidOrder(String),

  #[error("Invalid order item: {0}")]
  InvalidOrderItem(String),

  #[error("Order item '{0}' is already part of the order")]
  DuplicateOrderItem(String),

  #[error("Order item '{0}' belongs to another order")]
  ForeignOrderItem(String),

  #[error("Order not found: {0}")]
  OrderNotFound(String),

  #[error("Customer error: {0}")]
  Customer(#[from] CustomerError),

  #[error("Product error: {0}")]
  Product(#[from] ProductError),

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),
}
