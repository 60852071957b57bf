use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
  #[error("Invalid product: {0}")]
  InvalidProduct(String),

  #[error("Product not found: {0}")]
  ProductNotFound(String),

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),
}
