use super::value_objects::ValueObjectError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomerError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("Invalid customer: {0}")]
  InvalidCustomer(String),

  #[error("Address is mandatory to activate a customer")]
  AddressRequired,

  #[error("Customer not found: {0}")]
  CustomerNotFound(String),

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),
}
