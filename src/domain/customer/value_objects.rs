use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Invalid address: {0}")]
  InvalidAddress(String),
}

// Address - postal address, immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
  street: String,
  number: i32,
  zip: String,
  city: String,
}

impl Address {
  pub fn new(
    street: impl Into<String>,
    number: i32,
    zip: impl Into<String>,
    city: impl Into<String>,
  ) -> Result<Self, ValueObjectError> {
    let street = street.into();
    let zip = zip.into();
    let city = city.into();

    if street.trim().is_empty() {
      return Err(ValueObjectError::InvalidAddress(
        "Street is required".to_string(),
      ));
    }
    if number <= 0 {
      return Err(ValueObjectError::InvalidAddress(
        "Number must be greater than zero".to_string(),
      ));
    }
    if zip.trim().is_empty() {
      return Err(ValueObjectError::InvalidAddress(
        "Zip is required".to_string(),
      ));
    }
    if city.trim().is_empty() {
      return Err(ValueObjectError::InvalidAddress(
        "City is required".to_string(),
      ));
    }

    Ok(Self {
      street,
      number,
      zip,
      city,
    })
  }

  pub fn street(&self) -> &str {
    &self.street
  }

  pub fn number(&self) -> i32 {
    self.number
  }

  pub fn zip(&self) -> &str {
    &self.zip
  }

  pub fn city(&self) -> &str {
    &self.city
  }
}

impl fmt::Display for Address {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}, {}, {} {}",
      self.street, self.number, self.zip, self.city
    )
  }
}
