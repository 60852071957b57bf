use rust_decimal::Decimal;
use serde::Serialize;

use super::errors::ProductError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
  id: String,
  name: String,
  price: Decimal,
}

impl Product {
  pub fn new(
    id: impl Into<String>,
    name: impl Into<String>,
    price: Decimal,
  ) -> Result<Self, ProductError> {
    let product = Self {
      id: id.into(),
      name: name.into(),
      price,
    };
    product.validate()?;
    Ok(product)
  }

  fn validate(&self) -> Result<(), ProductError> {
    if self.id.trim().is_empty() {
      return Err(ProductError::InvalidProduct("Id is required".to_string()));
    }
    if self.name.trim().is_empty() {
      return Err(ProductError::InvalidProduct(
        "Name is required".to_string(),
      ));
    }
    if self.price.is_sign_negative() {
      return Err(ProductError::InvalidProduct(
        "Price cannot be negative".to_string(),
      ));
    }
    Ok(())
  }

  pub fn id(&self) -> &str {
    &self.id
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn price(&self) -> Decimal {
    self.price
  }

  pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
    let name = name.into();
    if name.trim().is_empty() {
      return Err(ProductError::InvalidProduct(
        "Name is required".to_string(),
      ));
    }
    self.name = name;
    Ok(())
  }

  pub fn change_price(&mut self, price: Decimal) -> Result<(), ProductError> {
    if price.is_sign_negative() {
      return Err(ProductError::InvalidProduct(
        "Price cannot be negative".to_string(),
      ));
    }
    self.price = price;
    Ok(())
  }
}
