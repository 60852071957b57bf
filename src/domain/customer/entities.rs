use serde::Serialize;

use super::errors::CustomerError;
use super::value_objects::Address;

// Customer - buyer identity, inactive until an address is known
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
  id: String,
  name: String,
  address: Option<Address>,
  active: bool,
  reward_points: i64,
}

impl Customer {
  pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, CustomerError> {
    let customer = Self {
      id: id.into(),
      name: name.into(),
      address: None,
      active: false,
      reward_points: 0,
    };
    customer.validate()?;
    Ok(customer)
  }

  /// Rebuilds a customer from persisted state.
  pub fn restore(
    id: impl Into<String>,
    name: impl Into<String>,
    address: Option<Address>,
    active: bool,
    reward_points: i64,
  ) -> Result<Self, CustomerError> {
    let customer = Self {
      id: id.into(),
      name: name.into(),
      address,
      active,
      reward_points,
    };
    customer.validate()?;

    if customer.active && customer.address.is_none() {
      return Err(CustomerError::AddressRequired);
    }
    if customer.reward_points < 0 {
      return Err(CustomerError::InvalidCustomer(
        "Reward points cannot be negative".to_string(),
      ));
    }

    Ok(customer)
  }

  fn validate(&self) -> Result<(), CustomerError> {
    if self.id.trim().is_empty() {
      return Err(CustomerError::InvalidCustomer("Id is required".to_string()));
    }
    if self.name.trim().is_empty() {
      return Err(CustomerError::InvalidCustomer(
        "Name is required".to_string(),
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

  pub fn address(&self) -> Option<&Address> {
    self.address.as_ref()
  }

  pub fn reward_points(&self) -> i64 {
    self.reward_points
  }

  pub fn is_active(&self) -> bool {
    self.active
  }

  pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
    let name = name.into();
    if name.trim().is_empty() {
      return Err(CustomerError::InvalidCustomer(
        "Name is required".to_string(),
      ));
    }
    self.name = name;
    Ok(())
  }

  pub fn change_address(&mut self, address: Address) {
    self.address = Some(address);
  }

  pub fn activate(&mut self) -> Result<(), CustomerError> {
    if self.address.is_none() {
      return Err(CustomerError::AddressRequired);
    }
    self.active = true;
    Ok(())
  }

  pub fn deactivate(&mut self) {
    self.active = false;
  }

  pub fn add_reward_points(&mut self, points: i64) -> Result<(), CustomerError> {
    if points < 0 {
      return Err(CustomerError::InvalidCustomer(
        "Reward points cannot be negative".to_string(),
      ));
    }
    self.reward_points += points;
    Ok(())
  }
}
