use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::domain::customer::{Address, Customer, CustomerError, CustomerRepository};
use crate::domain::shared::{DomainEvent, EventDispatcher};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerCommand {
  pub customer_id: Option<String>,
  #[validate(length(min = 1, max = 255, message = "Name is required"))]
  pub name: String,
  pub street: Option<String>,
  pub number: Option<i32>,
  pub zip: Option<String>,
  pub city: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateCustomerResponse {
  pub customer_id: String,
  pub name: String,
  pub active: bool,
}

pub struct CreateCustomerUseCase {
  customer_repo: Arc<dyn CustomerRepository>,
  dispatcher: Arc<EventDispatcher>,
}

impl CreateCustomerUseCase {
  pub fn new(customer_repo: Arc<dyn CustomerRepository>, dispatcher: Arc<EventDispatcher>) -> Self {
    Self {
      customer_repo,
      dispatcher,
    }
  }

  pub async fn execute(
    &self,
    command: CreateCustomerCommand,
  ) -> Result<CreateCustomerResponse, CustomerError> {
    command
      .validate()
      .map_err(|e| CustomerError::InvalidCustomer(e.to_string()))?;

    let customer_id = command
      .customer_id
      .unwrap_or_else(|| Uuid::new_v4().to_string());
    let mut customer = Customer::new(customer_id, command.name)?;

    // A complete address activates the customer straight away.
    if let (Some(street), Some(number), Some(zip), Some(city)) =
      (command.street, command.number, command.zip, command.city)
    {
      customer.change_address(Address::new(street, number, zip, city)?);
      customer.activate()?;
    }

    self.customer_repo.create(&customer).await?;
    self
      .dispatcher
      .notify(&DomainEvent::customer_created(&customer));

    Ok(CreateCustomerResponse {
      customer_id: customer.id().to_string(),
      name: customer.name().to_string(),
      active: customer.is_active(),
    })
  }
}
