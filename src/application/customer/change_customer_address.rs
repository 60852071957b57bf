use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::domain::customer::{Address, CustomerError, CustomerRepository};
use crate::domain::shared::{DomainEvent, EventDispatcher};

#[derive(Debug, Deserialize, Validate)]
pub struct ChangeCustomerAddressCommand {
  #[validate(length(min = 1, message = "Customer id is required"))]
  pub customer_id: String,
  pub street: String,
  pub number: i32,
  pub zip: String,
  pub city: String,
}

#[derive(Debug, Serialize)]
pub struct ChangeCustomerAddressResponse {
  pub customer_id: String,
  pub address: String,
}

pub struct ChangeCustomerAddressUseCase {
  customer_repo: Arc<dyn CustomerRepository>,
  dispatcher: Arc<EventDispatcher>,
}

impl ChangeCustomerAddressUseCase {
  pub fn new(customer_repo: Arc<dyn CustomerRepository>, dispatcher: Arc<EventDispatcher>) -> Self {
    Self {
      customer_repo,
      dispatcher,
    }
  }

  pub async fn execute(
    &self,
    command: ChangeCustomerAddressCommand,
  ) -> Result<ChangeCustomerAddressResponse, CustomerError> {
    command
      .validate()
      .map_err(|e| CustomerError::InvalidCustomer(e.to_string()))?;

    let address = Address::new(command.street, command.number, command.zip, command.city)?;
    let mut customer = self.customer_repo.find(&command.customer_id).await?;

    customer.change_address(address.clone());
    self.customer_repo.update(&customer).await?;
    self
      .dispatcher
      .notify(&DomainEvent::customer_address_changed(&customer, &address));

    Ok(ChangeCustomerAddressResponse {
      customer_id: customer.id().to_string(),
      address: address.to_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::test_support::InMemoryCustomerRepository;
  use crate::domain::customer::{Customer, SendMessageWhenCustomerAddressIsChanged};
  use crate::domain::shared::EventKind;

  fn command(customer_id: &str) -> ChangeCustomerAddressCommand {
    ChangeCustomerAddressCommand {
      customer_id: customer_id.to_string(),
      street: "Street 2".to_string(),
      number: 2,
      zip: "Zipcode 2".to_string(),
      city: "City 2".to_string(),
    }
  }

  #[tokio::test]
  async fn test_change_customer_address() {
    let repo = Arc::new(InMemoryCustomerRepository::default());
    repo
      .create(&Customer::new("123", "Customer 1").unwrap())
      .await
      .unwrap();
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(
      EventKind::CustomerAddressChanged,
      Arc::new(SendMessageWhenCustomerAddressIsChanged),
    );

    let use_case = ChangeCustomerAddressUseCase::new(repo.clone(), Arc::new(dispatcher));
    let response = use_case.execute(command("123")).await.unwrap();

    assert_eq!(response.address, "Street 2, 2, Zipcode 2 City 2");
    let stored = repo.find("123").await.unwrap();
    assert_eq!(stored.address().map(Address::city), Some("City 2"));
  }

  #[tokio::test]
  async fn test_change_address_of_missing_customer() {
    let repo = Arc::new(InMemoryCustomerRepository::default());
    let use_case = ChangeCustomerAddressUseCase::new(repo, Arc::new(EventDispatcher::new()));

    let result = use_case.execute(command("missing")).await;
    assert!(matches!(result, Err(CustomerError::CustomerNotFound(_))));
  }

  #[tokio::test]
  async fn test_change_to_invalid_address() {
    let repo = Arc::new(InMemoryCustomerRepository::default());
    repo
      .create(&Customer::new("123", "Customer 1").unwrap())
      .await
      .unwrap();
    let use_case = ChangeCustomerAddressUseCase::new(repo.clone(), Arc::new(EventDispatcher::new()));

    let mut invalid = command("123");
    invalid.number = 0;
    let result = use_case.execute(invalid).await;

    assert!(matches!(result, Err(CustomerError::Validation(_))));
    assert!(repo.find("123").await.unwrap().address().is_none());
  }
}
