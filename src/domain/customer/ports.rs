use async_trait::async_trait;

use super::entities::Customer;
use super::errors::CustomerError;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
  async fn create(&self, customer: &Customer) -> Result<(), CustomerError>;
  async fn update(&self, customer: &Customer) -> Result<(), CustomerError>;
  async fn find(&self, id: &str) -> Result<Customer, CustomerError>;
  async fn find_all(&self) -> Result<Vec<Customer>, CustomerError>;
}
