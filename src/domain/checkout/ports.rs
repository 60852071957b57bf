use async_trait::async_trait;

use crate::domain::customer::Customer;

use super::entities::Order;
use super::errors::OrderError;

#[async_trait]
pub trait OrderRepository: Send + Sync {
  async fn create(&self, order: &Order) -> Result<(), OrderError>;

  /// Stores a new order and the customer it rewarded in a single write. Either both are
  /// persisted or neither is.
  async fn create_with_customer(
    &self,
    order: &Order,
    customer: &Customer,
  ) -> Result<(), OrderError>;

  async fn update(&self, order: &Order) -> Result<(), OrderError>;
  async fn find(&self, id: &str) -> Result<Order, OrderError>;
  async fn find_all(&self) -> Result<Vec<Order>, OrderError>;
}
