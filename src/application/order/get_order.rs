use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::checkout::{Order, OrderError, OrderItem, OrderRepository};

#[derive(Debug, Deserialize)]
pub struct GetOrderCommand {
  pub order_id: String,
}

#[derive(Debug, Serialize)]
pub struct OrderItemDto {
  pub id: String,
  pub name: String,
  pub product_id: String,
  pub price: Decimal,
  pub quantity: i32,
  pub subtotal: Decimal,
}

#[derive(Debug, Serialize)]
pub struct OrderDetailsResponse {
  pub order_id: String,
  pub customer_id: String,
  pub items: Vec<OrderItemDto>,
  pub total: Decimal,
}

impl From<&OrderItem> for OrderItemDto {
  fn from(item: &OrderItem) -> Self {
    Self {
      id: item.id().to_string(),
      name: item.name().to_string(),
      product_id: item.product_id().to_string(),
      price: item.price(),
      quantity: item.quantity(),
      subtotal: item.subtotal(),
    }
  }
}

impl From<&Order> for OrderDetailsResponse {
  fn from(order: &Order) -> Self {
    Self {
      order_id: order.id().to_string(),
      customer_id: order.customer_id().to_string(),
      items: order.items().iter().map(OrderItemDto::from).collect(),
      total: order.total(),
    }
  }
}

pub struct GetOrderUseCase {
  order_repo: Arc<dyn OrderRepository>,
}

impl GetOrderUseCase {
  pub fn new(order_repo: Arc<dyn OrderRepository>) -> Self {
    Self { order_repo }
  }

  pub async fn execute(&self, command: GetOrderCommand) -> Result<OrderDetailsResponse, OrderError> {
    let order = self.order_repo.find(&command.order_id).await?;
    Ok(OrderDetailsResponse::from(&order))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::test_support::InMemoryOrderRepository;
  use rust_decimal_macros::dec;

  #[tokio::test]
  async fn test_get_order_details() {
    let order_repo = Arc::new(InMemoryOrderRepository::default());
    let order = Order::new(
      "123",
      "123",
      vec![OrderItem::new("1", "Product 1", dec!(10), "123", 2).unwrap()],
    )
    .unwrap();
    order_repo.create(&order).await.unwrap();

    let use_case = GetOrderUseCase::new(order_repo);
    let response = use_case
      .execute(GetOrderCommand {
        order_id: "123".to_string(),
      })
      .await
      .unwrap();

    assert_eq!(response.customer_id, "123");
    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].subtotal, dec!(20));
    assert_eq!(response.total, dec!(20));
  }

  #[tokio::test]
  async fn test_get_missing_order() {
    let use_case = GetOrderUseCase::new(Arc::new(InMemoryOrderRepository::default()));

    let result = use_case
      .execute(GetOrderCommand {
        order_id: "missing".to_string(),
      })
      .await;

    assert!(matches!(result, Err(OrderError::OrderNotFound(_))));
  }
}
