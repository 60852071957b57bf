use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::domain::checkout::{OrderError, OrderItem, OrderRepository, OrderService};
use crate::domain::customer::CustomerRepository;
use crate::domain::product::ProductRepository;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateOrderItemDto {
  pub item_id: Option<String>,
  #[validate(length(min = 1, message = "Product id is required"))]
  pub product_id: String,
  #[validate(range(min = 1, message = "Quantity must be greater than zero"))]
  pub quantity: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderCommand {
  pub order_id: Option<String>,
  #[validate(length(min = 1, message = "Customer id is required"))]
  pub customer_id: String,
  #[validate(length(min = 1, message = "At least one item is required"), nested)]
  pub items: Vec<CreateOrderItemDto>,
}

#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
  pub order_id: String,
  pub total: Decimal,
  pub reward_points: i64,
}

pub struct CreateOrderUseCase {
  order_repo: Arc<dyn OrderRepository>,
  customer_repo: Arc<dyn CustomerRepository>,
  product_repo: Arc<dyn ProductRepository>,
}

impl CreateOrderUseCase {
  pub fn new(
    order_repo: Arc<dyn OrderRepository>,
    customer_repo: Arc<dyn CustomerRepository>,
    product_repo: Arc<dyn ProductRepository>,
  ) -> Self {
    Self {
      order_repo,
      customer_repo,
      product_repo,
    }
  }

  pub async fn execute(
    &self,
    command: CreateOrderCommand,
  ) -> Result<CreateOrderResponse, OrderError> {
    command
      .validate()
      .map_err(|e| OrderError::InvalidOrder(e.to_string()))?;

    let mut customer = self.customer_repo.find(&command.customer_id).await?;

    let mut items = Vec::with_capacity(command.items.len());
    for dto in command.items {
      let product = self.product_repo.find(&dto.product_id).await?;
      let item_id = dto
        .item_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());
      items.push(OrderItem::new(
        item_id,
        product.name(),
        product.price(),
        product.id(),
        dto.quantity,
      )?);
    }

    let order_id = command
      .order_id
      .unwrap_or_else(|| Uuid::new_v4().to_string());
    let order = OrderService::place_order(&mut customer, order_id, items)?;

    self
      .order_repo
      .create_with_customer(&order, &customer)
      .await?;

    tracing::info!(
      order_id = %order.id(),
      customer_id = %customer.id(),
      "Order placed with total {}",
      order.total()
    );

    Ok(CreateOrderResponse {
      order_id: order.id().to_string(),
      total: order.total(),
      reward_points: customer.reward_points(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::test_support::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
  };
  use crate::domain::customer::Customer;
  use crate::domain::product::Product;
  use rust_decimal_macros::dec;

  fn use_case() -> (
    CreateOrderUseCase,
    Arc<InMemoryOrderRepository>,
    Arc<InMemoryCustomerRepository>,
  ) {
    let customer_repo = Arc::new(InMemoryCustomerRepository::default());
    let order_repo = Arc::new(InMemoryOrderRepository::with_customers(
      customer_repo.clone(),
    ));
    let product_repo = Arc::new(InMemoryProductRepository::default());
    customer_repo
      .customers
      .lock()
      .unwrap()
      .push(Customer::new("c1", "Customer 1").unwrap());
    product_repo
      .products
      .lock()
      .unwrap()
      .push(Product::new("p1", "Product 1", dec!(10)).unwrap());

    let use_case = CreateOrderUseCase::new(
      order_repo.clone(),
      customer_repo.clone(),
      product_repo,
    );
    (use_case, order_repo, customer_repo)
  }

  #[tokio::test]
  async fn test_create_order() {
    let (use_case, order_repo, customer_repo) = use_case();

    let response = use_case
      .execute(CreateOrderCommand {
        order_id: Some("o1".to_string()),
        customer_id: "c1".to_string(),
        items: vec![CreateOrderItemDto {
          item_id: Some("i1".to_string()),
          product_id: "p1".to_string(),
          quantity: 2,
        }],
      })
      .await
      .unwrap();

    assert_eq!(response.order_id, "o1");
    assert_eq!(response.total, dec!(20));
    assert_eq!(response.reward_points, 10);

    let stored = order_repo.find("o1").await.unwrap();
    assert_eq!(stored.items()[0].name(), "Product 1");
    assert_eq!(customer_repo.find("c1").await.unwrap().reward_points(), 10);
  }

  #[tokio::test]
  async fn test_create_order_generates_ids() {
    let (use_case, order_repo, _) = use_case();

    let response = use_case
      .execute(CreateOrderCommand {
        order_id: None,
        customer_id: "c1".to_string(),
        items: vec![CreateOrderItemDto {
          item_id: None,
          product_id: "p1".to_string(),
          quantity: 1,
        }],
      })
      .await
      .unwrap();

    assert!(!response.order_id.is_empty());
    assert_eq!(order_repo.find_all().await.unwrap().len(), 1);
  }

  #[tokio::test]
  async fn test_create_order_without_items() {
    let (use_case, order_repo, _) = use_case();

    let result = use_case
      .execute(CreateOrderCommand {
        order_id: None,
        customer_id: "c1".to_string(),
        items: vec![],
      })
      .await;

    assert!(matches!(result, Err(OrderError::InvalidOrder(_))));
    assert!(order_repo.find_all().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_create_order_with_unknown_product() {
    let (use_case, _, _) = use_case();

    let result = use_case
      .execute(CreateOrderCommand {
        order_id: None,
        customer_id: "c1".to_string(),
        items: vec![CreateOrderItemDto {
          item_id: None,
          product_id: "missing".to_string(),
          quantity: 1,
        }],
      })
      .await;

    assert!(matches!(result, Err(OrderError::Product(_))));
  }

  #[tokio::test]
  async fn test_create_order_is_not_stored_when_customer_write_fails() {
    let customer_repo = Arc::new(InMemoryCustomerRepository::default());
    customer_repo
      .customers
      .lock()
      .unwrap()
      .push(Customer::new("c1", "Customer 1").unwrap());
    let product_repo = Arc::new(InMemoryProductRepository::default());
    product_repo
      .products
      .lock()
      .unwrap()
      .push(Product::new("p1", "Product 1", dec!(10)).unwrap());
    // The order store writes to a customer store that does not know "c1".
    let order_repo = Arc::new(InMemoryOrderRepository::default());
    let use_case = CreateOrderUseCase::new(
      order_repo.clone(),
      customer_repo.clone(),
      product_repo,
    );

    let result = use_case
      .execute(CreateOrderCommand {
        order_id: Some("o1".to_string()),
        customer_id: "c1".to_string(),
        items: vec![CreateOrderItemDto {
          item_id: None,
          product_id: "p1".to_string(),
          quantity: 2,
        }],
      })
      .await;

    assert!(matches!(result, Err(OrderError::Customer(_))));
    assert!(order_repo.find_all().await.unwrap().is_empty());
    assert_eq!(customer_repo.find("c1").await.unwrap().reward_points(), 0);
  }

  #[tokio::test]
  async fn test_create_order_rejects_invalid_item() {
    let (use_case, order_repo, _) = use_case();

    let result = use_case
      .execute(CreateOrderCommand {
        order_id: None,
        customer_id: "c1".to_string(),
        items: vec![CreateOrderItemDto {
          item_id: None,
          product_id: "p1".to_string(),
          quantity: 0,
        }],
      })
      .await;

    assert!(matches!(result, Err(OrderError::InvalidOrder(msg)) if msg.contains("quantity")));
    assert!(order_repo.find_all().await.unwrap().is_empty());
  }
}
