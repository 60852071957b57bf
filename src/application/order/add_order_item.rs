use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::domain::checkout::{OrderError, OrderItem, OrderRepository};
use crate::domain::product::ProductRepository;

#[derive(Debug, Deserialize, Validate)]
pub struct AddOrderItemCommand {
  #[validate(length(min = 1, message = "Order id is required"))]
  pub order_id: String,
  pub item_id: Option<String>,
  #[validate(length(min = 1, message = "Product id is required"))]
  pub product_id: String,
  #[validate(range(min = 1, message = "Quantity must be greater than zero"))]
  pub quantity: i32,
}

#[derive(Debug, Serialize)]
pub struct AddOrderItemResponse {
  pub order_id: String,
  pub item_id: String,
  pub item_count: usize,
  pub total: Decimal,
}

pub struct AddOrderItemUseCase {
  order_repo: Arc<dyn OrderRepository>,
  product_repo: Arc<dyn ProductRepository>,
}

impl AddOrderItemUseCase {
  pub fn new(
    order_repo: Arc<dyn OrderRepository>,
    product_repo: Arc<dyn ProductRepository>,
  ) -> Self {
    Self {
      order_repo,
      product_repo,
    }
  }

  pub async fn execute(
    &self,
    command: AddOrderItemCommand,
  ) -> Result<AddOrderItemResponse, OrderError> {
    command
      .validate()
      .map_err(|e| OrderError::InvalidOrderItem(e.to_string()))?;

    let mut order = self.order_repo.find(&command.order_id).await?;
    let product = self.product_repo.find(&command.product_id).await?;

    let item_id = command
      .item_id
      .unwrap_or_else(|| Uuid::new_v4().to_string());
    let item = OrderItem::new(
      item_id.clone(),
      product.name(),
      product.price(),
      product.id(),
      command.quantity,
    )?;
    order.add_new_order_item(item)?;

    self.order_repo.update(&order).await?;

    tracing::info!(
      order_id = %order.id(),
      "Added item {} for product {}",
      item_id,
      product.id()
    );

    Ok(AddOrderItemResponse {
      order_id: order.id().to_string(),
      item_id,
      item_count: order.items().len(),
      total: order.total(),
    })
  }
}
