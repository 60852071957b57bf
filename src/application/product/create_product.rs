use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::domain::product::{Product, ProductError, ProductRepository};
use crate::domain::shared::{DomainEvent, EventDispatcher};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductCommand {
  pub product_id: Option<String>,
  #[validate(length(min = 1, max = 255, message = "Name is required"))]
  pub name: String,
  pub price: Decimal,
}

#[derive(Debug, Serialize)]
pub struct CreateProductResponse {
  pub product_id: String,
  pub name: String,
  pub price: Decimal,
}

pub struct CreateProductUseCase {
  product_repo: Arc<dyn ProductRepository>,
  dispatcher: Arc<EventDispatcher>,
}

impl CreateProductUseCase {
  pub fn new(product_repo: Arc<dyn ProductRepository>, dispatcher: Arc<EventDispatcher>) -> Self {
    Self {
      product_repo,
      dispatcher,
    }
  }

  pub async fn execute(
    &self,
    command: CreateProductCommand,
  ) -> Result<CreateProductResponse, ProductError> {
    command
      .validate()
      .map_err(|e| ProductError::InvalidProduct(e.to_string()))?;

    let product_id = command
      .product_id
      .unwrap_or_else(|| Uuid::new_v4().to_string());
    let product = Product::new(product_id, command.name, command.price)?;

    self.product_repo.create(&product).await?;
    self
      .dispatcher
      .notify(&DomainEvent::product_created(&product));

    Ok(CreateProductResponse {
      product_id: product.id().to_string(),
      name: product.name().to_string(),
      price: product.price(),
    })
  }
}
