use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::checkout::{OrderError, OrderRepository, OrderService};

#[derive(Debug, Serialize)]
pub struct OrderSummaryDto {
  pub order_id: String,
  pub customer_id: String,
  pub item_count: usize,
  pub total: Decimal,
}

#[derive(Debug, Serialize)]
pub struct ListOrdersResponse {
  pub orders: Vec<OrderSummaryDto>,
  pub grand_total: Decimal,
}

pub struct ListOrdersUseCase {
  order_repo: Arc<dyn OrderRepository>,
}

impl ListOrdersUseCase {
  pub fn new(order_repo: Arc<dyn OrderRepository>) -> Self {
    Self { order_repo }
  }

  pub async fn execute(&self) -> Result<ListOrdersResponse, OrderError> {
    let orders = self.order_repo.find_all().await?;

    Ok(ListOrdersResponse {
      grand_total: OrderService::total(&orders),
      orders: orders
        .iter()
        .map(|order| OrderSummaryDto {
          order_id: order.id().to_string(),
          customer_id: order.customer_id().to_string(),
          item_count: order.items().len(),
          total: order.total(),
        })
        .collect(),
    })
  }
}
