use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::domain::customer::Customer;

use super::entities::{Order, OrderItem};
use super::errors::OrderError;

pub struct OrderService;

impl OrderService {
  pub fn total(orders: &[Order]) -> Decimal {
    orders.iter().map(Order::total).sum()
  }

  /// Builds an order for `customer` and credits half of its total as reward points.
  pub fn place_order(
    customer: &mut Customer,
    order_id: impl Into<String>,
    items: Vec<OrderItem>,
  ) -> Result<Order, OrderError> {
    let order = Order::new(order_id, customer.id(), items)?;

    let points = (order.total() / Decimal::TWO)
      .floor()
      .to_i64()
      .ok_or_else(|| OrderError::InvalidOrder("Order total is out of range".to_string()))?;
    customer.add_reward_points(points)?;

    Ok(order)
  }
}
