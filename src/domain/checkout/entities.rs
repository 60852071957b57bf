use rust_decimal::Decimal;
use serde::Serialize;

use super::errors::OrderError;

// Order Item - one product line inside an order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
  id: String,
  name: String,
  price: Decimal,
  product_id: String,
  quantity: i32,
}

impl OrderItem {
  pub fn new(
    id: impl Into<String>,
    name: impl Into<String>,
    price: Decimal,
    product_id: impl Into<String>,
    quantity: i32,
  ) -> Result<Self, OrderError> {
    let id = id.into();
    let name = name.into();
    let product_id = product_id.into();

    if id.trim().is_empty() {
      return Err(OrderError::InvalidOrderItem("Id is required".to_string()));
    }
    if name.trim().is_empty() {
      return Err(OrderError::InvalidOrderItem(
        "Name is required".to_string(),
      ));
    }
    if product_id.trim().is_empty() {
      return Err(OrderError::InvalidOrderItem(
        "Product id is required".to_string(),
      ));
    }
    if price <= Decimal::ZERO {
      return Err(OrderError::InvalidOrderItem(
        "Price must be greater than zero".to_string(),
      ));
    }
    if quantity <= 0 {
      return Err(OrderError::InvalidOrderItem(
        "Quantity must be greater than zero".to_string(),
      ));
    }

    Ok(Self {
      id,
      name,
      price,
      product_id,
      quantity,
    })
  }

  pub fn id(&self) -> &str {
    &self.id
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn price(&self) -> Decimal {
    self.price
  }

  pub fn product_id(&self) -> &str {
    &self.product_id
  }

  pub fn quantity(&self) -> i32 {
    self.quantity
  }

  pub fn subtotal(&self) -> Decimal {
    self.price * Decimal::from(self.quantity)
  }
}

/// Order aggregate. Always holds at least one item; items keep insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
  id: String,
  customer_id: String,
  items: Vec<OrderItem>,
}

impl Order {
  pub fn new(
    id: impl Into<String>,
    customer_id: impl Into<String>,
    items: Vec<OrderItem>,
  ) -> Result<Self, OrderError> {
    let id = id.into();
    let customer_id = customer_id.into();

    if id.trim().is_empty() {
      return Err(OrderError::InvalidOrder("Id is required".to_string()));
    }
    if customer_id.trim().is_empty() {
      return Err(OrderError::InvalidOrder(
        "Customer id is required".to_string(),
      ));
    }
    if items.is_empty() {
      return Err(OrderError::InvalidOrder(
        "Order must have at least one item".to_string(),
      ));
    }

    let mut order = Self {
      id,
      customer_id,
      items: Vec::with_capacity(items.len()),
    };
    for item in items {
      order.add_new_order_item(item)?;
    }

    Ok(order)
  }

  pub fn id(&self) -> &str {
    &self.id
  }

  pub fn customer_id(&self) -> &str {
    &self.customer_id
  }

  pub fn items(&self) -> &[OrderItem] {
    &self.items
  }

  /// Appends an item. Item ids must be unique within the order.
  pub fn add_new_order_item(&mut self, item: OrderItem) -> Result<(), OrderError> {
    if self.items.iter().any(|existing| existing.id == item.id) {
      return Err(OrderError::DuplicateOrderItem(item.id));
    }

    self.items.push(item);
    Ok(())
  }

  pub fn total(&self) -> Decimal {
    self.items.iter().map(OrderItem::subtotal).sum()
  }
}
