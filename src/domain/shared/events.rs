use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::customer::{Address, Customer};
use crate::domain::product::Product;

/// Events raised by the domain, one variant per kind with its own payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DomainEvent {
  ProductCreated(ProductCreatedData),
  CustomerCreated(CustomerCreatedData),
  CustomerAddressChanged(CustomerAddressChangedData),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
  ProductCreated,
  CustomerCreated,
  CustomerAddressChanged,
}

impl EventKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      EventKind::ProductCreated => "ProductCreated",
      EventKind::CustomerCreated => "CustomerCreated",
      EventKind::CustomerAddressChanged => "CustomerAddressChanged",
    }
  }
}

impl DomainEvent {
  pub fn kind(&self) -> EventKind {
    match self {
      DomainEvent::ProductCreated(_) => EventKind::ProductCreated,
      DomainEvent::CustomerCreated(_) => EventKind::CustomerCreated,
      DomainEvent::CustomerAddressChanged(_) => EventKind::CustomerAddressChanged,
    }
  }

  pub fn occurred_at(&self) -> DateTime<Utc> {
    match self {
      DomainEvent::ProductCreated(data) => data.occurred_at,
      DomainEvent::CustomerCreated(data) => data.occurred_at,
      DomainEvent::CustomerAddressChanged(data) => data.occurred_at,
    }
  }

  pub fn product_created(product: &Product) -> Self {
    DomainEvent::ProductCreated(ProductCreatedData {
      product_id: product.id().to_string(),
      name: product.name().to_string(),
      price: product.price(),
      occurred_at: Utc::now(),
    })
  }

  pub fn customer_created(customer: &Customer) -> Self {
    DomainEvent::CustomerCreated(CustomerCreatedData {
      customer_id: customer.id().to_string(),
      name: customer.name().to_string(),
      occurred_at: Utc::now(),
    })
  }

  pub fn customer_address_changed(customer: &Customer, address: &Address) -> Self {
    DomainEvent::CustomerAddressChanged(CustomerAddressChangedData {
      customer_id: customer.id().to_string(),
      name: customer.name().to_string(),
      address: address.clone(),
      occurred_at: Utc::now(),
    })
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreatedData {
  pub product_id: String,
  pub name: String,
  pub price: Decimal,
  pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerCreatedData {
  pub customer_id: String,
  pub name: String,
  pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAddressChangedData {
  pub customer_id: String,
  pub name: String,
  pub address: Address,
  pub occurred_at: DateTime<Utc>,
}
