use crate::domain::shared::{DomainEvent, EventHandler};

/// Logs every created customer. Several instances can be registered side by side.
pub struct LogWhenCustomerIsCreated {
  sequence: u8,
}

impl LogWhenCustomerIsCreated {
  pub fn new(sequence: u8) -> Self {
    Self { sequence }
  }
}

impl EventHandler for LogWhenCustomerIsCreated {
  fn handle(&self, event: &DomainEvent) {
    if let DomainEvent::CustomerCreated(data) = event {
      tracing::info!(
        handler = self.sequence,
        customer_id = %data.customer_id,
        "Customer {} was created",
        data.name
      );
    }
  }
}

pub struct SendMessageWhenCustomerAddressIsChanged;

impl EventHandler for SendMessageWhenCustomerAddressIsChanged {
  fn handle(&self, event: &DomainEvent) {
    if let DomainEvent::CustomerAddressChanged(data) = event {
      tracing::info!(
        "Address of customer {}, {} changed to: {}",
        data.customer_id,
        data.name,
        data.address
      );
    }
  }
}
