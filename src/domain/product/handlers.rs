use crate::domain::shared::{DomainEvent, EventHandler};

pub struct SendEmailWhenProductIsCreated;

impl EventHandler for SendEmailWhenProductIsCreated {
  fn handle(&self, event: &DomainEvent) {
    if let DomainEvent::ProductCreated(data) = event {
      tracing::info!(
        product_id = %data.product_id,
        "Sending email: product {} is now available for {}",
        data.name,
        data.price
      );
    }
  }
}
