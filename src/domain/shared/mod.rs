pub mod dispatcher;
pub mod events;

#[cfg(test)]
pub(crate) mod log_capture;

pub use dispatcher::{EventDispatcher, EventHandler};
pub use events::{
  CustomerAddressChangedData, CustomerCreatedData, DomainEvent, EventKind, ProductCreatedData,
};
