use std::collections::HashMap;
use std::sync::Arc;

use super::events::{DomainEvent, EventKind};

pub trait EventHandler: Send + Sync {
  fn handle(&self, event: &DomainEvent);
}

/// Routes each event to the handlers registered for its kind, in registration order.
#[derive(Default)]
pub struct EventDispatcher {
  handlers: HashMap<EventKind, Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn register(&mut self, kind: EventKind, handler: Arc<dyn EventHandler>) {
    self.handlers.entry(kind).or_default().push(handler);
  }

  pub fn unregister(&mut self, kind: EventKind, handler: &Arc<dyn EventHandler>) {
    if let Some(handlers) = self.handlers.get_mut(&kind) {
      handlers.retain(|registered| !Arc::ptr_eq(registered, handler));
      if handlers.is_empty() {
        self.handlers.remove(&kind);
      }
    }
  }

  pub fn unregister_all(&mut self) {
    self.handlers.clear();
  }

  pub fn handlers(&self, kind: EventKind) -> &[Arc<dyn EventHandler>] {
    self
      .handlers
      .get(&kind)
      .map(Vec::as_slice)
      .unwrap_or_default()
  }

  pub fn notify(&self, event: &DomainEvent) {
    let handlers = self.handlers(event.kind());
    tracing::debug!(
      "Dispatching {} to {} handler(s)",
      event.kind().as_str(),
      handlers.len()
    );
    for handler in handlers {
      handler.handle(event);
    }
  }
}
