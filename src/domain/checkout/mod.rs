pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;

pub use entities::{Order, OrderItem};
pub use errors::OrderError;
pub use ports::OrderRepository;
pub use services::OrderService;
