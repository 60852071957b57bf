pub mod entities;
pub mod errors;
pub mod handlers;
pub mod ports;
pub mod services;

pub use entities::Product;
pub use errors::ProductError;
pub use handlers::SendEmailWhenProductIsCreated;
pub use ports::ProductRepository;
pub use services::ProductService;
