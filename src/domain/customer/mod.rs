pub mod entities;
pub mod errors;
pub mod handlers;
pub mod ports;
pub mod value_objects;

pub use entities::Customer;
pub use errors::CustomerError;
pub use handlers::{LogWhenCustomerIsCreated, SendMessageWhenCustomerAddressIsChanged};
pub use ports::CustomerRepository;
pub use value_objects::{Address, ValueObjectError};
