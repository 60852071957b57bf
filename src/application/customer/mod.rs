pub mod change_customer_address;
pub mod create_customer;

pub use change_customer_address::{
  ChangeCustomerAddressCommand, ChangeCustomerAddressResponse, ChangeCustomerAddressUseCase,
};
pub use create_customer::{CreateCustomerCommand, CreateCustomerResponse, CreateCustomerUseCase};
