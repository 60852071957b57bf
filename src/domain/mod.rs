pub mod checkout;
pub mod customer;
pub mod product;
pub mod shared;
