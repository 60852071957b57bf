pub mod customer_repository;
pub mod order_repository;
pub mod product_repository;

pub use customer_repository::PostgresCustomerRepository;
pub use order_repository::PostgresOrderRepository;
pub use product_repository::PostgresProductRepository;

#[cfg(test)]
mod test_support;
