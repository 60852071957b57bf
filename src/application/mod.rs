pub mod customer;
pub mod order;
pub mod product;

#[cfg(test)]
mod test_support;
