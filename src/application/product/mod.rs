pub mod create_product;

pub use create_product::{CreateProductCommand, CreateProductResponse, CreateProductUseCase};
