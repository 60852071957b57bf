use async_trait::async_trait;

use super::entities::Product;
use super::errors::ProductError;

#[async_trait]
pub trait ProductRepository: Send + Sync {
  async fn create(&self, product: &Product) -> Result<(), ProductError>;
  async fn update(&self, product: &Product) -> Result<(), ProductError>;
  async fn find(&self, id: &str) -> Result<Product, ProductError>;
  async fn find_all(&self) -> Result<Vec<Product>, ProductError>;
}
