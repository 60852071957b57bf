use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::domain::product::{Product, errors::ProductError, ports::ProductRepository};

#[derive(Debug, FromRow)]
struct ProductRow {
  id: String,
  name: String,
  price: Decimal,
}

impl TryFrom<ProductRow> for Product {
  type Error = ProductError;

  fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
    Product::new(row.id, row.name, row.price)
  }
}

pub struct PostgresProductRepository {
  pool: PgPool,
}

impl PostgresProductRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
  async fn create(&self, product: &Product) -> Result<(), ProductError> {
    sqlx::query("INSERT INTO products (id, name, price) VALUES ($1, $2, $3)")
      .bind(product.id())
      .bind(product.name())
      .bind(product.price())
      .execute(&self.pool)
      .await?;

    Ok(())
  }

  async fn update(&self, product: &Product) -> Result<(), ProductError> {
    let result = sqlx::query("UPDATE products SET name = $2, price = $3 WHERE id = $1")
      .bind(product.id())
      .bind(product.name())
      .bind(product.price())
      .execute(&self.pool)
      .await?;

    if result.rows_affected() == 0 {
      tracing::warn!("Product {} not found for update", product.id());
      return Err(ProductError::ProductNotFound(product.id().to_string()));
    }

    Ok(())
  }

  async fn find(&self, id: &str) -> Result<Product, ProductError> {
    let row = sqlx::query_as::<_, ProductRow>("SELECT id, name, price FROM products WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await?
      .ok_or_else(|| ProductError::ProductNotFound(id.to_string()))?;

    row.try_into()
  }

  async fn find_all(&self) -> Result<Vec<Product>, ProductError> {
    let rows = sqlx::query_as::<_, ProductRow>("SELECT id, name, price FROM products")
      .fetch_all(&self.pool)
      .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }
}
