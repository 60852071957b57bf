use async_trait::async_trait;
use sqlx::{FromRow, PgExecutor, PgPool};

use crate::domain::customer::{
  Address, Customer, errors::CustomerError, ports::CustomerRepository,
};

#[derive(Debug, FromRow)]
struct CustomerRow {
  id: String,
  name: String,
  street: Option<String>,
  number: Option<i32>,
  zipcode: Option<String>,
  city: Option<String>,
  active: bool,
  reward_points: i64,
}

impl TryFrom<CustomerRow> for Customer {
  type Error = CustomerError;

  fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
    let address = match (row.street, row.number, row.zipcode, row.city) {
      (Some(street), Some(number), Some(zipcode), Some(city)) => {
        Some(Address::new(street, number, zipcode, city)?)
      }
      _ => None,
    };

    Customer::restore(row.id, row.name, address, row.active, row.reward_points)
  }
}

/// Writes every customer column through a pool or an open transaction.
pub(super) async fn update_customer_row<'e, E>(
  executor: E,
  customer: &Customer,
) -> Result<(), CustomerError>
where
  E: PgExecutor<'e>,
{
  let address = customer.address();

  let result = sqlx::query(
    r#"
            UPDATE customers
            SET name = $2, street = $3, number = $4, zipcode = $5, city = $6,
                active = $7, reward_points = $8
            WHERE id = $1
            "#,
  )
  .bind(customer.id())
  .bind(customer.name())
  .bind(address.map(Address::street))
  .bind(address.map(Address::number))
  .bind(address.map(Address::zip))
  .bind(address.map(Address::city))
  .bind(customer.is_active())
  .bind(customer.reward_points())
  .execute(executor)
  .await?;

  if result.rows_affected() == 0 {
    tracing::warn!("Customer {} not found for update", customer.id());
    return Err(CustomerError::CustomerNotFound(customer.id().to_string()));
  }

  Ok(())
}

pub struct PostgresCustomerRepository {
  pool: PgPool,
}

impl PostgresCustomerRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
  async fn create(&self, customer: &Customer) -> Result<(), CustomerError> {
    let address = customer.address();

    sqlx::query(
      r#"
            INSERT INTO customers (id, name, street, number, zipcode, city, active, reward_points)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
    )
    .bind(customer.id())
    .bind(customer.name())
    .bind(address.map(Address::street))
    .bind(address.map(Address::number))
    .bind(address.map(Address::zip))
    .bind(address.map(Address::city))
    .bind(customer.is_active())
    .bind(customer.reward_points())
    .execute(&self.pool)
    .await?;

    Ok(())
  }

  async fn update(&self, customer: &Customer) -> Result<(), CustomerError> {
    update_customer_row(&self.pool, customer).await
  }

  async fn find(&self, id: &str) -> Result<Customer, CustomerError> {
    let row = sqlx::query_as::<_, CustomerRow>(
      r#"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?
    .ok_or_else(|| CustomerError::CustomerNotFound(id.to_string()))?;

    row.try_into()
  }

  async fn find_all(&self) -> Result<Vec<Customer>, CustomerError> {
    let rows = sqlx::query_as::<_, CustomerRow>(
      r#"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(|r| r.try_into()).collect()
  }
}
