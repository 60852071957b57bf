use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection, PgPool};
use std::collections::HashMap;

use super::customer_repository::update_customer_row;
use crate::domain::checkout::{Order, OrderItem, errors::OrderError, ports::OrderRepository};
use crate::domain::customer::Customer;

#[derive(Debug, FromRow)]
struct OrderRow {
  id: String,
  customer_id: String,
}

#[derive(Debug, FromRow)]
struct OrderItemRow {
  id: String,
  order_id: String,
  product_id: String,
  name: String,
  price: Decimal,
  quantity: i32,
}

impl TryFrom<OrderItemRow> for OrderItem {
  type Error = OrderError;

  fn try_from(row: OrderItemRow) -> Result<Self, Self::Error> {
    OrderItem::new(row.id, row.name, row.price, row.product_id, row.quantity)
  }
}

impl OrderRow {
  fn into_order(self, items: Vec<OrderItemRow>) -> Result<Order, OrderError> {
    let items = items
      .into_iter()
      .map(OrderItem::try_from)
      .collect::<Result<Vec<_>, _>>()?;

    Order::new(self.id, self.customer_id, items)
  }
}

/// Position stored for the item at `index`, counted from `first`.
fn item_position(first: i32, index: usize) -> Result<i32, OrderError> {
  i32::try_from(index)
    .ok()
    .and_then(|offset| first.checked_add(offset))
    .ok_or_else(|| OrderError::InvalidOrder(format!("Item position {} is out of range", index)))
}

async fn insert_order(conn: &mut PgConnection, order: &Order) -> Result<(), OrderError> {
  sqlx::query(
    r#"
            INSERT INTO orders (id, customer_id, total)
            VALUES ($1, $2, $3)
            "#,
  )
  .bind(order.id())
  .bind(order.customer_id())
  .bind(order.total())
  .execute(&mut *conn)
  .await?;

  for (index, item) in order.items().iter().enumerate() {
    sqlx::query(
      r#"
            INSERT INTO order_items (id, order_id, product_id, name, price, quantity, position)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
    )
    .bind(item.id())
    .bind(order.id())
    .bind(item.product_id())
    .bind(item.name())
    .bind(item.price())
    .bind(item.quantity())
    .bind(item_position(0, index)?)
    .execute(&mut *conn)
    .await?;
  }

  Ok(())
}

pub struct PostgresOrderRepository {
  pool: PgPool,
}

impl PostgresOrderRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
  async fn create(&self, order: &Order) -> Result<(), OrderError> {
    let mut tx = self.pool.begin().await?;
    insert_order(&mut *tx, order).await?;
    tx.commit().await?;

    tracing::debug!(
      "Created order {} with {} item(s)",
      order.id(),
      order.items().len()
    );
    Ok(())
  }

  async fn create_with_customer(
    &self,
    order: &Order,
    customer: &Customer,
  ) -> Result<(), OrderError> {
    let mut tx = self.pool.begin().await?;
    update_customer_row(&mut *tx, customer).await?;
    insert_order(&mut *tx, order).await?;
    tx.commit().await?;

    tracing::debug!(
      "Created order {} for customer {} with {} reward point(s)",
      order.id(),
      customer.id(),
      customer.reward_points()
    );
    Ok(())
  }

  async fn update(&self, order: &Order) -> Result<(), OrderError> {
    let mut tx = self.pool.begin().await?;

    let result = sqlx::query(
      r#"
            UPDATE orders
            SET customer_id = $2, total = $3
            WHERE id = $1
            "#,
    )
    .bind(order.id())
    .bind(order.customer_id())
    .bind(order.total())
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
      tracing::warn!("Order {} not found for update", order.id());
      return Err(OrderError::OrderNotFound(order.id().to_string()));
    }

    // Appended items go after every stored row, including rows no longer in the
    // aggregate, which are left untouched. Existing rows keep their position.
    let next_position = sqlx::query_scalar::<_, i32>(
      r#"
            SELECT COALESCE(MAX(position) + 1, 0)
            FROM order_items
            WHERE order_id = $1
            "#,
    )
    .bind(order.id())
    .fetch_one(&mut *tx)
    .await?;

    for (index, item) in order.items().iter().enumerate() {
      let result = sqlx::query(
        r#"
            INSERT INTO order_items (id, order_id, product_id, name, price, quantity, position)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE
            SET product_id = EXCLUDED.product_id, name = EXCLUDED.name,
                price = EXCLUDED.price, quantity = EXCLUDED.quantity
            WHERE order_items.order_id = EXCLUDED.order_id
            "#,
      )
      .bind(item.id())
      .bind(order.id())
      .bind(item.product_id())
      .bind(item.name())
      .bind(item.price())
      .bind(item.quantity())
      .bind(item_position(next_position, index)?)
      .execute(&mut *tx)
      .await?;

      if result.rows_affected() == 0 {
        tracing::warn!(
          "Order item {} belongs to another order, not saving order {}",
          item.id(),
          order.id()
        );
        return Err(OrderError::ForeignOrderItem(item.id().to_string()));
      }
    }

    tx.commit().await?;

    tracing::debug!(
      "Updated order {} with {} item(s)",
      order.id(),
      order.items().len()
    );
    Ok(())
  }

  async fn find(&self, id: &str) -> Result<Order, OrderError> {
    let row = sqlx::query_as::<_, OrderRow>(
      r#"
            SELECT id, customer_id
            FROM orders
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?
    .ok_or_else(|| OrderError::OrderNotFound(id.to_string()))?;

    let items = sqlx::query_as::<_, OrderItemRow>(
      r#"
            SELECT id, order_id, product_id, name, price, quantity
            FROM order_items
            WHERE order_id = $1
            ORDER BY position ASC, id ASC
            "#,
    )
    .bind(id)
    .fetch_all(&self.pool)
    .await?;

    row.into_order(items)
  }

  async fn find_all(&self) -> Result<Vec<Order>, OrderError> {
    let rows = sqlx::query_as::<_, OrderRow>(
      r#"
            SELECT id, customer_id
            FROM orders
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    let item_rows = sqlx::query_as::<_, OrderItemRow>(
      r#"
            SELECT id, order_id, product_id, name, price, quantity
            FROM order_items
            ORDER BY order_id ASC, position ASC, id ASC
            "#,
    )
    .fetch_all(&self.pool)
    .await?;

    let mut items_by_order: HashMap<String, Vec<OrderItemRow>> = HashMap::new();
    for item in item_rows {
      items_by_order
        .entry(item.order_id.clone())
        .or_default()
        .push(item);
    }

    rows
      .into_iter()
      .map(|row| {
        let items = items_by_order.remove(&row.id).unwrap_or_default();
        row.into_order(items)
      })
      .collect()
  }
}
