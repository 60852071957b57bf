use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront::{
  application::order::ListOrdersUseCase,
  infrastructure::{config::Config, persistence::postgres::PostgresOrderRepository},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  let config = Config::load().context("Failed to load configuration")?;

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.filter.clone().into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting storefront");
  tracing::info!("Connecting to database: {}", config.database.url);

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    anyhow::anyhow!(
      "Database connection timed out after {} seconds",
      config.database.connect_timeout_seconds
    )
  })?
  .with_context(|| format!("Could not connect to database at {}", config.database.url))?;

  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .context("Failed to run database migrations")?;
  tracing::info!("Database migrations completed");

  let order_repo = Arc::new(PostgresOrderRepository::new(db_pool.clone()));
  let list_orders_use_case = ListOrdersUseCase::new(order_repo);

  let summary = list_orders_use_case.execute().await?;
  for order in &summary.orders {
    tracing::info!(
      order_id = %order.order_id,
      customer_id = %order.customer_id,
      items = order.item_count,
      "Order total {}",
      order.total
    );
  }
  tracing::info!(
    "{} order(s) stored, grand total {}",
    summary.orders.len(),
    summary.grand_total
  );

  db_pool.close().await;
  Ok(())
}
