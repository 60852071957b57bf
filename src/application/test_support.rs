use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::checkout::{Order, OrderError, OrderRepository};
use crate::domain::customer::{Customer, CustomerError, CustomerRepository};
use crate::domain::product::{Product, ProductError, ProductRepository};

/// Orders plus the customer store that `create_with_customer` writes to.
#[derive(Default)]
pub struct InMemoryOrderRepository {
  pub orders: Mutex<Vec<Order>>,
  pub customers: Arc<InMemoryCustomerRepository>,
}

impl InMemoryOrderRepository {
  pub fn with_customers(customers: Arc<InMemoryCustomerRepository>) -> Self {
    Self {
      orders: Mutex::default(),
      customers,
    }
  }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
  async fn create(&self, order: &Order) -> Result<(), OrderError> {
    self.orders.lock().unwrap().push(order.clone());
    Ok(())
  }

  async fn create_with_customer(
    &self,
    order: &Order,
    customer: &Customer,
  ) -> Result<(), OrderError> {
    self.customers.update(customer).await?;
    self.orders.lock().unwrap().push(order.clone());
    Ok(())
  }

  async fn update(&self, order: &Order) -> Result<(), OrderError> {
    let mut orders = self.orders.lock().unwrap();
    let stored = orders
      .iter_mut()
      .find(|stored| stored.id() == order.id())
      .ok_or_else(|| OrderError::OrderNotFound(order.id().to_string()))?;
    *stored = order.clone();
    Ok(())
  }

  async fn find(&self, id: &str) -> Result<Order, OrderError> {
    self
      .orders
      .lock()
      .unwrap()
      .iter()
      .find(|order| order.id() == id)
      .cloned()
      .ok_or_else(|| OrderError::OrderNotFound(id.to_string()))
  }

  async fn find_all(&self) -> Result<Vec<Order>, OrderError> {
    Ok(self.orders.lock().unwrap().clone())
  }
}

#[derive(Default)]
pub struct InMemoryCustomerRepository {
  pub customers: Mutex<Vec<Customer>>,
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
  async fn create(&self, customer: &Customer) -> Result<(), CustomerError> {
    self.customers.lock().unwrap().push(customer.clone());
    Ok(())
  }

  async fn update(&self, customer: &Customer) -> Result<(), CustomerError> {
    let mut customers = self.customers.lock().unwrap();
    let stored = customers
      .iter_mut()
      .find(|stored| stored.id() == customer.id())
      .ok_or_else(|| CustomerError::CustomerNotFound(customer.id().to_string()))?;
    *stored = customer.clone();
    Ok(())
  }

  async fn find(&self, id: &str) -> Result<Customer, CustomerError> {
    self
      .customers
      .lock()
      .unwrap()
      .iter()
      .find(|customer| customer.id() == id)
      .cloned()
      .ok_or_else(|| CustomerError::CustomerNotFound(id.to_string()))
  }

  async fn find_all(&self) -> Result<Vec<Customer>, CustomerError> {
    Ok(self.customers.lock().unwrap().clone())
  }
}

#[derive(Default)]
pub struct InMemoryProductRepository {
  pub products: Mutex<Vec<Product>>,
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
  async fn create(&self, product: &Product) -> Result<(), ProductError> {
    self.products.lock().unwrap().push(product.clone());
    Ok(())
  }

  async fn update(&self, product: &Product) -> Result<(), ProductError> {
    let mut products = self.products.lock().unwrap();
    let stored = products
      .iter_mut()
      .find(|stored| stored.id() == product.id())
      .ok_or_else(|| ProductError::ProductNotFound(product.id().to_string()))?;
    *stored = product.clone();
    Ok(())
  }

  async fn find(&self, id: &str) -> Result<Product, ProductError> {
    self
      .products
      .lock()
      .unwrap()
      .iter()
      .find(|product| product.id() == id)
      .cloned()
      .ok_or_else(|| ProductError::ProductNotFound(id.to_string()))
  }

  async fn find_all(&self) -> Result<Vec<Product>, ProductError> {
    Ok(self.products.lock().unwrap().clone())
  }
}
