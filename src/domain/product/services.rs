use rust_decimal::Decimal;

use super::entities::Product;
use super::errors::ProductError;

pub struct ProductService;

impl ProductService {
  /// Raises the price of every product by `percentage` percent.
  pub fn increase_price(products: &mut [Product], percentage: Decimal) -> Result<(), ProductError> {
    let factor = Decimal::ONE + percentage / Decimal::ONE_HUNDRED;
    let prices = products
      .iter()
      .map(|product| {
        let price = product.price() * factor;
        if price.is_sign_negative() {
          return Err(ProductError::InvalidProduct(format!(
            "Price of product {} would become negative",
            product.id()
          )));
        }
        Ok(price)
      })
      .collect::<Result<Vec<_>, _>>()?;

    for (product, price) in products.iter_mut().zip(prices) {
      product.change_price(price)?;
    }
    Ok(())
  }
}
