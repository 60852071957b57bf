pub mod add_order_item;
pub mod create_order;
pub mod get_order;
pub mod list_orders;

pub use add_order_item::{AddOrderItemCommand, AddOrderItemResponse, AddOrderItemUseCase};
pub use create_order::{
  CreateOrderCommand, CreateOrderItemDto, CreateOrderResponse, CreateOrderUseCase,
};
pub use get_order::{GetOrderCommand, GetOrderUseCase, OrderDetailsResponse, OrderItemDto};
pub use list_orders::{ListOrdersResponse, ListOrdersUseCase, OrderSummaryDto};
