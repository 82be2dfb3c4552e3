//! Database Models

// Serde helpers
pub mod serde_helpers;

// Catalog
pub mod menu_item;
pub mod restaurant;

// Orders
pub mod order;
pub mod payment;

// Re-exports
pub use menu_item::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
pub use order::{
    Order, OrderDetail, OrderId, OrderItem, OrderItemLine, OrderStatus, PaymentLine,
};
pub use payment::{Payment, PaymentId, PaymentMethod};
pub use restaurant::{Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate};
