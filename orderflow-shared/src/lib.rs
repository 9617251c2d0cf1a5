pub mod models;
pub mod thresholds;

pub use models::{Order, OrderId, OrderStatus, OrderType, Priority, ProcessingResult, UserId};
pub use thresholds::Thresholds;
