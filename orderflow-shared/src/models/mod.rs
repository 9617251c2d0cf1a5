pub mod order;
pub mod status;

pub use order::{Order, OrderId, OrderType, UserId};
pub use status::{OrderStatus, Priority, ProcessingResult};
