use async_trait::async_trait;
use orderflow_shared::{Order, OrderId, OrderStatus, Priority, UserId};

use crate::BoxError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store rejected or failed the operation. Recoverable per order.
    #[error("Database error: {0}")]
    Database(String),

    /// Anything the store did not anticipate
    #[error("Unexpected store failure: {0}")]
    Unexpected(#[source] BoxError),
}

/// Source of pending orders and sink for their derived status
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn get_orders_by_user(&self, user_id: UserId) -> Result<Vec<Order>, StoreError>;

    /// Record the status (and priority, for export orders) of an order.
    ///
    /// Returns `Ok(false)` when the store declined the update.
    async fn update_order_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
        priority: Option<Priority>,
    ) -> Result<bool, StoreError>;
}
