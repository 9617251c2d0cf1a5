use orderflow_shared::{OrderId, OrderStatus, Priority, UserId};
use serde::Serialize;

/// What happened to one order during a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderOutcome {
    pub order_id: OrderId,
    /// `DbError` when the store did not record the processor's status
    pub status: OrderStatus,
    pub priority: Option<Priority>,
    pub persisted: bool,
}

/// Summary of a `run_batch` call
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub user_id: UserId,
    pub outcomes: Vec<OrderOutcome>,
    pub success: bool,
}

impl BatchReport {
    /// A batch with no orders; never counts as a success
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            outcomes: Vec::new(),
            success: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Orders whose status could not be persisted
    pub fn failed_orders(&self) -> impl Iterator<Item = &OrderOutcome> {
        self.outcomes.iter().filter(|o| !o.persisted)
    }

    pub fn outcome(&self, order_id: OrderId) -> Option<&OrderOutcome> {
        self.outcomes.iter().find(|o| o.order_id == order_id)
    }
}
