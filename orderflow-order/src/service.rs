use orderflow_core::{ApiClient, OrderStore, StoreError};
use orderflow_shared::{Order, OrderId, OrderStatus, Thresholds, UserId};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::export::CsvFileExporter;
use crate::report::{BatchReport, OrderOutcome};
use crate::selector::ProcessorSelector;

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Failed to fetch orders: {0}")]
    Fetch(#[source] StoreError),

    #[error("Unexpected failure while handling order {order_id}: {source}")]
    Unexpected {
        order_id: OrderId,
        #[source]
        source: StoreError,
    },
}

/// Processes a user's pending orders one at a time and persists their status
pub struct OrderProcessingService {
    store: Arc<dyn OrderStore>,
    api_client: Arc<dyn ApiClient>,
    exporter: Arc<CsvFileExporter>,
    thresholds: Thresholds,
}

impl OrderProcessingService {
    pub fn new(
        store: Arc<dyn OrderStore>,
        api_client: Arc<dyn ApiClient>,
        exporter: CsvFileExporter,
        thresholds: Thresholds,
    ) -> Self {
        Self {
            store,
            api_client,
            exporter: Arc::new(exporter),
            thresholds,
        }
    }

    /// Process every pending order of `user_id`.
    ///
    /// Returns `true` only if there was at least one order and every status
    /// was persisted.
    pub async fn process_orders(&self, user_id: UserId) -> bool {
        match self.run_batch(user_id).await {
            Ok(report) => report.success,
            Err(e) => {
                error!(user_id, error = %e, "Order batch aborted");
                false
            }
        }
    }

    /// Same as `process_orders`, keeping the per-order outcomes
    pub async fn run_batch(&self, user_id: UserId) -> Result<BatchReport, ProcessingError> {
        let orders = self
            .store
            .get_orders_by_user(user_id)
            .await
            .map_err(ProcessingError::Fetch)?;

        if orders.is_empty() {
            info!(user_id, "No pending orders");
            return Ok(BatchReport::empty(user_id));
        }

        info!(user_id, count = orders.len(), "Processing order batch");

        let selector = ProcessorSelector::new(
            self.exporter.clone(),
            self.api_client.clone(),
            &self.thresholds,
            user_id,
        );

        let mut report = BatchReport {
            user_id,
            outcomes: Vec::with_capacity(orders.len()),
            success: true,
        };

        for order in &orders {
            let outcome = self.process_one(&selector, order).await?;
            if !outcome.persisted {
                report.success = false;
            }
            report.outcomes.push(outcome);
        }

        info!(
            user_id,
            success = report.success,
            failed = report.failed_orders().count(),
            "Order batch finished"
        );
        Ok(report)
    }

    async fn process_one(
        &self,
        selector: &ProcessorSelector,
        order: &Order,
    ) -> Result<OrderOutcome, ProcessingError> {
        debug!(order_id = order.id, order_type = %order.order_type, "Dispatching order");
        let result = selector.select(&order.order_type).process(order).await;

        let persisted = match self
            .store
            .update_order_status(order.id, result.status, result.priority)
            .await
        {
            Ok(true) => true,
            Ok(false) => {
                error!(order_id = order.id, status = %result.status, "Store declined status update");
                false
            }
            Err(StoreError::Database(msg)) => {
                error!(order_id = order.id, status = %result.status, error = %msg, "Status update failed");
                false
            }
            Err(e) => {
                return Err(ProcessingError::Unexpected {
                    order_id: order.id,
                    source: e,
                })
            }
        };

        Ok(OrderOutcome {
            order_id: order.id,
            status: if persisted { result.status } else { OrderStatus::DbError },
            priority: result.priority,
            persisted,
        })
    }
}
