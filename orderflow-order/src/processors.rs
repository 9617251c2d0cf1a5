use async_trait::async_trait;
use orderflow_core::{ApiClient, ApiResponse};
use orderflow_shared::{Order, OrderStatus, ProcessingResult, Thresholds, UserId};
use std::sync::Arc;
use tracing::warn;

use crate::export::CsvFileExporter;
use crate::priority::PriorityCalculator;

/// Turns one order into its terminal status.
///
/// Implementations absorb their own capability failures into a status, so
/// processing an order never fails.
#[async_trait]
pub trait OrderProcessor: Send + Sync {
    async fn process(&self, order: &Order) -> ProcessingResult;
}

/// Type `A`: prioritise, then write the order to a CSV file
pub struct ExportOrderProcessor {
    exporter: Arc<CsvFileExporter>,
    calculator: PriorityCalculator,
    user_id: UserId,
}

impl ExportOrderProcessor {
    pub fn new(exporter: Arc<CsvFileExporter>, calculator: PriorityCalculator, user_id: UserId) -> Self {
        Self { exporter, calculator, user_id }
    }
}

#[async_trait]
impl OrderProcessor for ExportOrderProcessor {
    async fn process(&self, order: &Order) -> ProcessingResult {
        let priority = self.calculator.determine_priority(order.amount);

        let status = match self.exporter.export_order_to_file(order, priority, self.user_id).await {
            Ok(_) => OrderStatus::Exported,
            Err(e) => {
                warn!(order_id = order.id, error = %e, "Export failed");
                OrderStatus::ExportFailed
            }
        };

        ProcessingResult::with_priority(order.id, status, priority)
    }
}

/// Type `B`: submit to the remote API and derive the status from the reply
pub struct ApiOrderProcessor {
    client: Arc<dyn ApiClient>,
    data_threshold: f64,
    amount_threshold: f64,
}

impl ApiOrderProcessor {
    pub fn new(client: Arc<dyn ApiClient>, thresholds: &Thresholds) -> Self {
        Self {
            client,
            data_threshold: thresholds.api_data_threshold,
            amount_threshold: thresholds.api_amount_threshold,
        }
    }

    /// Status for an order whose submission returned a response.
    /// Rules are checked in order; the first match wins.
    pub fn determine_status(&self, order: &Order, response: &ApiResponse) -> OrderStatus {
        if !response.success {
            OrderStatus::ApiError
        } else if order.data >= self.data_threshold && order.amount < self.amount_threshold {
            OrderStatus::Processed
        } else if order.data < self.data_threshold || order.flag {
            OrderStatus::Pending
        } else {
            OrderStatus::Error
        }
    }
}

#[async_trait]
impl OrderProcessor for ApiOrderProcessor {
    async fn process(&self, order: &Order) -> ProcessingResult {
        let status = match self.client.submit(order).await {
            Ok(response) => self.determine_status(order, &response),
            Err(e) => {
                warn!(order_id = order.id, error = %e, "API submission failed");
                OrderStatus::ApiFailure
            }
        };

        ProcessingResult::new(order.id, status)
    }
}

/// Type `C`: completed locally based on the flag
pub struct SimpleOrderProcessor;

#[async_trait]
impl OrderProcessor for SimpleOrderProcessor {
    async fn process(&self, order: &Order) -> ProcessingResult {
        let status = if order.flag {
            OrderStatus::Completed
        } else {
            OrderStatus::InProgress
        };
        ProcessingResult::new(order.id, status)
    }
}

pub struct UnknownOrderProcessor;

#[async_trait]
impl OrderProcessor for UnknownOrderProcessor {
    async fn process(&self, order: &Order) -> ProcessingResult {
        ProcessingResult::new(order.id, OrderStatus::UnknownType)
    }
}
