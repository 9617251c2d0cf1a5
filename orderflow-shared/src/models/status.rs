use serde::{Deserialize, Serialize};
use std::fmt;

use super::order::OrderId;

/// Terminal status produced for an order by a processing run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Exported,
    ExportFailed,
    Processed,
    Pending,
    ApiError,
    Error,
    ApiFailure,
    Completed,
    InProgress,
    UnknownType,
    DbError,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Exported => "exported",
            OrderStatus::ExportFailed => "export_failed",
            OrderStatus::Processed => "processed",
            OrderStatus::Pending => "pending",
            OrderStatus::ApiError => "api_error",
            OrderStatus::Error => "error",
            OrderStatus::ApiFailure => "api_failure",
            OrderStatus::Completed => "completed",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::UnknownType => "unknown_type",
            OrderStatus::DbError => "db_error",
        }
    }

    /// Statuses that record a failure somewhere along the order's path.
    ///
    /// `Error` is a regular outcome of the API status rules, not a failure.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            OrderStatus::ExportFailed
                | OrderStatus::ApiError
                | OrderStatus::ApiFailure
                | OrderStatus::UnknownType
                | OrderStatus::DbError
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of running one order through its processor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub order_id: OrderId,
    pub status: OrderStatus,
    /// Only set for export orders
    pub priority: Option<Priority>,
}

impl ProcessingResult {
    pub fn new(order_id: OrderId, status: OrderStatus) -> Self {
        Self {
            order_id,
            status,
            priority: None,
        }
    }

    pub fn with_priority(order_id: OrderId, status: OrderStatus, priority: Priority) -> Self {
        Self {
            order_id,
            status,
            priority: Some(priority),
        }
    }
}
