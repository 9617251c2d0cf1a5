use async_trait::async_trait;
use orderflow_shared::Order;
use serde::{Deserialize, Serialize};

use crate::BoxError;

/// Reply from the remote order API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self { success: true, message: None }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    Request(String),

    #[error("API returned HTTP {status}")]
    Status { status: u16 },

    #[error("API transport error: {0}")]
    Transport(#[source] BoxError),
}

#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Submit an order to the remote system
    async fn submit(&self, order: &Order) -> Result<ApiResponse, ApiError>;
}
