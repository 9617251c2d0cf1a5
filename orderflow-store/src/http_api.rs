use async_trait::async_trait;
use orderflow_core::{ApiClient, ApiError, ApiResponse};
use orderflow_shared::Order;
use std::time::Duration;
use tracing::{debug, info};

/// Submits orders as JSON to `{base_url}/orders`
pub struct HttpApiClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(Box::new(e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/orders", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn submit(&self, order: &Order) -> Result<ApiResponse, ApiError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(order)
            .send()
            .await
            .map_err(|e| ApiError::Transport(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16() });
        }

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Request(format!("Invalid response body: {}", e)))?;

        debug!(order_id = order.id, success = body.success, "API response received");
        Ok(body)
    }
}

/// Acknowledges every submission without leaving the process
#[derive(Debug, Default)]
pub struct OfflineApiClient;

#[async_trait]
impl ApiClient for OfflineApiClient {
    async fn submit(&self, order: &Order) -> Result<ApiResponse, ApiError> {
        info!(order_id = order.id, "No API configured, acknowledging locally");
        Ok(ApiResponse::ok())
    }
}
