//! In-process stand-ins for the injected capabilities.
//!
//! Each mock records what it was asked to do so tests can assert on the
//! calls as well as on the returned statuses.

use async_trait::async_trait;
use orderflow_core::{ApiClient, ApiError, ApiResponse, BoxError, FileWriter, OrderStore, StoreError};
use orderflow_shared::{Order, OrderId, OrderStatus, Priority, UserId};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// How the mock store answers an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateBehavior {
    Accept,
    Decline,
    DatabaseError,
    Unexpected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdate {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub priority: Option<Priority>,
}

pub struct MockOrderStore {
    orders: Vec<Order>,
    fail_fetch: bool,
    default_update: UpdateBehavior,
    per_order: HashMap<OrderId, UpdateBehavior>,
    fetches: Mutex<Vec<UserId>>,
    updates: Mutex<Vec<StatusUpdate>>,
}

impl MockOrderStore {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders,
            fail_fetch: false,
            default_update: UpdateBehavior::Accept,
            per_order: HashMap::new(),
            fetches: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_fetch() -> Self {
        Self {
            fail_fetch: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn with_default_update(mut self, behavior: UpdateBehavior) -> Self {
        self.default_update = behavior;
        self
    }

    pub fn with_update_for(mut self, order_id: OrderId, behavior: UpdateBehavior) -> Self {
        self.per_order.insert(order_id, behavior);
        self
    }

    pub fn fetches(&self) -> Vec<UserId> {
        lock(&self.fetches).clone()
    }

    pub fn updates(&self) -> Vec<StatusUpdate> {
        lock(&self.updates).clone()
    }
}

#[async_trait]
impl OrderStore for MockOrderStore {
    async fn get_orders_by_user(&self, user_id: UserId) -> Result<Vec<Order>, StoreError> {
        lock(&self.fetches).push(user_id);
        if self.fail_fetch {
            return Err(StoreError::Unexpected("Simulated fetch failure".into()));
        }
        Ok(self.orders.clone())
    }

    async fn update_order_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
        priority: Option<Priority>,
    ) -> Result<bool, StoreError> {
        lock(&self.updates).push(StatusUpdate { order_id, status, priority });

        match self.per_order.get(&order_id).copied().unwrap_or(self.default_update) {
            UpdateBehavior::Accept => Ok(true),
            UpdateBehavior::Decline => Ok(false),
            UpdateBehavior::DatabaseError => {
                Err(StoreError::Database(format!("Simulated write failure for order {}", order_id)))
            }
            UpdateBehavior::Unexpected => Err(StoreError::Unexpected("Simulated store crash".into())),
        }
    }
}

/// Replies with a fixed response, or fails every call
pub struct MockApiClient {
    reply: Option<ApiResponse>,
    submitted: Mutex<Vec<OrderId>>,
}

impl MockApiClient {
    pub fn responding(response: ApiResponse) -> Self {
        Self {
            reply: Some(response),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn submitted(&self) -> Vec<OrderId> {
        lock(&self.submitted).clone()
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn submit(&self, order: &Order) -> Result<ApiResponse, ApiError> {
        lock(&self.submitted).push(order.id);
        self.reply
            .clone()
            .ok_or_else(|| ApiError::Request("Simulated API outage".to_string()))
    }
}

/// Keeps written files in memory; can be told to fail every write or only
/// the n-th one (zero based)
#[derive(Default)]
pub struct MockFileWriter {
    fail: bool,
    fail_on_call: Option<usize>,
    calls: Mutex<usize>,
    files: Mutex<Vec<(PathBuf, String)>>,
}

impl MockFileWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn failing_on_call(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::default()
        }
    }

    pub fn files(&self) -> Vec<(PathBuf, String)> {
        lock(&self.files).clone()
    }
}

#[async_trait]
impl FileWriter for MockFileWriter {
    async fn write(&self, path: &Path, contents: &str) -> Result<(), BoxError> {
        let call = {
            let mut calls = lock(&self.calls);
            *calls += 1;
            *calls - 1
        };

        if self.fail || self.fail_on_call == Some(call) {
            return Err(Box::new(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "disk is read-only",
            )));
        }
        lock(&self.files).push((path.to_path_buf(), contents.to_string()));
        Ok(())
    }
}
