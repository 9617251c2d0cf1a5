use async_trait::async_trait;
use orderflow_core::{OrderStore, StoreError};
use orderflow_shared::{Order, OrderId, OrderStatus, Priority, UserId};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::info;

/// Status recorded for an order by `update_order_status`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoredStatus {
    pub status: OrderStatus,
    pub priority: Option<Priority>,
}

/// Seed file entry: an order together with the user it belongs to
#[derive(Debug, Deserialize)]
struct SeedOrder {
    user_id: UserId,
    #[serde(flatten)]
    order: Order,
}

/// Order store kept entirely in memory
#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<UserId, Vec<Order>>>,
    statuses: RwLock<HashMap<OrderId, StoredStatus>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, user_id: UserId, order: Order) {
        self.orders.write().await.entry(user_id).or_default().push(order);
    }

    /// Load a JSON array of orders, each carrying a `user_id`
    pub async fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let seeds: Vec<SeedOrder> = serde_json::from_str(json)?;
        let store = Self::new();
        for seed in seeds {
            store.insert(seed.user_id, seed.order).await;
        }
        Ok(store)
    }

    pub async fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let json = tokio::fs::read_to_string(path).await?;
        let store = Self::from_json(&json).await?;
        info!("Loaded orders from {}", path.display());
        Ok(store)
    }

    pub async fn status_of(&self, order_id: OrderId) -> Option<StoredStatus> {
        self.statuses.read().await.get(&order_id).copied()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn get_orders_by_user(&self, user_id: UserId) -> Result<Vec<Order>, StoreError> {
        Ok(self.orders.read().await.get(&user_id).cloned().unwrap_or_default())
    }

    async fn update_order_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
        priority: Option<Priority>,
    ) -> Result<bool, StoreError> {
        let known = self
            .orders
            .read()
            .await
            .values()
            .flatten()
            .any(|o| o.id == order_id);

        if !known {
            return Ok(false);
        }

        self.statuses
            .write()
            .await
            .insert(order_id, StoredStatus { status, priority });
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = r#"[
        {"user_id": 1, "id": 10, "type": "A", "amount": 250.0, "flag": true},
        {"user_id": 1, "id": 11, "type": "C", "amount": 5.0},
        {"user_id": 2, "id": 20, "type": "B", "amount": 5.0, "data": 70}
    ]"#;

    #[tokio::test]
    async fn test_orders_grouped_by_user() {
        let store = InMemoryOrderStore::from_json(SEED).await.unwrap();

        let orders = store.get_orders_by_user(1).await.unwrap();
        let ids: Vec<_> = orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![10, 11]);

        assert_eq!(store.get_orders_by_user(2).await.unwrap()[0].data, 70.0);
        assert!(store.get_orders_by_user(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_records_status() {
        let store = InMemoryOrderStore::from_json(SEED).await.unwrap();

        let updated = store
            .update_order_status(10, OrderStatus::Exported, Some(Priority::High))
            .await
            .unwrap();

        assert!(updated);
        assert_eq!(
            store.status_of(10).await,
            Some(StoredStatus { status: OrderStatus::Exported, priority: Some(Priority::High) })
        );
    }

    #[tokio::test]
    async fn test_update_unknown_order_is_declined() {
        let store = InMemoryOrderStore::new();
        let updated = store
            .update_order_status(99, OrderStatus::Completed, None)
            .await
            .unwrap();

        assert!(!updated);
        assert!(store.status_of(99).await.is_none());
    }

    #[tokio::test]
    async fn test_bad_seed_is_rejected() {
        assert!(InMemoryOrderStore::from_json(r#"[{"id": 1}]"#).await.is_err());
    }
}
