use serde::{Deserialize, Serialize};
use std::fmt;

pub type OrderId = u64;
pub type UserId = u64;

/// Declared order type, parsed from the single-letter tag used by the order store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderType {
    /// `A`: written to a CSV file
    Export,
    /// `B`: submitted to the remote API
    Api,
    /// `C`: completed locally
    Simple,
    /// Any other tag. Kept verbatim so it can be logged and re-serialised.
    Unknown(String),
}

impl OrderType {
    pub fn tag(&self) -> &str {
        match self {
            OrderType::Export => "A",
            OrderType::Api => "B",
            OrderType::Simple => "C",
            OrderType::Unknown(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, OrderType::Unknown(_))
    }
}

impl From<&str> for OrderType {
    fn from(tag: &str) -> Self {
        match tag {
            "A" => OrderType::Export,
            "B" => OrderType::Api,
            "C" => OrderType::Simple,
            other => OrderType::Unknown(other.to_string()),
        }
    }
}

impl From<String> for OrderType {
    fn from(tag: String) -> Self {
        OrderType::from(tag.as_str())
    }
}

impl From<OrderType> for String {
    fn from(order_type: OrderType) -> Self {
        order_type.tag().to_string()
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A pending order as returned by the order store.
///
/// Orders are inputs only: processing derives a status (and, for export
/// orders, a priority) but never mutates the order itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub amount: f64,
    #[serde(default)]
    pub data: f64,
    #[serde(default)]
    pub flag: bool,
    /// Fields the processors do not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Order {
    pub fn new(id: OrderId, order_type: impl Into<OrderType>, amount: f64, flag: bool) -> Self {
        Self {
            id,
            order_type: order_type.into(),
            amount,
            data: 0.0,
            flag,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_data(mut self, data: f64) -> Self {
        self.data = data;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tag_parsing() {
        assert_eq!(OrderType::from("A"), OrderType::Export);
        assert_eq!(OrderType::from("B"), OrderType::Api);
        assert_eq!(OrderType::from("C"), OrderType::Simple);
        assert_eq!(OrderType::from("Z"), OrderType::Unknown("Z".to_string()));
        // Tags are case sensitive
        assert_eq!(OrderType::from("a"), OrderType::Unknown("a".to_string()));
        assert!(!OrderType::from("").is_known());
    }

    #[test]
    fn test_order_from_store_json() {
        let order: Order = serde_json::from_str(
            r#"{"id": 7, "type": "B", "amount": 12.5, "data": 80, "customer": "acme"}"#,
        )
        .unwrap();

        assert_eq!(order.id, 7);
        assert_eq!(order.order_type, OrderType::Api);
        assert_eq!(order.data, 80.0);
        assert!(!order.flag);
        assert_eq!(order.extra["customer"], serde_json::json!("acme"));

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["type"], "B");
        assert_eq!(value["customer"], "acme");
    }

    #[test]
    fn test_unknown_tag_is_preserved() {
        let order: Order = serde_json::from_str(r#"{"id": 1, "type": "X9", "amount": 1}"#).unwrap();
        assert_eq!(order.order_type.tag(), "X9");
    }
}
