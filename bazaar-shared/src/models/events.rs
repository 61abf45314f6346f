use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::labels::ProductLabel;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct PurchaseCompletedEvent {
    pub shop_id: Uuid,
    pub shop_name: String,
    pub product_id: Uuid,
    pub owner: String,
    pub label: ProductLabel,
    pub price_cents: i64,
    pub remaining_balance_cents: i64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct PurchaseRejectedEvent {
    pub shop_id: Uuid,
    pub shop_name: String,
    pub owner: String,
    pub label: ProductLabel,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}

impl PurchaseCompletedEvent {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl PurchaseRejectedEvent {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_event_serializes_label_name() {
        let event = PurchaseCompletedEvent {
            shop_id: Uuid::new_v4(),
            shop_name: "Corner".to_string(),
            product_id: Uuid::new_v4(),
            owner: "Memba".to_string(),
            label: ProductLabel::Orange,
            price_cents: 2000,
            remaining_balance_cents: 398000,
            timestamp: Utc::now(),
        };

        let json = event.to_json();
        assert_eq!(json["label"], "Orange");
        assert_eq!(json["remaining_balance_cents"], 398000);
        assert!(json["timestamp"].is_string());

        let back: PurchaseCompletedEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back.timestamp, event.timestamp);
    }
}
