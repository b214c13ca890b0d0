use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::lenient;

/// Status assumed for orders the API returns without one.
pub const DEFAULT_ORDER_STATUS: &str = "pending";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub listing_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "quantity", deserialize_with = "lenient::optional_count")]
    pub qty: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub price: Option<f64>,
}

/// Order placed by the session holder, as returned by `GET /api/orders`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub items_count: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub total: Option<f64>,
    #[serde(default)]
    pub buyer_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub additional_notes: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Last eight characters of the identifier.
    pub fn short_id(&self) -> &str {
        let len = self.id.chars().count();
        if len <= 8 {
            return &self.id;
        }
        match self.id.char_indices().nth(len - 8) {
            Some((idx, _)) => &self.id[idx..],
            None => &self.id,
        }
    }

    pub fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_ORDER_STATUS)
    }

    /// Number of units in the order, preferring the server-provided count.
    pub fn item_count(&self) -> u32 {
        self.items_count.unwrap_or_else(|| {
            self.items
                .iter()
                .map(|i| i.qty.unwrap_or(1))
                .fold(0u32, |total, qty| total.saturating_add(qty))
        })
    }

    pub fn product_label(&self) -> &str {
        self.product_name
            .as_deref()
            .or_else(|| self.items.first().and_then(|i| i.name.as_deref()))
            .unwrap_or("Item")
    }

    pub fn total_amount(&self) -> f64 {
        self.total.unwrap_or(0.0)
    }
}

/// Aggregates shown above the orders table.
#[derive(Clone, Debug, Serialize, PartialEq, Default)]
pub struct OrdersSummary {
    pub count: usize,
    pub total_spent: f64,
    pub pending: usize,
}

impl OrdersSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        Self {
            count: orders.len(),
            total_spent: orders.iter().map(Order::total_amount).sum(),
            pending: orders
                .iter()
                .filter(|o| o.status_or_default() == DEFAULT_ORDER_STATUS)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, total: Option<f64>, status: Option<&str>) -> Order {
        Order {
            id: id.to_string(),
            total,
            status: status.map(str::to_string),
            ..Order::default()
        }
    }

    #[test]
    fn short_id_keeps_last_eight_characters() {
        assert_eq!(order("65f1a2b3c4d5e6f7a8b9", None, None).short_id(), "e6f7a8b9");
        assert_eq!(order("abc", None, None).short_id(), "abc");
    }

    #[test]
    fn item_count_sums_quantities_when_count_missing() {
        let order: Order = serde_json::from_str(
            r#"{"_id":"o1","items":[{"qty":2},{"quantity":3},{}]}"#,
        )
        .expect("valid order");
        assert_eq!(order.item_count(), 6);
        assert_eq!(order.product_label(), "Item");
    }

    #[test]
    fn odd_quantities_and_totals_are_tolerated() {
        let order: Order = serde_json::from_str(
            r#"{"_id":"o1","total":"19.90","createdAt":"2025-11-20",
                "items":[{"qty":1.5},{"qty":"2"},{"qty":null,"price":"4"}]}"#,
        )
        .expect("valid order");

        assert_eq!(order.item_count(), 4);
        assert_eq!(order.total_amount(), 19.9);
        assert_eq!(order.items[2].price, Some(4.0));
        assert!(order.created_at.is_some());
    }

    #[test]
    fn huge_quantities_saturate() {
        let order = Order {
            id: "o1".to_string(),
            items: vec![
                OrderItem {
                    qty: Some(u32::MAX),
                    ..OrderItem::default()
                },
                OrderItem {
                    qty: Some(5),
                    ..OrderItem::default()
                },
            ],
            ..Order::default()
        };
        assert_eq!(order.item_count(), u32::MAX);
    }

    #[test]
    fn summary_counts_missing_status_as_pending() {
        let orders = vec![
            order("1", Some(10.0), None),
            order("2", Some(5.5), Some("pending")),
            order("3", None, Some("delivered")),
        ];

        let summary = OrdersSummary::from_orders(&orders);

        assert_eq!(summary.count, 3);
        assert_eq!(summary.pending, 2);
        assert!((summary.total_spent - 15.5).abs() < f64::EPSILON);
    }
}
