//! Data handed to the "my listings" and "my orders" templates.

use serde::Serialize;

use crate::domain::order::{Order, OrdersSummary};
use crate::dto::explorer::ListingCard;

/// Order row as displayed in the orders table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderRow {
    pub short_id: String,
    pub product: String,
    pub notes: Option<String>,
    pub buyer_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub quantity: u32,
    pub total: String,
    pub status: String,
    pub date: Option<String>,
    pub created_at: Option<String>,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            short_id: order.short_id().to_string(),
            product: order.product_label().to_string(),
            notes: order.additional_notes.clone(),
            buyer_name: order.buyer_name.clone(),
            email: order.email.clone(),
            phone: order.phone.clone(),
            address: order.address.clone(),
            quantity: order.item_count(),
            total: format!("{:.2}", order.total_amount()),
            status: order.status_or_default().to_string(),
            date: order
                .date
                .clone()
                .or_else(|| order.created_at.map(|d| d.format("%d/%m/%Y").to_string())),
            created_at: order
                .created_at
                .map(|d| d.format("%Y-%m-%d %H:%M").to_string()),
        }
    }
}

/// Data required to render the orders page.
#[derive(Debug, Serialize)]
pub struct OrdersPageData {
    pub orders: Vec<OrderRow>,
    pub summary: OrdersSummary,
    pub total_spent: String,
}

/// Data required to render the session holder's own listings.
#[derive(Debug, Serialize)]
pub struct MyListingsPageData {
    pub listings: Vec<ListingCard>,
}
