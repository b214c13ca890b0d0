//! Wire shapes returned by the Listings API and the JSON payloads this
//! service exposes.
//!
//! Responses are decoded into the discriminated types below and normalized
//! right at the boundary; nothing downstream inspects raw JSON.

use serde::{Deserialize, Serialize};

use crate::domain::listing::{Listing, ListingPage};
use crate::domain::order::Order;
use crate::pagination::Paginated;

/// `meta` block of a paginated listings response.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListingsMeta {
    #[serde(default)]
    pub total: Option<usize>,
    #[serde(default)]
    pub total_pages: Option<usize>,
}

/// Either a bare array or the `{ data, meta }` envelope.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ListingsPayload {
    Envelope {
        data: Vec<Listing>,
        #[serde(default)]
        meta: Option<ListingsMeta>,
    },
    Bare(Vec<Listing>),
}

impl From<ListingsPayload> for ListingPage {
    fn from(payload: ListingsPayload) -> Self {
        match payload {
            ListingsPayload::Envelope {
                data,
                meta: Some(meta),
            } => ListingPage {
                total_items: meta.total.unwrap_or(data.len()),
                total_pages: meta.total_pages.unwrap_or(1),
                items: data,
                server_paginated: true,
            },
            ListingsPayload::Envelope { data, meta: None } | ListingsPayload::Bare(data) => {
                ListingPage::unpaginated(data)
            }
        }
    }
}

/// Orders come back either as an array or wrapped in `{ orders }`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum OrdersPayload {
    Wrapped { orders: Vec<Order> },
    Bare(Vec<Order>),
}

impl From<OrdersPayload> for Vec<Order> {
    fn from(payload: OrdersPayload) -> Self {
        match payload {
            OrdersPayload::Wrapped { orders } | OrdersPayload::Bare(orders) => orders,
        }
    }
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// `error` wins over `message`; blank values are ignored.
    pub fn into_message(self) -> Option<String> {
        self.error
            .filter(|s| !s.trim().is_empty())
            .or(self.message.filter(|s| !s.trim().is_empty()))
    }
}

/// Normalized explorer page exposed by `/api/v1/listings`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingsResponse {
    pub items: Vec<Listing>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub pages: Vec<usize>,
    pub has_prev: bool,
    pub has_next: bool,
}

impl From<Paginated<Listing>> for ListingsResponse {
    fn from(paginated: Paginated<Listing>) -> Self {
        Self {
            items: paginated.items,
            page: paginated.page,
            total_pages: paginated.total_pages,
            total_items: paginated.total_items,
            pages: paginated.pages,
            has_prev: paginated.has_prev,
            has_next: paginated.has_next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_keeps_server_totals() {
        let payload: ListingsPayload = serde_json::from_str(
            r#"{"data":[{"_id":"1"},{"_id":"2"}],"meta":{"total":14,"totalPages":2}}"#,
        )
        .expect("valid envelope");

        let page = ListingPage::from(payload);

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_items, 14);
        assert_eq!(page.total_pages, 2);
        assert!(page.server_paginated);
    }

    #[test]
    fn bare_array_is_a_single_page() {
        let payload: ListingsPayload =
            serde_json::from_str(r#"[{"_id":"1"},{"_id":"2"},{"_id":"3"}]"#).expect("valid array");

        let page = ListingPage::from(payload);

        assert_eq!(page.total_items, 3);
        assert_eq!(page.total_pages, 1);
        assert!(!page.server_paginated);
    }

    #[test]
    fn envelope_without_meta_falls_back_to_length() {
        let payload: ListingsPayload =
            serde_json::from_str(r#"{"data":[{"_id":"1"}]}"#).expect("valid envelope");

        let page = ListingPage::from(payload);

        assert_eq!(page.total_items, 1);
        assert_eq!(page.total_pages, 1);
        assert!(!page.server_paginated);
    }

    #[test]
    fn orders_accept_both_shapes() {
        let wrapped: OrdersPayload =
            serde_json::from_str(r#"{"orders":[{"_id":"a"}]}"#).expect("wrapped");
        let bare: OrdersPayload = serde_json::from_str(r#"[{"_id":"a"}]"#).expect("bare");

        assert_eq!(Vec::<Order>::from(wrapped), Vec::<Order>::from(bare));
    }

    #[test]
    fn error_body_prefers_error_field() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":"Listing not found","message":"other"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Listing not found"));

        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"Bad token"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Bad token"));

        let body: ApiErrorBody = serde_json::from_str(r#"{"error":""}"#).unwrap();
        assert_eq!(body.into_message(), None);
    }
}
