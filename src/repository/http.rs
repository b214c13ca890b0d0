//! Listings API client backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use crate::domain::listing::{Listing, ListingPage};
use crate::domain::order::Order;
use crate::domain::types::ListingId;
use crate::dto::api::{ApiErrorBody, ListingsPayload, OrdersPayload};
use crate::models::session::Session;
use crate::repository::errors::{ApiError, ApiResult};
use crate::repository::{AccountReader, ListingQuery, ListingReader};

/// HTTP implementation of the repository traits.
#[derive(Clone)]
pub struct HttpRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRepository {
    /// Creates a client for `base_url` that gives up after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        session: Option<&Session>,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.get(&url).header(ACCEPT, "application/json");
        if let Some(session) = session {
            request = request.bearer_auth(session.token());
        }

        let response = request.send().await.map_err(|err| {
            log::error!("Request to {url} failed: {err}");
            ApiError::from(err)
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.text().await?;

        decode_response(&url, status, &content_type, &body)
    }
}

/// Returns `true` when the body is an HTML page rather than JSON.
fn looks_like_html(content_type: &str, body: &str) -> bool {
    let head = body.trim_start();
    content_type.contains("text/html")
        || head.starts_with("<!DOCTYPE")
        || head.starts_with("<!doctype")
        || head.starts_with("<html")
}

/// Turns a raw response into a typed value or a classified [`ApiError`].
pub fn decode_response<T: DeserializeOwned>(
    url: &str,
    status: u16,
    content_type: &str,
    body: &str,
) -> ApiResult<T> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(ApiErrorBody::into_message);
        log::warn!("{url} responded with status {status}");
        return Err(match (status, message) {
            (401, _) => ApiError::Unauthorized,
            (404, message) => ApiError::NotFound(message.unwrap_or_else(|| "Not found".to_string())),
            (status, Some(message)) => ApiError::Http { status, message },
            (status, None) => ApiError::Http {
                status,
                message: format!("Request failed with status {status}"),
            },
        });
    }

    if looks_like_html(content_type, body) {
        log::error!("{url} returned HTML instead of JSON");
        return Err(ApiError::Misconfigured(url.to_string()));
    }

    serde_json::from_str(body).map_err(|err| {
        log::error!("Failed to parse JSON from {url}: {err}");
        ApiError::from(err)
    })
}

#[async_trait]
impl ListingReader for HttpRepository {
    async fn list_listings(&self, query: &ListingQuery) -> ApiResult<ListingPage> {
        let qs = query.to_query_string();
        let path = if qs.is_empty() {
            "/api/listings".to_string()
        } else {
            format!("/api/listings?{qs}")
        };

        let payload: ListingsPayload = self.get_json(&path, None).await?;
        Ok(payload.into())
    }

    async fn get_listing(&self, id: &ListingId) -> ApiResult<Listing> {
        // Identifiers are opaque but never contain path or query syntax.
        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ApiError::NotFound("Listing not found".to_string()));
        }
        self.get_json(&format!("/api/listings/{id}"), None).await
    }
}

#[async_trait]
impl AccountReader for HttpRepository {
    async fn list_my_listings(&self, session: &Session) -> ApiResult<Vec<Listing>> {
        let payload: ListingsPayload = self.get_json("/api/listings/mine", Some(session)).await?;
        Ok(ListingPage::from(payload).items)
    }

    async fn list_my_orders(&self, session: &Session) -> ApiResult<Vec<Order>> {
        let payload: OrdersPayload = self.get_json("/api/orders", Some(session)).await?;
        Ok(payload.into())
    }
}
