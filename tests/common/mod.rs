#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pawmart_explorer::domain::listing::{Listing, ListingPage};
use pawmart_explorer::domain::types::ListingId;
use pawmart_explorer::models::config::ServerConfig;
use pawmart_explorer::repository::errors::{ApiError, ApiResult};
use pawmart_explorer::repository::{ListingQuery, ListingReader};
use tera::Tera;

pub fn listing(id: &str, name: &str, category: &str, price: f64) -> Listing {
    Listing {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price,
        location: Some("Austin".to_string()),
        ..Listing::default()
    }
}

/// Reader answering every query with the same canned result and recording
/// the query strings it was asked for.
pub struct StubReader {
    page: ListingPage,
    delay: Duration,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl StubReader {
    pub fn new(page: ListingPage) -> Self {
        Self::slow(page, Duration::ZERO)
    }

    /// Reader that takes `delay` to answer each listings request.
    pub fn slow(page: ListingPage, delay: Duration) -> Self {
        Self {
            page,
            delay,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListingReader for StubReader {
    async fn list_listings(&self, query: &ListingQuery) -> ApiResult<ListingPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_query_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.page.clone())
    }

    async fn get_listing(&self, id: &ListingId) -> ApiResult<Listing> {
        self.page
            .items
            .iter()
            .find(|l| l.id == id.as_str())
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Listing not found".to_string()))
    }
}

/// Reader that fails every request with the given error.
pub struct FailingReader(pub ApiError);

#[async_trait]
impl ListingReader for FailingReader {
    async fn list_listings(&self, _query: &ListingQuery) -> ApiResult<ListingPage> {
        Err(self.0.clone())
    }

    async fn get_listing(&self, _id: &ListingId) -> ApiResult<Listing> {
        Err(self.0.clone())
    }
}

pub fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 8080,
        templates_dir: "templates/**/*".to_string(),
        api_base_url: "http://127.0.0.1:9".to_string(),
        request_timeout_ms: 1_000,
        per_page: 12,
        debounce_ms: 450,
    }
}

pub fn tera() -> Tera {
    Tera::new(&server_config().templates_dir).expect("templates parse")
}
