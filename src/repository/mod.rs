use async_trait::async_trait;

use crate::{
    domain::{
        filter::{FilterState, SortOrder},
        listing::{Listing, ListingPage},
        order::Order,
        types::{CategoryName, ListingId, LocationName, PageNumber, Price, SearchTerm},
    },
    models::session::Session,
    repository::errors::ApiResult,
};

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use http::HttpRepository;

/// Number of listings shown on the home page.
pub const RECENT_LISTINGS_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    pub page: PageNumber,
    pub per_page: usize,
}

/// Query sent to `GET /api/listings`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    pub pagination: Option<Pagination>,
    pub limit: Option<usize>,
    pub sort: Option<SortOrder>,
    pub search: Option<SearchTerm>,
    pub category: Option<CategoryName>,
    pub location: Option<LocationName>,
    pub min_price: Option<Price>,
    pub max_price: Option<Price>,
}

impl ListingQuery {
    pub fn new() -> Self {
        Self {
            pagination: None,
            limit: None,
            sort: None,
            search: None,
            category: None,
            location: None,
            min_price: None,
            max_price: None,
        }
    }

    /// Builds the explorer query for the given filter state.
    pub fn from_filters(filters: &FilterState, per_page: usize) -> Self {
        let mut query = Self::new()
            .paginate(filters.page, per_page)
            .sort(filters.sort);
        query.search = filters.search();
        query.category = filters.category.clone();
        query.location = filters.location.clone();
        query.min_price = filters.min_price;
        query.max_price = filters.max_price;
        query
    }

    /// Most recent listings, unpaginated.
    pub fn recent(limit: usize) -> Self {
        let mut query = Self::new();
        query.limit = Some(limit);
        query
    }

    pub fn paginate(mut self, page: PageNumber, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = SearchTerm::new(term).ok();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = CategoryName::new(category).ok();
        self
    }

    /// Parameters with meaningful values, in a stable order.
    ///
    /// Absent filters are left out entirely so the server never receives an
    /// empty string it could read as "match nothing".
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(pagination) = &self.pagination {
            params.push(("page", pagination.page.to_string()));
            params.push(("limit", pagination.per_page.to_string()));
        } else if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(sort) = self.sort {
            params.push(("sort", sort.as_str().to_string()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.to_string()));
        }
        if let Some(category) = &self.category {
            params.push(("category", category.to_string()));
        }
        if let Some(location) = &self.location {
            params.push(("location", location.to_string()));
        }
        if let Some(min_price) = self.min_price {
            params.push(("minPrice", min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            params.push(("maxPrice", max_price.to_string()));
        }

        params
    }

    /// Form-url-encoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        serde_html_form::to_string(self.params()).unwrap_or_default()
    }
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
pub trait ListingReader: Send + Sync {
    async fn list_listings(&self, query: &ListingQuery) -> ApiResult<ListingPage>;
    async fn get_listing(&self, id: &ListingId) -> ApiResult<Listing>;
}

#[async_trait]
pub trait AccountReader: Send + Sync {
    async fn list_my_listings(&self, session: &Session) -> ApiResult<Vec<Listing>>;
    async fn list_my_orders(&self, session: &Session) -> ApiResult<Vec<Order>>;
}
