//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::listing::{Listing, ListingPage};
use crate::domain::order::Order;
use crate::domain::types::ListingId;
use crate::models::session::Session;
use crate::repository::errors::ApiResult;
use crate::repository::{AccountReader, ListingQuery, ListingReader};

mock! {
    pub Repository {}

    #[async_trait]
    impl ListingReader for Repository {
        async fn list_listings(&self, query: &ListingQuery) -> ApiResult<ListingPage>;
        async fn get_listing(&self, id: &ListingId) -> ApiResult<Listing>;
    }

    #[async_trait]
    impl AccountReader for Repository {
        async fn list_my_listings(&self, session: &Session) -> ApiResult<Vec<Listing>>;
        async fn list_my_orders(&self, session: &Session) -> ApiResult<Vec<Order>>;
    }
}
