use crate::domain::types::ListingId;
use crate::dto::explorer::{HomePageData, ListingCard};
use crate::repository::{ListingQuery, ListingReader, RECENT_LISTINGS_LIMIT};
use crate::services::{ServiceError, ServiceResult};

/// Loads the most recent listings for the home page.
///
/// A failing API leaves the grid empty and reports the message inline.
pub async fn load_home_page<R>(repo: &R) -> HomePageData
where
    R: ListingReader + ?Sized,
{
    match repo
        .list_listings(&ListingQuery::recent(RECENT_LISTINGS_LIMIT))
        .await
    {
        Ok(page) => HomePageData {
            recent: page
                .items
                .iter()
                .take(RECENT_LISTINGS_LIMIT)
                .map(ListingCard::from)
                .collect(),
            error: None,
        },
        Err(err) => {
            log::error!("Failed to load recent listings: {err}");
            HomePageData {
                recent: Vec::new(),
                error: Some(err.to_string()),
            }
        }
    }
}

/// Loads a single listing for the details page.
pub async fn load_listing<R>(repo: &R, id: &str) -> ServiceResult<ListingCard>
where
    R: ListingReader + ?Sized,
{
    let id = ListingId::new(id)
        .map_err(|_| ServiceError::NotFound("Listing not found".to_string()))?;

    let listing = repo.get_listing(&id).await.map_err(|err| {
        log::error!("Failed to load listing {id}: {err}");
        ServiceError::from(err)
    })?;

    Ok(ListingCard::from(&listing))
}
