use crate::dto::api::ListingsResponse;
use crate::explorer::apply_client_filters;
use crate::forms::explorer::ExplorerForm;
use crate::pagination::Paginated;
use crate::repository::{ListingQuery, ListingReader};
use crate::services::{ServiceError, ServiceResult};

/// Returns the normalized explorer page for the `/api/v1/listings` endpoint.
///
/// Unlike the HTML explorer, upstream failures are returned as errors so the
/// route can answer with a non-2xx status.
pub async fn list_listings<R>(
    repo: &R,
    form: ExplorerForm,
    per_page: usize,
) -> ServiceResult<ListingsResponse>
where
    R: ListingReader + ?Sized,
{
    let filters = form
        .into_filters(None)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let query = ListingQuery::from_filters(&filters, per_page);
    let page = repo.list_listings(&query).await.map_err(|err| {
        log::error!("Failed to list listings: {err}");
        ServiceError::from(err)
    })?;
    let page = apply_client_filters(page, &filters);

    Ok(Paginated::new(
        page.items,
        filters.page.get(),
        page.total_pages,
        page.total_items,
    )
    .into())
}
