use crate::dto::explorer::{
    ListingCard, Pager, SuppliesPageData, category_options, sort_options,
};
use crate::explorer::ListingExplorer;
use crate::forms::explorer::ExplorerForm;
use crate::pagination::Paginated;
use crate::repository::ListingReader;
use crate::services::{ServiceError, ServiceResult};

/// Page header for the explorer, depending on the category route segment.
fn headings(route_category: Option<&str>) -> (String, String) {
    match route_category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => (
            format!("Category: {category}"),
            "Showing listings filtered by category.".to_string(),
        ),
        None => (
            "Pets & Supplies".to_string(),
            "Browse adoptable pets and essential pet products in one place.".to_string(),
        ),
    }
}

/// Loads one explorer page for the filters found in the query string.
///
/// API failures are not errors here: they are rendered inline with an empty
/// grid. Only invalid filter input is reported as [`ServiceError::Form`].
pub async fn load_supplies_page<R>(
    repo: &R,
    form: ExplorerForm,
    route_category: Option<&str>,
    base_path: &str,
    per_page: usize,
) -> ServiceResult<SuppliesPageData>
where
    R: ListingReader + ?Sized,
{
    let filters = form.into_filters(route_category).map_err(|err| {
        log::warn!("Rejected explorer filters: {err}");
        ServiceError::Form(err.to_string())
    })?;

    let mut explorer = ListingExplorer::new(filters, per_page);
    explorer.refresh(repo).await;

    let form = ExplorerForm::from_filters(explorer.filters());
    let categories = category_options(explorer.filters().category.as_deref());
    let sorts = sort_options(explorer.filters().sort);
    let error = explorer.view().error.clone();

    let paginated = explorer.into_paginated();
    let listings = Paginated::new(
        paginated.items.iter().map(ListingCard::from).collect(),
        paginated.page,
        paginated.total_pages,
        paginated.total_items,
    );
    let pager = Pager::new(base_path, &form, &listings);
    let (title, subtitle) = headings(route_category);

    Ok(SuppliesPageData {
        title,
        subtitle,
        base_path: base_path.to_string(),
        form,
        categories,
        sorts,
        listings,
        pager,
        error,
    })
}
