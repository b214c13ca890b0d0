//! Data handed to the explorer, home and listing templates.

use serde::Serialize;

use crate::domain::filter::SortOrder;
use crate::domain::listing::{CATEGORY_OPTIONS, Listing};
use crate::forms::explorer::ExplorerForm;
use crate::pagination::Paginated;

/// Listing reduced to what a card displays.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListingCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub location: Option<String>,
    pub image: String,
    pub price: String,
    pub status: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
}

impl From<&Listing> for ListingCard {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id.clone(),
            name: listing.name.clone(),
            category: listing.category.clone(),
            location: listing.location.clone().filter(|l| !l.trim().is_empty()),
            image: listing.image_or_placeholder().to_string(),
            price: listing.price_label(),
            status: listing.status.clone(),
            description: listing.description.clone(),
            email: listing.email.clone(),
        }
    }
}

/// Link to one page of the current result set.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PageLink {
    pub number: usize,
    pub href: String,
    pub current: bool,
}

/// Pagination controls rendered under the grid.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Pager {
    pub links: Vec<PageLink>,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

impl Pager {
    pub fn new<T>(base_path: &str, form: &ExplorerForm, paginated: &Paginated<T>) -> Self {
        let href = |page: usize| format!("{base_path}?{}", form.query_for_page(page));
        Self {
            links: paginated
                .pages
                .iter()
                .map(|&number| PageLink {
                    number,
                    href: href(number),
                    current: number == paginated.page,
                })
                .collect(),
            prev_href: paginated.prev_page.map(href),
            next_href: paginated.next_page.map(href),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Options for the category dropdown, "All categories" first.
pub fn category_options(selected: Option<&str>) -> Vec<SelectOption> {
    std::iter::once(("", "All categories"))
        .chain(CATEGORY_OPTIONS.iter().map(|c| (*c, *c)))
        .map(|(value, label)| SelectOption {
            value: value.to_string(),
            label: label.to_string(),
            selected: selected.unwrap_or("") == value,
        })
        .collect()
}

/// Options for the sort dropdown.
pub fn sort_options(selected: SortOrder) -> Vec<SelectOption> {
    SortOrder::ALL
        .iter()
        .map(|sort| SelectOption {
            value: sort.as_str().to_string(),
            label: match sort {
                SortOrder::Newest => "Newest first",
                SortOrder::PriceAsc => "Price: low to high",
                SortOrder::PriceDesc => "Price: high to low",
            }
            .to_string(),
            selected: *sort == selected,
        })
        .collect()
}

/// Data required to render the explorer page.
#[derive(Debug, Serialize)]
pub struct SuppliesPageData {
    pub title: String,
    pub subtitle: String,
    pub base_path: String,
    pub form: ExplorerForm,
    pub categories: Vec<SelectOption>,
    pub sorts: Vec<SelectOption>,
    pub listings: Paginated<ListingCard>,
    pub pager: Pager,
    pub error: Option<String>,
}

/// Data required to render the home page.
#[derive(Debug, Serialize)]
pub struct HomePageData {
    pub recent: Vec<ListingCard>,
    pub error: Option<String>,
}
