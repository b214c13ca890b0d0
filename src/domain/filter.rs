//! Explorer filter state and the client-side matching used when the server
//! returns an unpaginated list.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::listing::Listing;
use crate::domain::types::{CategoryName, LocationName, PageNumber, Price, SearchTerm};

/// Sort orders understood by the Listings API.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Newest, SortOrder::PriceAsc, SortOrder::PriceDesc];

    /// Wire value used in query strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::PriceAsc => "price_asc",
            SortOrder::PriceDesc => "price_desc",
        }
    }

    /// Parses a wire value, falling back to [`SortOrder::Newest`].
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "newest" => Ok(SortOrder::Newest),
            "price_asc" => Ok(SortOrder::PriceAsc),
            "price_desc" => Ok(SortOrder::PriceDesc),
            _ => Err(()),
        }
    }
}

/// One user interaction with the filter bar.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterChange {
    Category(Option<CategoryName>),
    Location(Option<LocationName>),
    MinPrice(Option<Price>),
    MaxPrice(Option<Price>),
    Search(String),
    Sort(SortOrder),
    Page(PageNumber),
}

/// Everything the explorer sends to the Listings API.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FilterState {
    pub category: Option<CategoryName>,
    pub location: Option<LocationName>,
    pub min_price: Option<Price>,
    pub max_price: Option<Price>,
    /// Raw search input; trimmed when the query is assembled.
    pub search_term: String,
    pub sort: SortOrder,
    pub page: PageNumber,
}

impl FilterState {
    /// Seeds the state from a category path segment.
    pub fn for_category(category: &str) -> Self {
        Self {
            category: CategoryName::new(category).ok(),
            ..Self::default()
        }
    }

    /// Applies a change. Anything other than a page change returns to page 1.
    #[must_use]
    pub fn apply(mut self, change: FilterChange) -> Self {
        match change {
            FilterChange::Page(page) => {
                self.page = page;
                return self;
            }
            FilterChange::Category(category) => self.category = category,
            FilterChange::Location(location) => self.location = location,
            FilterChange::MinPrice(price) => self.min_price = price,
            FilterChange::MaxPrice(price) => self.max_price = price,
            FilterChange::Search(term) => self.search_term = term,
            FilterChange::Sort(sort) => self.sort = sort,
        }
        self.page = PageNumber::FIRST;
        self
    }

    /// Trimmed search term, if any.
    pub fn search(&self) -> Option<SearchTerm> {
        SearchTerm::new(self.search_term.as_str()).ok()
    }

    /// Client-side predicate: exact category match AND case-insensitive
    /// substring search over name, category and location.
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(category) = &self.category
            && listing.category != category.as_str()
        {
            return false;
        }

        match self.search() {
            Some(term) => listing.haystack().contains(&term.to_lowercase()),
            None => true,
        }
    }

    /// Keeps only the listings accepted by [`FilterState::matches`].
    pub fn filter_listings(&self, listings: Vec<Listing>) -> Vec<Listing> {
        listings.into_iter().filter(|l| self.matches(l)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(name: &str, category: &str, location: Option<&str>) -> Listing {
        Listing {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: category.to_string(),
            location: location.map(str::to_string),
            ..Listing::default()
        }
    }

    fn on_page(page: usize) -> FilterState {
        FilterState::default().apply(FilterChange::Page(PageNumber::clamped(page)))
    }

    #[test]
    fn non_page_changes_reset_to_first_page() {
        let changes = vec![
            FilterChange::Category(CategoryName::new("Food").ok()),
            FilterChange::Location(LocationName::new("Dhaka").ok()),
            FilterChange::MinPrice(Price::new(5.0).ok()),
            FilterChange::MaxPrice(None),
            FilterChange::Search("cat".to_string()),
            FilterChange::Sort(SortOrder::PriceDesc),
        ];

        for change in changes {
            let state = on_page(7).apply(change.clone());
            assert_eq!(state.page, PageNumber::FIRST, "{change:?} kept the page");
        }
    }

    #[test]
    fn page_change_keeps_other_filters() {
        let state = FilterState::for_category("Pets")
            .apply(FilterChange::Search("dog".to_string()))
            .apply(FilterChange::Page(PageNumber::clamped(4)));

        assert_eq!(state.page.get(), 4);
        assert_eq!(state.category.as_deref(), Some("Pets"));
        assert_eq!(state.search_term, "dog");
    }

    #[test]
    fn category_filter_is_exact_match() {
        let items = vec![
            listing("Kibble", "Food", None),
            listing("Rex", "Pets", None),
            listing("Treats", "Food", None),
        ];

        let filtered = FilterState::for_category("Food").filter_listings(items);

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|l| l.category == "Food"));
    }

    #[test]
    fn search_is_case_insensitive_over_joined_fields() {
        let items = vec![
            listing("Kibble", "Food", Some("Chattogram")),
            listing("Rex", "Pets", Some("Dhaka")),
        ];

        let state = FilterState::default().apply(FilterChange::Search("  DHAKA ".to_string()));
        let filtered = state.filter_listings(items);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Rex");
    }

    #[test]
    fn filters_combine_with_and() {
        let items = vec![
            listing("Rex", "Pets", Some("Dhaka")),
            listing("Dog food", "Food", Some("Dhaka")),
        ];

        let state = FilterState::for_category("Pets").apply(FilterChange::Search("dhaka".into()));

        assert_eq!(state.filter_listings(items).len(), 1);
    }

    #[test]
    fn empty_filters_match_everything() {
        let state = FilterState::for_category("   ");
        assert!(state.category.is_none());
        assert!(state.matches(&listing("Anything", "Other", None)));
    }

    #[test]
    fn unknown_sort_falls_back_to_newest() {
        assert_eq!(SortOrder::parse_or_default("price_asc"), SortOrder::PriceAsc);
        assert_eq!(SortOrder::parse_or_default("random"), SortOrder::Newest);
    }
}
