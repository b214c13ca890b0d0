use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::filter::{FilterState, SortOrder};
use crate::domain::types::{CategoryName, LocationName, PageNumber, Price};
use crate::forms::FormError;

/// Explorer filters as they appear in the page's query string.
///
/// Every field is kept as raw text so that an empty input (`minPrice=`)
/// means "no bound" instead of failing to parse.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, PartialEq)]
pub struct ExplorerForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 64))]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 128))]
    pub location: Option<String>,
    #[serde(default, rename = "minPrice", skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,
    #[serde(default, rename = "maxPrice", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

fn parse_price(raw: Option<&str>) -> Result<Option<Price>, FormError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let value: f64 = raw
        .parse()
        .map_err(|_| FormError::InvalidPrice(raw.to_string()))?;
    Price::new(value)
        .map(Some)
        .map_err(|_| FormError::InvalidPrice(raw.to_string()))
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl ExplorerForm {
    /// Parses the form from a raw query string.
    pub fn from_query(query: &str) -> Self {
        serde_html_form::from_str(query).unwrap_or_else(|err| {
            log::warn!("Ignoring malformed explorer query {query:?}: {err}");
            Self::default()
        })
    }

    /// Validates the form and builds the filter state it describes.
    ///
    /// `route_category` seeds the category when the query does not set one.
    pub fn into_filters(self, route_category: Option<&str>) -> Result<FilterState, FormError> {
        self.validate()?;

        let min_price = parse_price(self.min_price.as_deref())?;
        let max_price = parse_price(self.max_price.as_deref())?;
        if let (Some(min), Some(max)) = (min_price, max_price)
            && min.get() > max.get()
        {
            return Err(FormError::InvertedPriceRange);
        }

        let category = match self.category.as_deref() {
            Some(category) => CategoryName::new(category).ok(),
            None => route_category.and_then(|c| CategoryName::new(c).ok()),
        };

        let page = self
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<usize>().ok())
            .map(PageNumber::clamped)
            .unwrap_or_default();

        Ok(FilterState {
            category,
            location: self.location.as_deref().and_then(|l| LocationName::new(l).ok()),
            min_price,
            max_price,
            search_term: non_blank(&self.search).unwrap_or_default(),
            sort: self
                .sort
                .as_deref()
                .map(SortOrder::parse_or_default)
                .unwrap_or_default(),
            page,
        })
    }

    /// Form echoing `filters`, used to build links and prefill inputs.
    pub fn from_filters(filters: &FilterState) -> Self {
        Self {
            category: filters.category.as_ref().map(ToString::to_string),
            location: filters.location.as_ref().map(ToString::to_string),
            min_price: filters.min_price.map(|p| p.to_string()),
            max_price: filters.max_price.map(|p| p.to_string()),
            search: non_blank(&Some(filters.search_term.clone())),
            sort: Some(filters.sort.as_str().to_string()),
            page: Some(filters.page.to_string()),
        }
    }

    /// Query string for the same filters on another page.
    pub fn query_for_page(&self, page: usize) -> String {
        let mut form = self.clone();
        form.page = Some(page.to_string());
        serde_html_form::to_string(&form).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_price_means_no_bound() {
        let form = ExplorerForm::from_query("minPrice=&maxPrice=50&search=+dog+");
        let filters = form.into_filters(None).expect("valid form");

        assert_eq!(filters.min_price, None);
        assert_eq!(filters.max_price.map(Price::get), Some(50.0));
        assert_eq!(filters.search_term, "dog");
    }

    #[test]
    fn negative_or_garbage_price_is_rejected() {
        let form = ExplorerForm::from_query("minPrice=-5");
        assert!(matches!(form.into_filters(None), Err(FormError::InvalidPrice(_))));

        let form = ExplorerForm::from_query("maxPrice=cheap");
        assert!(matches!(form.into_filters(None), Err(FormError::InvalidPrice(_))));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let form = ExplorerForm::from_query("minPrice=100&maxPrice=10");
        assert!(matches!(
            form.into_filters(None),
            Err(FormError::InvertedPriceRange)
        ));
    }

    #[test]
    fn route_category_seeds_missing_category() {
        let filters = ExplorerForm::default()
            .into_filters(Some("Care Products"))
            .expect("valid form");
        assert_eq!(filters.category.as_deref(), Some("Care Products"));

        let filters = ExplorerForm::from_query("category=Food")
            .into_filters(Some("Pets"))
            .expect("valid form");
        assert_eq!(filters.category.as_deref(), Some("Food"));
    }

    #[test]
    fn invalid_page_and_sort_fall_back() {
        let filters = ExplorerForm::from_query("page=0&sort=cheapest")
            .into_filters(None)
            .expect("valid form");
        assert_eq!(filters.page, PageNumber::FIRST);
        assert_eq!(filters.sort, SortOrder::Newest);

        let filters = ExplorerForm::from_query("page=abc")
            .into_filters(None)
            .expect("valid form");
        assert_eq!(filters.page, PageNumber::FIRST);
    }

    #[test]
    fn page_links_keep_filters() {
        let filters = ExplorerForm::from_query("category=Food&search=kibble&page=2")
            .into_filters(None)
            .expect("valid form");

        let query = ExplorerForm::from_filters(&filters).query_for_page(3);

        assert_eq!(query, "category=Food&search=kibble&sort=newest&page=3");
    }
}
