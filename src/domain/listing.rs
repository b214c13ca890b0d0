use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::lenient;
use crate::domain::types::format_price;

/// Category options offered by the explorer filter bar.
pub const CATEGORY_OPTIONS: [&str; 4] = ["Pets", "Food", "Accessories", "Care Products"];

/// Placeholder shown when a listing has no usable image.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300?text=PawMart+Listing";

/// Listing record as published by the Listings API.
///
/// The explorer treats records as opaque apart from the fields it filters
/// and renders, so everything except the identifier is optional.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Listing {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub price: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(
        default,
        alias = "createdAt",
        deserialize_with = "lenient::optional_timestamp"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Listing {
    /// Returns the image reference, falling back to the placeholder.
    pub fn image_or_placeholder(&self) -> &str {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Human readable price label.
    pub fn price_label(&self) -> String {
        format_price(self.price)
    }

    /// Text searched by the client-side filter: name, category and location.
    pub fn haystack(&self) -> String {
        [
            self.name.as_str(),
            self.category.as_str(),
            self.location.as_deref().unwrap_or(""),
        ]
        .join(" ")
        .to_lowercase()
    }
}

/// One page of listings after the response shape has been normalized.
#[derive(Clone, Debug, Serialize, PartialEq, Default)]
pub struct ListingPage {
    pub items: Vec<Listing>,
    pub total_items: usize,
    pub total_pages: usize,
    /// `false` when the server returned a bare list and filtering is left to
    /// the client.
    pub server_paginated: bool,
}

impl ListingPage {
    /// Wraps a bare list: one page holding everything that was returned.
    pub fn unpaginated(items: Vec<Listing>) -> Self {
        Self {
            total_items: items.len(),
            total_pages: 1,
            items,
            server_paginated: false,
        }
    }
}
