//! Stateful listings explorer: filter state, request generations and the
//! visible result.
//!
//! Requests are never cancelled. Each one is tagged with the generation that
//! was current when it started, and [`ListingExplorer::commit`] drops any
//! outcome whose generation is no longer the latest. This keeps a slow answer
//! for an old filter state from overwriting a newer one.

use serde::Serialize;
use tokio::sync::mpsc;

use crate::domain::filter::{FilterChange, FilterState};
use crate::domain::listing::{Listing, ListingPage};
use crate::pagination::Paginated;
use crate::repository::errors::ApiResult;
use crate::repository::{ListingQuery, ListingReader};

/// What the result renderer shows.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExplorerView {
    pub items: Vec<Listing>,
    pub total_pages: usize,
    pub total_items: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ExplorerView {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 1,
            total_items: 0,
            loading: false,
            error: None,
        }
    }
}

/// Narrows an unpaginated page with the client-side predicates.
///
/// Server-paginated pages are returned untouched: the server already applied
/// every filter.
pub fn apply_client_filters(page: ListingPage, filters: &FilterState) -> ListingPage {
    if page.server_paginated {
        page
    } else {
        ListingPage::unpaginated(filters.filter_listings(page.items))
    }
}

/// A request that has been started but not yet sent.
#[derive(Debug, Clone)]
pub struct PendingFetch {
    generation: u64,
    filters: FilterState,
    query: ListingQuery,
}

impl PendingFetch {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &ListingQuery {
        &self.query
    }

    /// Performs the request. The explorer is not borrowed while it runs.
    pub async fn run<R>(self, reader: &R) -> FetchOutcome
    where
        R: ListingReader + ?Sized,
    {
        let result = reader.list_listings(&self.query).await;
        FetchOutcome {
            generation: self.generation,
            filters: self.filters,
            result,
        }
    }
}

/// Result of a [`PendingFetch`], waiting to be committed.
#[derive(Debug)]
pub struct FetchOutcome {
    generation: u64,
    filters: FilterState,
    result: ApiResult<ListingPage>,
}

impl FetchOutcome {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

pub struct ListingExplorer {
    filters: FilterState,
    per_page: usize,
    generation: u64,
    closed: bool,
    view: ExplorerView,
}

impl ListingExplorer {
    pub fn new(filters: FilterState, per_page: usize) -> Self {
        Self {
            filters,
            per_page: per_page.max(1),
            generation: 0,
            closed: false,
            view: ExplorerView::default(),
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn view(&self) -> &ExplorerView {
        &self.view
    }

    /// Query for the current filter state.
    pub fn query(&self) -> ListingQuery {
        ListingQuery::from_filters(&self.filters, self.per_page)
    }

    /// Applies a filter change. Returns `true` when the state actually moved,
    /// in which case any request still in flight has become stale.
    pub fn change(&mut self, change: FilterChange) -> bool {
        let next = self.filters.clone().apply(change);
        if next == self.filters {
            return false;
        }
        self.filters = next;
        self.generation += 1;
        // Whatever was in flight is stale now and will never be committed.
        self.view.loading = false;
        true
    }

    /// Starts a request for the current filter state.
    pub fn begin(&mut self) -> PendingFetch {
        self.generation += 1;
        self.view.loading = true;
        PendingFetch {
            generation: self.generation,
            filters: self.filters.clone(),
            query: self.query(),
        }
    }

    /// Writes an outcome into the view if it belongs to the latest request.
    ///
    /// Returns `false` when the outcome was discarded.
    pub fn commit(&mut self, outcome: FetchOutcome) -> bool {
        if self.closed || outcome.generation != self.generation {
            log::debug!(
                "Discarding listings response for generation {} (current {})",
                outcome.generation,
                self.generation
            );
            return false;
        }

        self.view = match outcome.result {
            Ok(page) => {
                let page = apply_client_filters(page, &outcome.filters);
                ExplorerView {
                    items: page.items,
                    total_pages: page.total_pages,
                    total_items: page.total_items,
                    loading: false,
                    error: None,
                }
            }
            Err(err) => {
                log::error!("Failed to load listings: {err}");
                ExplorerView {
                    error: Some(err.to_string()),
                    ..ExplorerView::default()
                }
            }
        };
        true
    }

    /// Fetches and commits in one go.
    pub async fn refresh<R>(&mut self, reader: &R) -> bool
    where
        R: ListingReader + ?Sized,
    {
        let pending = self.begin();
        let outcome = pending.run(reader).await;
        self.commit(outcome)
    }

    /// Follows settled search input, typically the output of a
    /// [`Debouncer`](crate::debounce::Debouncer), refreshing for the newest
    /// queued term whenever it changes the filters.
    ///
    /// Returns the number of fetches issued once the input closes or the
    /// explorer is closed.
    pub async fn follow_search<R>(
        &mut self,
        settled: &mut mpsc::UnboundedReceiver<String>,
        reader: &R,
    ) -> usize
    where
        R: ListingReader + ?Sized,
    {
        let mut fetches = 0;
        while !self.closed {
            let Some(mut term) = settled.recv().await else {
                break;
            };
            // Terms that settled during the previous fetch are already stale.
            while let Ok(newer) = settled.try_recv() {
                term = newer;
            }
            if self.change(FilterChange::Search(term)) {
                self.refresh(reader).await;
                fetches += 1;
            }
        }
        fetches
    }

    /// Tears the explorer down; later outcomes are ignored.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Current view with its pagination window, ready for rendering.
    pub fn paginated(&self) -> Paginated<Listing> {
        Paginated::new(
            self.view.items.clone(),
            self.filters.page.get(),
            self.view.total_pages,
            self.view.total_items,
        )
    }

    /// Consumes the explorer, returning the paginated view.
    pub fn into_paginated(self) -> Paginated<Listing> {
        Paginated::new(
            self.view.items,
            self.filters.page.get(),
            self.view.total_pages,
            self.view.total_items,
        )
    }
}
