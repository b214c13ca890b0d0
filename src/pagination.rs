use serde::Serialize;

/// Maximum number of page buttons rendered at once.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Number of listings requested per explorer page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;

/// Contiguous window of page numbers around `current_page`.
///
/// The window is centered on the current page where possible and clamped to
/// `1..=total_pages`. An empty result means there is nothing to paginate.
pub fn page_window(current_page: usize, total_pages: usize, max_visible: usize) -> Vec<usize> {
    if total_pages == 0 || max_visible == 0 {
        return vec![];
    }

    let start = current_page.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total_pages);
    let real_start = (end + 1).saturating_sub(max_visible).max(1);

    (real_start..=end).collect()
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<usize>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_page: Option<usize>,
    pub next_page: Option<usize>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize, total_items: usize) -> Self {
        let current_page = match total_pages {
            0 => current_page.max(1),
            total => current_page.clamp(1, total),
        };

        let pages = page_window(current_page, total_pages, MAX_VISIBLE_PAGES);
        let has_prev = current_page > 1;
        let has_next = current_page < total_pages;

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
            total_items,
            has_prev,
            has_next,
            prev_page: has_prev.then(|| current_page - 1),
            next_page: has_next.then(|| current_page + 1),
        }
    }
}
