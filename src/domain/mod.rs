//! Domain types shared by the explorer core and the web frontend.

pub mod filter;
pub mod lenient;
pub mod listing;
pub mod order;
pub mod types;
