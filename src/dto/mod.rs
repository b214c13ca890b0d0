//! DTO modules that bridge services with templates and APIs.

pub mod account;
pub mod api;
pub mod explorer;
