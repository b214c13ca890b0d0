//! Runtime models: configuration and the caller's session.

pub mod config;
pub mod session;
