//! CLI command implementations.

pub mod check;
pub mod config;
pub mod connect;
pub mod format;
pub mod validate;
