//! Shared helpers for the appkit packages.
//!
//! Everything here is pure and stateless:
//!
//! - [`validation`] — single-field checks that report failures as data
//! - [`formatting`] — text and number display transforms
//! - [`date`] — ISO-8601 parsing and long-form date rendering
//! - [`schema`] — structural record validation used by the `ai` and `db` crates

pub mod date;
pub mod formatting;
pub mod schema;
pub mod types;
pub mod validation;

pub use date::{
    format_date, format_date_time, format_date_with, parse_iso, DateError, DateInput,
};
pub use formatting::{format_number, format_text, DEFAULT_DECIMALS};
pub use schema::{FieldChecker, Issue, Schema, SchemaResult};
pub use types::{DateFormatOptions, FormatOptions, ValidationResult};
pub use validation::{is_email, validate_email, validate_required, REQUIRED_MESSAGE};
