//! Re-export barrel for the presentational layer.
//!
//! Components import everything they render or format from here. The crate
//! has no logic of its own.

/// Field validation used by forms.
pub mod form {
    pub use appkit_utils::{validate_email, validate_required, ValidationResult, REQUIRED_MESSAGE};
}

/// Text, number and date rendering.
pub mod data_display {
    pub use appkit_utils::{
        format_date, format_date_time, format_date_with, format_number, format_text, DateError,
        DateFormatOptions, DateInput, FormatOptions, DEFAULT_DECIMALS,
    };
}

/// Records the components display.
pub mod types {
    pub use appkit_ai::{AiAnalysis, VectorSearchResult};
    pub use appkit_db::{Event, Role, User};
    pub use appkit_utils::{Issue, Schema, SchemaResult};
}

pub use data_display::*;
pub use form::*;
pub use types::*;
