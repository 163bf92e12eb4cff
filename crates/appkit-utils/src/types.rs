//! Value shapes shared by the helper modules.

use serde::{Deserialize, Serialize};

/// Options accepted by [`format_date_with`](crate::format_date_with).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFormatOptions {
    /// Custom `chrono` pattern; takes precedence over `include_time`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Render the time of day after the long date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_time: Option<bool>,
}

/// Outcome of a single-field validation.
///
/// `errors` is only present on failure, so callers must check `is_valid`
/// rather than relying on the error list being empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ValidationResult {
    /// A passing result with no error list.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: None,
        }
    }

    /// A failing result carrying exactly one message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            errors: Some(vec![message.into()]),
        }
    }
}

/// Transformations applied by [`format_text`](crate::format_text).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Maximum number of characters kept before the `...` suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncate: Option<usize>,
    #[serde(default)]
    pub lowercase: bool,
    #[serde(default)]
    pub uppercase: bool,
}

impl FormatOptions {
    pub fn truncate(mut self, max_chars: usize) -> Self {
        self.truncate = Some(max_chars);
        self
    }

    pub fn lowercase(mut self) -> Self {
        self.lowercase = true;
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }
}
