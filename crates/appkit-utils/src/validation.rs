//! Single-field validators.
//!
//! Failures are reported through [`ValidationResult`], never as errors.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::types::ValidationResult;

/// Message returned by [`validate_required`] on failure.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Message returned when a string is not a syntactically valid email.
///
/// This is the message of the single failed check, not a serialized list of
/// issues, so the result carries one human-readable string.
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .expect("email pattern is a valid regex")
    })
}

/// Syntactic email check shared with the record schemas.
pub fn is_email(value: &str) -> bool {
    // The regex crate has no lookaround, so the leading-dot and
    // double-dot rules are checked separately.
    !value.starts_with('.') && !value.contains("..") && email_regex().is_match(value)
}

/// Validate that `value` is a syntactically valid email address.
pub fn validate_email(value: &str) -> ValidationResult {
    if is_email(value) {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(INVALID_EMAIL_MESSAGE)
    }
}

/// Validate that a value is present.
///
/// `None` stands for an absent value and `Value::Null` for an explicit null.
/// The validity flag rejects only absent, null and empty-string values, but
/// the error list is chosen by truthiness, so `0` and `false` come back as
/// valid while still carrying the required message.
pub fn validate_required(value: Option<&Value>) -> ValidationResult {
    let is_valid = match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    };

    let errors = if is_truthy(value) {
        None
    } else {
        Some(vec![REQUIRED_MESSAGE.to_string()])
    };

    ValidationResult { is_valid, errors }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
