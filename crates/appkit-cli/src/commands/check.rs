//! Single-field checks.

use anyhow::Result;
use appkit_utils::{validate_email, validate_required};
use serde_json::Value;

pub fn email(value: &str) -> Result<()> {
    let result = validate_email(value);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// `raw` is parsed as JSON, falling back to a plain string.
pub fn required(raw: Option<&str>) -> Result<()> {
    let value = raw.map(parse_loose);
    let result = validate_required(value.as_ref());
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn parse_loose(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_loose_prefers_json() {
        assert_eq!(parse_loose("0"), json!(0));
        assert_eq!(parse_loose("null"), Value::Null);
        assert_eq!(parse_loose("\"\""), json!(""));
        assert_eq!(parse_loose("hello"), json!("hello"));
    }
}
