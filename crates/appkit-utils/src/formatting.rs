//! Text and number display helpers.

use crate::types::FormatOptions;

/// Decimal places used by [`format_number`] when none are given.
pub const DEFAULT_DECIMALS: usize = 2;

const ELLIPSIS: &str = "...";

/// Apply `options` to `text` in a fixed order: truncate, lowercase, uppercase.
///
/// Truncation counts characters, not bytes. A truncate length of zero is
/// treated as unset. When both case flags are set the uppercase pass runs
/// last and wins.
pub fn format_text(text: &str, options: &FormatOptions) -> String {
    let mut formatted = text.to_string();

    if let Some(max) = options.truncate.filter(|max| *max > 0) {
        if text.chars().count() > max {
            formatted = text.chars().take(max).collect::<String>() + ELLIPSIS;
        }
    }

    if options.lowercase {
        formatted = formatted.to_lowercase();
    }

    if options.uppercase {
        formatted = formatted.to_uppercase();
    }

    formatted
}

/// Fractional digits needed to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Magnitude from which fixed-point output switches to exponent form.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Render `num` in fixed-point notation with `decimals` places (default 2).
///
/// Ties round away from zero on the exact binary value, so `2.5` becomes
/// `"3"` and `0.125` becomes `"0.13"`. Negative zero prints unsigned.
/// Non-finite values print as `NaN`, `Infinity` or `-Infinity`, and
/// magnitudes of `1e21` and above use exponent form (`"1e+21"`).
pub fn format_number(num: f64, decimals: Option<usize>) -> String {
    let decimals = decimals.unwrap_or(DEFAULT_DECIMALS);

    if num.is_nan() {
        return "NaN".to_string();
    }

    let sign = if num < 0.0 { "-" } else { "" };
    let magnitude = num.abs();

    if magnitude.is_infinite() {
        return format!("{sign}Infinity");
    }
    if magnitude >= EXPONENT_THRESHOLD {
        return format!("{sign}{}", exponent_form(magnitude));
    }

    format!("{sign}{}", round_half_up(magnitude, decimals))
}

/// Fixed-point rendering of a non-negative finite `magnitude`.
fn round_half_up(magnitude: f64, decimals: usize) -> String {
    let precision = EXACT_FRACTION_DIGITS.max(decimals + 1);
    let exact = format!("{magnitude:.precision$}");
    let (int_part, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().collect();
    digits.extend(fraction.bytes().take(decimals));
    let mut int_len = int_part.len();

    if fraction.as_bytes().get(decimals).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            int_len += 1;
        }
    }

    let digits = String::from_utf8_lossy(&digits);
    if decimals == 0 {
        digits.into_owned()
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

/// Shortest round-trip exponent form with an explicit `+`, e.g. `1.5e+22`.
fn exponent_form(magnitude: f64) -> String {
    let shortest = format!("{magnitude:e}");
    match shortest.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => shortest,
    }
}
