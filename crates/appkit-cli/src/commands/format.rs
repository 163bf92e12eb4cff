//! Format command implementation.

use anyhow::Result;
use appkit_utils::{format_date_with, format_number, format_text, DateFormatOptions, FormatOptions};

pub fn text(text: &str, truncate: Option<usize>, lowercase: bool, uppercase: bool) {
    let options = FormatOptions {
        truncate,
        lowercase,
        uppercase,
    };
    println!("{}", format_text(text, &options));
}

pub fn number(value: f64, decimals: Option<usize>) {
    println!("{}", format_number(value, decimals));
}

pub fn date(date: &str, include_time: bool, pattern: Option<String>) -> Result<()> {
    let options = DateFormatOptions {
        format: pattern,
        include_time: Some(include_time),
    };
    println!("{}", format_date_with(date, &options)?);
    Ok(())
}
