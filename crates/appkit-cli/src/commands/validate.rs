//! Validate and schema command implementations.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use appkit_ai::AiAnalysis;
use appkit_db::{Event, User};
use appkit_utils::Schema;
use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Record types the CLI knows how to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    User,
    Event,
    Analysis,
}

/// Validate the JSON at `input` and print the tagged result.
///
/// Returns whether validation passed.
pub fn execute(kind: RecordKind, input: &Path) -> Result<bool> {
    let raw = read_input(input)?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", input.display()))?;

    let (passed, rendered) = match kind {
        RecordKind::User => check::<User>(&value)?,
        RecordKind::Event => check::<Event>(&value)?,
        RecordKind::Analysis => check::<AiAnalysis>(&value)?,
    };
    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(passed)
}

/// Print the JSON Schema for `kind`.
pub fn schema(kind: RecordKind) -> Result<()> {
    let schema = match kind {
        RecordKind::User => User::json_schema(),
        RecordKind::Event => Event::json_schema(),
        RecordKind::Analysis => AiAnalysis::json_schema(),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn check<T: Schema + Serialize>(value: &Value) -> Result<(bool, Value)> {
    let result = T::parse(value);
    debug!(
        record = T::NAME,
        issues = result.issues().len(),
        "validated"
    );
    Ok((result.is_success(), result.to_json()?))
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
}
