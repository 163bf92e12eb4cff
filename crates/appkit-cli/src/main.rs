//! appkit CLI - validate records, format values and smoke-test service clients.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

mod commands;
mod config;

use commands::{connect::Service, validate::RecordKind};
use config::Config;

/// appkit - shared helpers and client factories from the shell.
#[derive(Parser, Debug)]
#[command(
    name = "appkit",
    author,
    version,
    about = "Validate records, format values and build service clients",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a JSON record against its schema.
    ///
    /// Prints `{"success": true, "data": ..}` or `{"success": false, "issues": [..]}`
    /// and exits non-zero on failure.
    Validate {
        /// Record type.
        #[arg(value_enum)]
        kind: RecordKind,

        /// JSON file to read; `-` reads stdin.
        #[arg(default_value = "-")]
        input: PathBuf,
    },

    /// Check email syntax.
    Email {
        value: String,
    },

    /// Check that a value is present. VALUE is parsed as JSON when possible.
    Required {
        value: Option<String>,
    },

    /// Apply a formatting helper.
    #[command(subcommand)]
    Format(FormatCommands),

    /// Print the JSON Schema for a record type.
    Schema {
        #[arg(value_enum)]
        kind: RecordKind,
    },

    /// Build a client for a service from environment configuration.
    Connect {
        #[arg(value_enum)]
        service: Service,
    },

    /// Show which configuration keys are set.
    Config,
}

#[derive(Subcommand, Debug)]
enum FormatCommands {
    /// Truncate and change the case of text.
    Text {
        text: String,

        /// Keep at most this many characters, then append "...".
        #[arg(short, long)]
        truncate: Option<usize>,

        #[arg(long)]
        lowercase: bool,

        #[arg(long)]
        uppercase: bool,
    },

    /// Render a number with fixed decimals.
    Number {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Decimal places (default 2).
        #[arg(short, long)]
        decimals: Option<usize>,
    },

    /// Render an ISO-8601 date as a long date.
    Date {
        date: String,

        /// Include the time of day.
        #[arg(long)]
        time: bool,

        /// Custom chrono pattern, e.g. "%Y/%m/%d".
        #[arg(short, long)]
        pattern: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load();

    match cli.command {
        Commands::Validate { kind, input } => {
            let passed = commands::validate::execute(kind, &input)?;
            if !passed {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Email { value } => {
            commands::check::email(&value)?;
        }

        Commands::Required { value } => {
            commands::check::required(value.as_deref())?;
        }

        Commands::Format(format_cmd) => match format_cmd {
            FormatCommands::Text {
                text,
                truncate,
                lowercase,
                uppercase,
            } => {
                commands::format::text(&text, truncate, lowercase, uppercase);
            }
            FormatCommands::Number { value, decimals } => {
                commands::format::number(value, decimals);
            }
            FormatCommands::Date {
                date,
                time,
                pattern,
            } => {
                commands::format::date(&date, time, pattern)?;
            }
        },

        Commands::Schema { kind } => {
            commands::validate::schema(kind)?;
        }

        Commands::Connect { service } => {
            commands::connect::execute(&config, service).await?;
        }

        Commands::Config => {
            commands::config::show(&config);
        }
    }

    Ok(ExitCode::SUCCESS)
}
