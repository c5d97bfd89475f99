//! `overlap` CLI — conflict detection and day-column layout over `events.json` files.
//!
//! ## Usage
//!
//! ```sh
//! # List every event that overlaps another on its date (stdin → stdout)
//! cat events.json | overlap conflicts
//!
//! # Pixel placement of one day's timed events
//! overlap layout -i events.json --date 2024-06-01
//!
//! # Same, with a total column order and a custom grid scale
//! overlap --config overlap.toml layout -i events.json --date 2024-06-01 --column-order time-then-id
//!
//! # Agenda for the next 14 days
//! overlap agenda -i events.json --from 2024-06-01
//!
//! # Parse a duration string, or validate it strictly
//! overlap duration 1h30m
//! overlap duration --strict 90min
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use overlap_engine::config::ColumnOrderKind;
use overlap_engine::grid::place_date;
use overlap_engine::{EngineConfig, Event};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "overlap",
    version,
    about = "Calendar conflict detection and overlap layout"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML file with grid and layout settings
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List events that overlap another event on the same date
    Conflicts {
        /// Input events JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Place one day's timed events on the hour grid
    Layout {
        /// Input events JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Day to lay out, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Column order for overlapping events (overrides the config file)
        #[arg(long, value_enum)]
        column_order: Option<OrderArg>,
        /// Pixel height of one hour row (overrides the config file)
        #[arg(long)]
        hour_height: Option<f64>,
    },
    /// Group upcoming events by date
    Agenda {
        /// Input events JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// First day of the agenda, YYYY-MM-DD
        #[arg(long)]
        from: String,
        /// Number of days covered (overrides the config file)
        #[arg(long)]
        days: Option<u32>,
    },
    /// Convert a duration string such as 1h30m into hours
    Duration {
        /// Duration text
        text: String,
        /// Reject input that is not of the form 1h, 30m or 1h30m
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    Lexical,
    TimeThenId,
}

impl From<OrderArg> for ColumnOrderKind {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Lexical => ColumnOrderKind::Lexical,
            OrderArg::TimeThenId => ColumnOrderKind::TimeThenId,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Conflicts { input, output } => {
            let events = read_events(input.as_deref())?;
            let records = overlap_engine::detect_conflicts(&events);
            tracing::info!(conflicting = records.len(), "conflict scan complete");
            write_output(output.as_deref(), &serde_json::to_string_pretty(&records)?)?;
        }
        Commands::Layout {
            input,
            output,
            date,
            column_order,
            hour_height,
        } => {
            overlap_engine::parse_date(&date)?;
            if let Some(order) = column_order {
                config.column_order = order.into();
            }
            if let Some(h) = hour_height {
                config.hour_height_px = h;
            }
            config.validate()?;

            let events = read_events(input.as_deref())?;
            let placed = place_date(
                &events,
                &date,
                &config.metrics(),
                config.column_order.order(),
            );
            write_output(output.as_deref(), &serde_json::to_string_pretty(&placed)?)?;
        }
        Commands::Agenda {
            input,
            output,
            from,
            days,
        } => {
            let start = overlap_engine::parse_date(&from)?;
            if let Some(d) = days {
                config.agenda_days = d;
            }
            config.validate()?;

            let events = read_events(input.as_deref())?;
            let days = overlap_engine::agenda(&events, start, config.agenda_days);
            write_output(output.as_deref(), &serde_json::to_string_pretty(&days)?)?;
        }
        Commands::Duration { text, strict } => {
            let text = if strict {
                overlap_engine::validate_duration(&text)?
            } else {
                text
            };
            println!("{}", overlap_engine::parse_duration_hours(Some(&text)));
        }
    }

    Ok(())
}

/// Logs go to stderr so JSON on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read settings from a TOML file, or use defaults when no file is given.
fn load_config(path: Option<&str>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path))?;
    let config: EngineConfig =
        toml::from_str(&raw).with_context(|| format!("Invalid config file: {}", path))?;
    config.validate()?;
    tracing::debug!(path, ?config, "loaded config");
    Ok(config)
}

fn read_events(path: Option<&str>) -> Result<Vec<Event>> {
    let json = read_input(path)?;
    overlap_engine::load_events(&json).context("Failed to parse events JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
