//! `find-slots` CLI — find meeting windows in a day of calendar events.
//!
//! ## Usage
//!
//! ```sh
//! # Find windows for the request in day.json (stdin → stdout)
//! find-slots slots < day.json
//!
//! # Read from a file, print JSON with the optional attendees accommodated
//! find-slots slots -i day.json --format json
//!
//! # Use 15-minute buckets for the optional-attendee search
//! find-slots slots -i day.json --quantum 15
//!
//! # Who would miss a meeting at 09:00-10:00?
//! find-slots conflicts -i day.json --window 09:00-10:00
//! ```
//!
//! The input is a JSON document:
//!
//! ```json
//! {
//!   "events": [{"title": "standup", "attendees": ["A"], "start": "09:00", "end": "10:00"}],
//!   "request": {"duration": 30, "required": ["A"], "optional": ["B"]}
//! }
//! ```

use std::collections::BTreeSet;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_finder::time_range::{format_minute, parse_minute};
use meeting_finder::{
    find_conflicts, search_slots, Event, MeetingRequest, SchedulerConfig, TimeRange,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "find-slots",
    version,
    about = "Find meeting slots in a day of calendar events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log the search to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the windows in which the requested meeting fits
    Slots {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Bucket size in minutes for the optional-attendee search
        #[arg(long)]
        quantum: Option<u32>,
        /// Optional attendees searched exhaustively before going greedy
        #[arg(long)]
        max_optional: Option<usize>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List the events that clash with a proposed window
    Conflicts {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Proposed window, e.g. 09:00-10:00
        #[arg(long)]
        window: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Input/output DTOs
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct DayInput {
    #[serde(default)]
    events: Vec<EventInput>,
    request: RequestInput,
}

#[derive(Deserialize)]
struct EventInput {
    #[serde(default)]
    title: String,
    attendees: Vec<String>,
    start: String,
    end: String,
}

#[derive(Deserialize)]
struct RequestInput {
    duration: i64,
    #[serde(default)]
    required: Vec<String>,
    #[serde(default)]
    optional: Vec<String>,
}

#[derive(Serialize)]
struct WindowDto {
    start: String,
    end: String,
    duration_minutes: u32,
}

impl From<&TimeRange> for WindowDto {
    fn from(range: &TimeRange) -> Self {
        Self {
            start: format_minute(range.start()),
            end: format_minute(range.end()),
            duration_minutes: range.duration(),
        }
    }
}

#[derive(Serialize)]
struct SlotsOutput {
    windows: Vec<WindowDto>,
    optional_included: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Slots {
            input,
            quantum,
            max_optional,
            format,
        } => {
            let (events, request) = parse_day(&read_input(input.as_deref())?)?;

            let mut config = SchedulerConfig::default();
            if let Some(q) = quantum {
                config.quantum_minutes = q;
            }
            if let Some(max) = max_optional {
                config.max_optional_attendees = max;
            }
            config.validate()?;

            let result = search_slots(&events, &request, &config);
            debug!(
                windows = result.windows.len(),
                optional = ?result.optional_included,
                "query finished"
            );

            match format {
                Format::Text => {
                    for window in &result.windows {
                        println!("{}", window);
                    }
                }
                Format::Json => {
                    let output = SlotsOutput {
                        windows: result.windows.iter().map(WindowDto::from).collect(),
                        optional_included: result.optional_included,
                    };
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
            }
        }
        Commands::Conflicts { input, window } => {
            let (events, request) = parse_day(&read_input(input.as_deref())?)?;
            let window: TimeRange = window
                .parse()
                .with_context(|| format!("Invalid window: {}", window))?;

            let people: BTreeSet<String> =
                request.required.union(&request.optional).cloned().collect();
            for conflict in find_conflicts(&events, window, &people) {
                let who: Vec<&str> = conflict.attendees.iter().map(String::as_str).collect();
                println!(
                    "{} {} ({} min): {}",
                    conflict.event.when,
                    conflict.event.title,
                    conflict.overlap_minutes,
                    who.join(", ")
                );
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Parse and validate the JSON day description.
fn parse_day(json: &str) -> Result<(Vec<Event>, MeetingRequest)> {
    let day: DayInput = serde_json::from_str(json).context("Failed to parse input JSON")?;

    let events = day
        .events
        .into_iter()
        .enumerate()
        .map(|(i, e)| to_event(e).with_context(|| format!("Invalid event #{}", i + 1)))
        .collect::<Result<Vec<_>>>()?;

    let request = MeetingRequest::new(day.request.duration, day.request.required)
        .with_optional(day.request.optional);
    request.validate().context("Invalid request")?;

    Ok((events, request))
}

fn to_event(input: EventInput) -> meeting_finder::error::Result<Event> {
    let when = TimeRange::try_new(parse_minute(&input.start)?, parse_minute(&input.end)?)?;
    Event::try_new(input.title, when, input.attendees)
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
