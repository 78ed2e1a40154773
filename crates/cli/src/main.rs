mod output;

use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::{FixedOffset, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use daylane_core::parsers::parse_entries;
use daylane_core::{Day, TimeEntry, assign_lanes, layout_day};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Lay out a day of time entries as overlapping calendar lanes")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Log lane assignment details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assign lanes to every entry
    Lanes {
        /// JSON file of time entries (`-` for stdin)
        input: PathBuf,
    },
    /// Assign lanes and compute day-relative boxes
    Layout {
        /// JSON file of time entries (`-` for stdin)
        input: PathBuf,

        /// Reference day (defaults to the local date most entries start on)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// UTC offset of the reference day, e.g. `+02:00`
        #[arg(long, default_value = "+00:00", allow_hyphen_values = true)]
        offset: FixedOffset,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Table,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match cli.command {
        Command::Lanes { input } => {
            let entries = read_entries(&input)?;
            let records = assign_lanes(&entries)?;
            info!(entries = records.len(), "assigned lanes");
            output::write_lanes(&records, cli.format, cli.pretty)
        }
        Command::Layout {
            input,
            date,
            offset,
        } => {
            let entries = read_entries(&input)?;
            let date = match date {
                Some(date) => date,
                None => infer_date(&entries, &offset)
                    .ok_or_else(|| anyhow!("no entries to infer --date from"))?,
            };
            let day = Day::in_zone(date, &offset)?;
            debug!(date = %day.date(), start = %day.start(), end = %day.end(), "reference day");
            let column = layout_day(&day, &entries)?;
            info!(entries = column.entries.len(), lanes = column.lane_count(), "laid out day");
            output::write_column(&column, cli.format, cli.pretty)
        }
    }
}

fn read_entries(path: &Path) -> Result<Vec<TimeEntry>> {
    let data = if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    let entries =
        parse_entries(&data).with_context(|| format!("invalid entries in {}", path.display()))?;
    debug!(count = entries.len(), "parsed entries");
    Ok(entries)
}

/// The local date most entries start on, ties going to the later date.
/// Overnight entries from the previous evening are usually outnumbered.
fn infer_date(entries: &[TimeEntry], offset: &FixedOffset) -> Option<NaiveDate> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for entry in entries {
        let date = entry.interval.start.with_timezone(offset).date_naive();
        *counts.entry(date).or_default() += 1;
    }
    counts
        .into_iter()
        .max_by_key(|&(date, count)| (count, date))
        .map(|(date, _)| date)
}
