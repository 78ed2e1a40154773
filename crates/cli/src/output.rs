use std::io::{self, Write};

use anyhow::Result;
use daylane_core::{LaneRecord, TimeEntry};
use daylane_protocol::{DayColumn, Lane, LayoutBox};
use serde::Serialize;

use crate::Format;

#[derive(Serialize)]
struct LaneRow<'a> {
    id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
    #[serde(flatten)]
    lane: Lane,
}

pub fn write_lanes(
    records: &[LaneRecord<'_, TimeEntry>],
    format: Format,
    pretty: bool,
) -> Result<()> {
    let mut out = io::stdout().lock();
    match format {
        Format::Json => {
            let rows: Vec<LaneRow<'_>> = records
                .iter()
                .map(|r| LaneRow {
                    id: r.source.id,
                    label: r.source.label.as_deref(),
                    lane: r.lane,
                })
                .collect();
            write_json(&mut out, &rows, pretty)
        }
        Format::Table => {
            writeln!(out, "{:>6}  {:<24}  {:>4}/{:<4}", "id", "label", "lane", "max")?;
            for r in records {
                writeln!(
                    out,
                    "{:>6}  {:<24}  {:>4}/{:<4}",
                    r.source.id,
                    truncate(r.source.label.as_deref().unwrap_or("")),
                    r.lane.elevation,
                    r.lane.max_elevation,
                )?;
            }
            Ok(())
        }
    }
}

pub fn write_column(column: &DayColumn, format: Format, pretty: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    match format {
        Format::Json => write_json(&mut out, column, pretty),
        Format::Table => {
            writeln!(out, "{}", column.date)?;
            writeln!(
                out,
                "{:>6}  {:<24}  {:>4}/{:<4}  {:>7} {:>7} {:>7} {:>7}",
                "id", "label", "lane", "max", "top", "left", "width", "height"
            )?;
            for entry in &column.entries {
                writeln!(
                    out,
                    "{:>6}  {:<24}  {:>4}/{:<4}  {}",
                    entry.id,
                    truncate(entry.label.as_deref().unwrap_or("")),
                    entry.lane.elevation,
                    entry.lane.max_elevation,
                    format_box(&entry.layout),
                )?;
            }
            Ok(())
        }
    }
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn format_box(layout: &LayoutBox) -> String {
    let height = match layout.height {
        Some(h) => format!("{h:>7.2}"),
        None => format!("{:>7}", "open"),
    };
    format!(
        "{:>7.2} {:>7.2} {:>7.2} {height}",
        layout.top, layout.left, layout.width
    )
}

fn truncate(label: &str) -> String {
    const MAX_CHARS: usize = 24;
    if label.chars().count() > MAX_CHARS {
        let truncated: String = label.chars().take(MAX_CHARS - 1).collect();
        format!("{truncated}…")
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_labels_are_truncated() {
        let label = "a".repeat(40);
        let shown = truncate(&label);
        assert_eq!(shown.chars().count(), 24);
        assert!(shown.ends_with('…'));
        assert_eq!(truncate("lunch"), "lunch");
    }

    #[test]
    fn open_box_prints_open_height() {
        let layout = LayoutBox {
            top: 50.0,
            left: 25.0,
            width: 75.0,
            height: None,
        };
        assert_eq!(format_box(&layout), "  50.00   25.00   75.00    open");
    }

    #[test]
    fn lane_rows_flatten_the_lane() {
        let row = LaneRow {
            id: 3,
            label: None,
            lane: Lane::new(1, 2).unwrap(),
        };
        let mut buf = Vec::new();
        write_json(&mut buf, &row, false).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "{\"id\":3,\"elevation\":1,\"maxElevation\":2}\n"
        );
    }
}
