//! Standings table layout.
//!
//! Turns ranked rows into plain text cells in publish order:
//! positions, competitor, one (Event, Points, Time) triple per configured
//! event, then totals. Absent values render as empty cells.

use crate::timing::format_duration;
use crate::types::{EventEntry, RankedRow};
use chrono::{DateTime, Local};

/// Horizontal alignment of the HTML header row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Justify {
    #[default]
    Left,
    Center,
    Right,
}

impl Justify {
    pub fn as_css(&self) -> &'static str {
        match self {
            Justify::Left => "left",
            Justify::Center => "center",
            Justify::Right => "right",
        }
    }
}

/// How the standings are presented
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub title: String,
    pub stylesheet: String,
    pub header_justify: Justify,
    /// Prefix of the footer row's timestamp
    pub footer_label: String,
    /// chrono format string for the footer timestamp
    pub timestamp_format: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Results".to_string(),
            stylesheet: "results.css".to_string(),
            header_justify: Justify::Left,
            footer_label: "Latest update at: ".to_string(),
            timestamp_format: "%d/%m/%Y %H:%M:%S".to_string(),
        }
    }
}

/// Rendered standings: header plus one row per competitor and the footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Column headers for a table with `event_count` events
pub fn header_row(event_count: usize) -> Vec<String> {
    let mut headers: Vec<String> =
        ["Overall Pos", "Category Pos", "Name", "Age Category"].iter().map(|s| s.to_string()).collect();
    for _ in 0..event_count {
        headers.extend(["Event", "Points", "Time"].iter().map(|s| s.to_string()));
    }
    headers.push("Total Points".to_string());
    headers.push("Total Time".to_string());
    headers
}

/// Render ranked rows, appending the "last updated" footer row.
///
/// `ranked` should already be in presentation order.
pub fn format_standings(
    ranked: &[RankedRow],
    event_count: usize,
    options: &RenderOptions,
    generated_at: DateTime<Local>,
) -> FormattedTable {
    let headers = header_row(event_count);

    let mut rows: Vec<Vec<String>> = ranked.iter().map(|r| format_row(r, event_count)).collect();

    let mut footer = vec![String::new(); headers.len()];
    footer[2] = format!("{}{}", options.footer_label, generated_at.format(&options.timestamp_format));
    rows.push(footer);

    FormattedTable { headers, rows }
}

fn format_row(ranked: &RankedRow, event_count: usize) -> Vec<String> {
    let row = &ranked.row;
    let mut cells = vec![
        ranked.overall_pos.to_string(),
        ranked.category_pos.to_string(),
        row.key.name.clone(),
        row.key.age_category.clone(),
    ];

    for slot in 0..event_count {
        cells.extend(format_slot(row.slots.get(slot).and_then(|s| s.as_ref())));
    }

    cells.push(row.total_points.to_string());
    cells.push(format_duration(row.total_time));
    cells
}

fn format_slot(entry: Option<&EventEntry>) -> [String; 3] {
    match entry {
        Some(e) => [e.event.clone(), e.points.to_string(), format_duration(e.time)],
        None => [String::new(), String::new(), String::new()],
    }
}
