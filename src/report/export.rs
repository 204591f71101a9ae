//! CSV and HTML export of the standings table.
//!
//! Both artifacts carry the same cells as `FormattedTable`. The CSV can be
//! read back with `read_standings_csv` to check what was published.

use super::table::{FormattedTable, RenderOptions};
use crate::error::{Result, StandingsError};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Write the table as CSV, header row first
pub fn write_csv(table: &FormattedTable, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| export_error(output_path, e))?;
    write_csv_to(table, file).map_err(|e| export_error(output_path, e))
}

/// Write the table as CSV to any writer
pub fn write_csv_to<W: Write>(table: &FormattedTable, writer: W) -> std::result::Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the table as a minimal HTML page
pub fn write_html(table: &FormattedTable, options: &RenderOptions, output_path: &Path) -> Result<()> {
    std::fs::write(output_path, render_html(table, options)).map_err(|e| export_error(output_path, e))
}

/// Render the HTML page for a table
pub fn render_html(table: &FormattedTable, options: &RenderOptions) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html><head><meta charset='UTF-8'>\n");
    html.push_str(&format!("<title>{}</title>\n", sanitize(&options.title)));
    html.push_str(&format!("<link rel='stylesheet' href='{}'>\n", sanitize(&options.stylesheet)));
    html.push_str("</head><body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", sanitize(&options.title)));
    html.push_str("<table class='standings'>\n<thead>\n");
    html.push_str(&format!("<tr style='text-align: {};'>", options.header_justify.as_css()));
    for header in &table.headers {
        html.push_str(&format!("<th>{}</th>", sanitize(header)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", sanitize(cell)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n</body></html>\n");
    html
}

fn sanitize(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            '<' => "&lt;".chars().collect(),
            '>' => "&gt;".chars().collect(),
            '&' => "&amp;".chars().collect(),
            '\'' => "&#39;".chars().collect(),
            '"' => "&quot;".chars().collect(),
            _ => vec![c],
        })
        .collect()
}

fn export_error(path: &Path, err: impl std::fmt::Display) -> StandingsError {
    StandingsError::Export { path: path.to_path_buf(), message: err.to_string() }
}

/// One competitor line of a published standings CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedStanding {
    pub overall_pos: u32,
    pub category_pos: u32,
    pub name: String,
    pub age_category: String,
    pub total_points: u32,
    pub total_time: String,
}

/// Read a standings CSV back, skipping the footer row
pub fn read_standings_csv(path: &Path) -> Result<Vec<PublishedStanding>> {
    let file = File::open(path).map_err(|e| read_error(path, e))?;
    read_standings_from(file).map_err(|message| StandingsError::StandingsCsv { path: path.to_path_buf(), message })
}

/// Read standings CSV text from any reader
pub fn read_standings_from<R: Read>(reader: R) -> std::result::Result<Vec<PublishedStanding>, String> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let width = rdr.headers().map_err(|e| e.to_string())?.len();
    // 4 leading columns, 2 totals
    if width < 6 || (width - 6) % 3 != 0 {
        return Err(format!("unexpected column count {}", width));
    }

    let mut standings = Vec::new();
    for (line, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| e.to_string())?;
        let field = |idx: usize| record.get(idx).unwrap_or_default();

        // Footer row: no position
        if field(0).is_empty() {
            continue;
        }

        let number = |idx: usize| {
            field(idx).parse::<u32>().map_err(|e| format!("row {}: column {}: {}", line + 1, idx + 1, e))
        };

        standings.push(PublishedStanding {
            overall_pos: number(0)?,
            category_pos: number(1)?,
            name: field(2).to_string(),
            age_category: field(3).to_string(),
            total_points: number(width - 2)?,
            total_time: field(width - 1).to_string(),
        });
    }

    Ok(standings)
}

fn read_error(path: &Path, err: std::io::Error) -> StandingsError {
    StandingsError::StandingsCsv { path: PathBuf::from(path), message: err.to_string() }
}
