//! Standings report generation.
//!
//! This module handles:
//! - Rendering ranked rows into export-ready text cells
//! - Writing the CSV and HTML artifacts
//! - Reading a published CSV back for verification
//!
//! # Module Organization
//!
//! - `table` - Column layout, cell rendering, footer row, render options
//! - `export` - CSV and HTML files

mod export;
mod table;

pub use table::{FormattedTable, Justify, RenderOptions, format_standings};

pub use export::{
    PublishedStanding, read_standings_csv, read_standings_from, render_html, write_csv, write_csv_to, write_html,
};
