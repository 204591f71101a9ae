use crate::aggregate;
use crate::download::{self, Scoresheet};
use crate::error::{Result, StandingsError};
use crate::merge;
use crate::publish::{self, FtpCredentials, PublishOutcome};
use crate::ranking;
use crate::report::{self, FormattedTable, RenderOptions};
use crate::scoresheet;
use crate::types::{EventSource, RankedRow};
use crate::ui;
use chrono::Local;
use log::{debug, info};
use std::path::{Path, PathBuf};

const BANNER_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Everything one standings run needs
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Names the output files, e.g. "2022" -> 2022.csv
    pub label: String,
    pub events: Vec<EventSource>,
    pub output_dir: PathBuf,
    pub parallel: bool,
    pub render: RenderOptions,
    pub credentials: FtpCredentials,
    pub upload: bool,
}

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub events: usize,
    pub competitors: usize,
    pub files: Vec<PathBuf>,
    pub publish: PublishOutcome,
}

impl RunSummary {
    pub fn message(&self) -> String {
        let publish = match &self.publish {
            PublishOutcome::Uploaded(n) => format!("uploaded {} files", n),
            PublishOutcome::Skipped(reason) => format!("upload skipped: {}", reason),
        };
        format!("Ranked {} competitors across {} events; {}", self.competitors, self.events, publish)
    }
}

/// Run the full pipeline with live HTTP downloads
pub fn run_standings(request: &RunRequest) -> Result<RunSummary> {
    run_with_fetcher(request, download::http_get_text)
}

/// Run the full pipeline: fetch, parse, merge, rank, export, publish.
///
/// Local files are written before the upload is attempted and are left
/// in place if the upload fails.
pub fn run_with_fetcher<F>(request: &RunRequest, get: F) -> Result<RunSummary>
where
    F: Fn(&str) -> std::result::Result<String, String> + Sync,
{
    ui::status(&format!("Starting {} at {}", request.label, Local::now().format(BANNER_FORMAT)));

    let sheets = download::fetch_all_with(&request.events, request.parallel, get)?;
    let ranked = compute_standings(&sheets)?;
    ui::status("Merged results");

    let table = report::format_standings(&ranked, request.events.len(), &request.render, Local::now());
    let files = write_outputs(&table, &request.render, &request.output_dir, &request.label)?;
    verify_csv(&files[0], ranked.len())?;
    ui::status("Exported CSV and HTML files");

    let publish = if request.upload {
        publish::publish_files(&request.credentials, &files)?
    } else {
        PublishOutcome::Skipped("upload disabled".to_string())
    };
    match &publish {
        PublishOutcome::Uploaded(_) => {
            ui::status(&format!("Uploaded files at {}", Local::now().format(BANNER_FORMAT)))
        }
        PublishOutcome::Skipped(reason) => ui::print_notice(&format!("Upload skipped: {}", reason)),
    }

    Ok(RunSummary { events: request.events.len(), competitors: ranked.len(), files, publish })
}

/// Parse every score-sheet and produce ranked standings.
///
/// `sheets` must be in configured event order; it decides slot order.
pub fn compute_standings(sheets: &[Scoresheet]) -> Result<Vec<RankedRow>> {
    let per_event = sheets
        .iter()
        .map(|sheet| scoresheet::parse_event_results(&sheet.html, &sheet.event))
        .collect::<Result<Vec<_>>>()?;

    let mut merged = merge::merge_events(&per_event);
    aggregate::apply_totals(&mut merged);
    debug!("Merged {} events into {} competitors", per_event.len(), merged.len());

    Ok(ranking::rank_standings(merged))
}

/// Write `<label>.csv` and `<label>.html` into `output_dir`
pub fn write_outputs(
    table: &FormattedTable,
    render: &RenderOptions,
    output_dir: &Path,
    label: &str,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir).map_err(|e| StandingsError::Export {
        path: output_dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let csv_path = output_dir.join(format!("{}.csv", label));
    let html_path = output_dir.join(format!("{}.html", label));

    report::write_csv(table, &csv_path)?;
    report::write_html(table, render, &html_path)?;
    info!("Wrote {} and {}", csv_path.display(), html_path.display());

    Ok(vec![csv_path, html_path])
}

/// Read the written CSV back and check every competitor made it
fn verify_csv(csv_path: &Path, expected: usize) -> Result<()> {
    let published = report::read_standings_csv(csv_path)?;
    if published.len() != expected {
        return Err(StandingsError::Export {
            path: csv_path.to_path_buf(),
            message: format!("wrote {} competitors but read back {}", expected, published.len()),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;
