/// Score-sheet parsing
///
/// This module handles:
/// - Extracting the results table from a downloaded score-sheet page
/// - Locating the columns we need by header text
/// - Turning each scored row into an `EventResult`
/// - Keeping only the best entry per competitor
use crate::error::{Result, StandingsError};
use crate::timing::parse_race_time;
use crate::types::{CompetitorKey, EventResult};
use log::debug;
use scraper::{ElementRef, Html, Selector};

pub const COL_AGE_POSITION: &str = "AgeCat Position";
pub const COL_POINTS: &str = "Points";
pub const COL_TIME: &str = "Time";
pub const COL_NAME: &str = "Name";

lazy_static::lazy_static! {
    static ref TABLE: Selector = Selector::parse("table").expect("valid table selector");
    static ref ROW: Selector = Selector::parse("tr").expect("valid row selector");
    static ref CELL: Selector = Selector::parse("th, td").expect("valid cell selector");
    static ref HEADER_CELL: Selector = Selector::parse("th").expect("valid header selector");
}

/// Cell text of the first table in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ScoreTable {
    /// Index of a column by exact header text
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Extract the first `<table>` of a score-sheet page.
///
/// The header is the first row containing `<th>` cells, or the first row
/// when the table has none. Rows before the header are ignored.
pub fn extract_table(html: &str, event: &str) -> Result<ScoreTable> {
    let document = Html::parse_document(html);
    let table = document
        .select(&TABLE)
        .next()
        .ok_or_else(|| StandingsError::ParseNoTable { event: event.to_string() })?;

    let rows: Vec<ElementRef> = table.select(&ROW).collect();
    let header_idx = rows.iter().position(|r| r.select(&HEADER_CELL).next().is_some()).unwrap_or(0);

    let mut cells = rows.iter().map(|r| r.select(&CELL).map(cell_text).collect::<Vec<String>>());
    let headers = cells.nth(header_idx).unwrap_or_default();
    let rows = cells.filter(|r| r.iter().any(|c| !c.is_empty())).collect();

    Ok(ScoreTable { headers, rows })
}

fn cell_text(cell: ElementRef) -> String {
    // inline markup must not split a word: `Ca<b>rt</b>er` is "Carter"
    let text: String = cell.text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse a score-sheet page into deduplicated results for one event.
///
/// Rows with no Points or no Time are unscored and dropped. A Points or
/// Time value of the wrong shape fails the whole event.
pub fn parse_event_results(html: &str, event: &str) -> Result<Vec<EventResult>> {
    let table = extract_table(html, event)?;
    let results = results_from_table(&table, event)?;
    Ok(keep_best_per_competitor(results))
}

/// Convert table rows into results, without deduplication
pub fn results_from_table(table: &ScoreTable, event: &str) -> Result<Vec<EventResult>> {
    let column = |name: &str| {
        table
            .column(name)
            .ok_or_else(|| StandingsError::ParseMissingColumn { event: event.to_string(), column: name.to_string() })
    };
    let age_col = column(COL_AGE_POSITION)?;
    let points_col = column(COL_POINTS)?;
    let time_col = column(COL_TIME)?;
    let name_col = column(COL_NAME)?;

    let mut results = Vec::with_capacity(table.rows.len());
    let mut dropped = 0;

    for row in &table.rows {
        let cell = move |idx: usize| row.get(idx).map(|c| c.trim()).filter(|c| !c.is_empty());

        let (points_raw, time_raw) = match (cell(points_col), cell(time_col)) {
            (Some(p), Some(t)) => (p, t),
            _ => {
                dropped += 1;
                continue;
            }
        };

        let name = cell(name_col).unwrap_or_default().to_string();
        let age_category = age_category(cell(age_col).unwrap_or_default());

        let points = parse_points(points_raw).ok_or_else(|| StandingsError::ParsePoints {
            event: event.to_string(),
            name: name.clone(),
            value: points_raw.to_string(),
        })?;
        let time = parse_race_time(time_raw).map_err(|source| StandingsError::ParseTime {
            event: event.to_string(),
            name: name.clone(),
            source,
        })?;

        results.push(EventResult { key: CompetitorKey::new(name, age_category), event: event.to_string(), points, time });
    }

    debug!("{}: {} scored rows, {} unscored rows dropped", event, results.len(), dropped);
    Ok(results)
}

/// "M40:3" -> "M40"
pub fn age_category(age_position: &str) -> String {
    match age_position.split_once(':') {
        Some((category, _)) => category.trim().to_string(),
        None => age_position.trim().to_string(),
    }
}

/// Leading integer of a Points cell such as "120" or "120 (-10)"
pub fn parse_points(raw: &str) -> Option<u32> {
    raw.split_whitespace().next()?.parse().ok()
}

/// Keep one result per (name, category, event): the one with most points.
///
/// Output is ordered by name, category and event, all descending.
pub fn keep_best_per_competitor(mut results: Vec<EventResult>) -> Vec<EventResult> {
    results.sort_by(|a, b| {
        b.key
            .name
            .cmp(&a.key.name)
            .then_with(|| b.key.age_category.cmp(&a.key.age_category))
            .then_with(|| b.event.cmp(&a.event))
            .then_with(|| b.points.cmp(&a.points))
    });
    results.dedup_by(|later, kept| later.key == kept.key && later.event == kept.event);
    results
}

#[cfg(test)]
#[path = "scoresheet_test.rs"]
mod scoresheet_test;
