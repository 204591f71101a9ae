/// Score-sheet download
///
/// This module handles:
/// - HTTP GET of a score-sheet page
/// - Fetching every configured event, sequentially or on scoped threads
///
/// Results always come back in configured event order, whatever order
/// the downloads finish in. Any failure aborts the run.
use crate::error::{Result, StandingsError};
use crate::types::EventSource;
use crate::ui;
use log::debug;
use std::thread;

const USER_AGENT: &str = "maprun-standings/0.1.0";

/// Download a score-sheet page as text
pub fn http_get_text(url: &str) -> std::result::Result<String, String> {
    let resp = ureq::get(url).set("User-Agent", USER_AGENT).call().map_err(|e| e.to_string())?;
    debug!("GET {} -> {}", url, resp.status());
    resp.into_string().map_err(|e| e.to_string())
}

/// A downloaded score-sheet page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoresheet {
    pub event: String,
    pub html: String,
}

/// Fetch every event with the given getter, preserving event order
pub fn fetch_all_with<F>(events: &[EventSource], parallel: bool, get: F) -> Result<Vec<Scoresheet>>
where
    F: Fn(&str) -> std::result::Result<String, String> + Sync,
{
    let fetch_one = |event: &EventSource| -> Result<Scoresheet> {
        let html = get(&event.url).map_err(|message| StandingsError::Fetch {
            event: event.name.clone(),
            url: event.url.clone(),
            message,
        })?;
        ui::status(&format!("Downloaded {}", event.name));
        Ok(Scoresheet { event: event.name.clone(), html })
    };

    if !parallel {
        return events.iter().map(&fetch_one).collect();
    }

    debug!("Fetching {} events in parallel", events.len());
    let fetch_one = &fetch_one;
    thread::scope(|scope| {
        let handles: Vec<_> = events.iter().map(|event| scope.spawn(move || fetch_one(event))).collect();
        handles
            .into_iter()
            .zip(events)
            .map(|(handle, event)| {
                handle.join().unwrap_or_else(|_| {
                    Err(StandingsError::Fetch {
                        event: event.name.clone(),
                        url: event.url.clone(),
                        message: "download thread panicked".to_string(),
                    })
                })
            })
            .collect()
    })
}
