/// Event configuration loading
///
/// This module handles:
/// - Locating `events_<year>.json` for a run
/// - Reading the ordered event-name -> score-sheet URL mapping
/// - Validating that the mapping describes at least one event
use crate::error::{Result, StandingsError};
use crate::types::EventSource;
use log::debug;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Check a year label before it names any file.
///
/// The label becomes `events_<year>.json`, `<year>.csv` and `<year>.html`,
/// so it must be non-empty and free of path separators.
pub fn validate_year(year: &str) -> std::result::Result<(), String> {
    if year.trim().is_empty() {
        return Err("year must not be empty".to_string());
    }
    if year.contains(['/', '\\']) || year == ".." {
        return Err(format!("year must not contain path separators: {}", year));
    }
    Ok(())
}

/// Path of the event configuration for a year
pub fn config_path(config_dir: &Path, year: &str) -> PathBuf {
    config_dir.join(format!("events_{}.json", year))
}

/// Load the events for a year from `<config_dir>/events_<year>.json`
pub fn load_events(config_dir: &Path, year: &str) -> Result<Vec<EventSource>> {
    let path = config_path(config_dir, year);
    debug!("Loading event configuration from {:?}", path);

    let text = std::fs::read_to_string(&path).map_err(|source| StandingsError::ConfigRead { path: path.clone(), source })?;
    parse_events(&text, &path.display().to_string())
}

/// Parse a JSON event mapping; `origin` names the source in errors
pub fn parse_events(text: &str, origin: &str) -> Result<Vec<EventSource>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|source| StandingsError::ConfigJson { origin: origin.to_string(), source })?;
    events_from_value(&value, origin)
}

/// Build the event list from a JSON object, keeping its key order
pub fn events_from_value(value: &Value, origin: &str) -> Result<Vec<EventSource>> {
    let invalid = |message: String| StandingsError::ConfigInvalid { origin: origin.to_string(), message };

    let map = value.as_object().ok_or_else(|| invalid("expected an object of event name to URL".to_string()))?;
    if map.is_empty() {
        return Err(invalid("no events configured".to_string()));
    }

    let mut events = Vec::with_capacity(map.len());
    for (name, url) in map {
        let url = url.as_str().ok_or_else(|| invalid(format!("URL for event '{}' is not a string", name)))?;
        if url.trim().is_empty() {
            return Err(invalid(format!("URL for event '{}' is empty", name)));
        }
        events.push(EventSource { name: name.clone(), url: url.trim().to_string() });
    }

    debug!("Configured {} events: {:?}", events.len(), events.iter().map(|e| &e.name).collect::<Vec<_>>());
    Ok(events)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
