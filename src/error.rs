//! Error types for the standings pipeline.
//!
//! Every variant except `Publish` aborts before anything is uploaded.
//! Missing upload credentials are not an error at all; see
//! `publish::PublishOutcome::Skipped`.

use std::path::PathBuf;
use thiserror::Error;

use crate::timing::TimeFormatError;

/// Errors that can stop a standings run.
#[derive(Debug, Error)]
pub enum StandingsError {
    // === Configuration ===
    /// Event configuration file missing or unreadable.
    #[error("failed to read event configuration {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Event configuration is not valid JSON.
    #[error("malformed event configuration {origin}: {source}")]
    ConfigJson {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Event configuration parsed but does not describe a usable event list.
    #[error("invalid event configuration {origin}: {message}")]
    ConfigInvalid { origin: String, message: String },

    // === Fetch ===
    #[error("failed to download results for {event} ({url}): {message}")]
    Fetch { event: String, url: String, message: String },

    // === Score-sheet parsing ===
    /// The downloaded document contains no `<table>`.
    #[error("no results table found for {event}")]
    ParseNoTable { event: String },

    /// A required column is absent from the table header.
    #[error("results table for {event} has no '{column}' column")]
    ParseMissingColumn { event: String, column: String },

    /// The Points cell does not start with an integer.
    #[error("invalid points value '{value}' for {name} in {event}")]
    ParsePoints { event: String, name: String, value: String },

    /// The Time cell is not `h:mm:ss` or `mm:ss`.
    #[error("invalid time for {name} in {event}: {source}")]
    ParseTime {
        event: String,
        name: String,
        #[source]
        source: TimeFormatError,
    },

    // === Output ===
    /// Writing a local CSV/HTML artifact failed.
    #[error("failed to write {path}: {message}")]
    Export { path: PathBuf, message: String },

    /// A previously published standings CSV could not be read back.
    #[error("failed to read standings {path}: {message}")]
    StandingsCsv { path: PathBuf, message: String },

    /// Upload to the remote file store failed after credentials were supplied.
    #[error("failed to upload to {address}: {message}")]
    Publish { address: String, message: String },
}

impl StandingsError {
    /// True for errors caused by the caller's configuration rather than by
    /// the upstream score-sheets or the publishing host.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            StandingsError::ConfigRead { .. } | StandingsError::ConfigJson { .. } | StandingsError::ConfigInvalid { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, StandingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_classified() {
        let err = StandingsError::ConfigInvalid { origin: "events_2022.json".to_string(), message: "empty".to_string() };
        assert!(err.is_config_error());

        let err = StandingsError::Fetch {
            event: "Winster".to_string(),
            url: "http://example.invalid".to_string(),
            message: "timeout".to_string(),
        };
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_messages_name_the_event() {
        let err = StandingsError::ParseMissingColumn { event: "Danebridge".to_string(), column: "Points".to_string() };
        let msg = err.to_string();
        assert!(msg.contains("Danebridge"), "message should name the event: {}", msg);
        assert!(msg.contains("'Points'"), "message should name the column: {}", msg);
    }
}
