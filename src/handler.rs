/// Invocation-payload entry point
///
/// For deployments that hand the tool a JSON payload instead of a
/// configuration file:
///
/// ```json
/// {"year": "2022", "events": {"Danebridge": "https://...", "Winster": "https://..."}}
/// ```
///
/// Optional keys: `"title"` and `"output_dir"`. The response is a status
/// code and a message, never an error value.
use crate::config;
use crate::download;
use crate::error::StandingsError;
use crate::runner::{self, RunRequest};
use log::error;
use serde_json::Value;
use std::path::PathBuf;

/// Status returned to the invoking platform
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    fn from_error(err: &StandingsError) -> Self {
        let status_code = if err.is_config_error() { 400 } else { 500 };
        error!("Invocation failed ({}): {}", status_code, err);
        Self { status_code, body: err.to_string() }
    }
}

/// Handle a payload with live downloads.
///
/// `base` supplies output directory, rendering, credentials and upload
/// settings; its label and events are replaced by the payload's. An empty
/// `base.render.title` means "Results <year>" unless the payload names one.
pub fn handle_invocation(payload: &Value, base: &RunRequest) -> InvocationResponse {
    handle_with_fetcher(payload, base, download::http_get_text)
}

pub fn handle_with_fetcher<F>(payload: &Value, base: &RunRequest, get: F) -> InvocationResponse
where
    F: Fn(&str) -> std::result::Result<String, String> + Sync,
{
    let request = match request_from_payload(payload, base) {
        Ok(request) => request,
        Err(err) => return InvocationResponse::from_error(&err),
    };

    match runner::run_with_fetcher(&request, get) {
        Ok(summary) => InvocationResponse { status_code: 200, body: summary.message() },
        Err(err) => InvocationResponse::from_error(&err),
    }
}

/// Build a run request from a payload, on top of `base`
pub fn request_from_payload(payload: &Value, base: &RunRequest) -> Result<RunRequest, StandingsError> {
    let invalid = |message: &str| StandingsError::ConfigInvalid {
        origin: "invocation payload".to_string(),
        message: message.to_string(),
    };

    let label = match payload.get("year") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => return Err(invalid("missing \"year\"")),
    };
    config::validate_year(&label).map_err(|message| invalid(&message))?;
    let events_value = payload.get("events").ok_or_else(|| invalid("missing \"events\""))?;
    let events = config::events_from_value(events_value, "invocation payload")?;

    let mut request = base.clone();
    // payload title, then a title the caller set, then the default
    request.render.title = match payload.get("title").and_then(Value::as_str) {
        Some(title) => title.to_string(),
        None if !base.render.title.is_empty() => base.render.title.clone(),
        None => format!("Results {}", label),
    };
    if let Some(dir) = payload.get("output_dir").and_then(Value::as_str) {
        request.output_dir = PathBuf::from(dir);
    }
    request.label = label;
    request.events = events;
    Ok(request)
}
