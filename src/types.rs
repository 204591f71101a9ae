/// Core data structures for event results and standings
///
/// These are the records that flow through the pipeline:
/// score-sheet rows become `EventResult`s, which are merged into one
/// `MergedRow` per competitor and finally ranked into `RankedRow`s.
use chrono::Duration;

/// One configured event: display name and the URL of its score-sheet
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EventSource {
    pub name: String,
    pub url: String,
}

/// Identifies a competitor across events
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompetitorKey {
    pub name: String,
    pub age_category: String,
}

impl CompetitorKey {
    pub fn new(name: impl Into<String>, age_category: impl Into<String>) -> Self {
        Self { name: name.into(), age_category: age_category.into() }
    }
}

/// A single competitor's score in a single event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventResult {
    pub key: CompetitorKey,
    pub event: String,
    pub points: u32,
    pub time: Duration,
}

/// What a competitor scored in one event slot of a merged row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEntry {
    pub event: String,
    pub points: u32,
    pub time: Duration,
}

impl From<&EventResult> for EventEntry {
    fn from(result: &EventResult) -> Self {
        Self { event: result.event.clone(), points: result.points, time: result.time }
    }
}

/// One competitor across all configured events
///
/// `slots[i]` belongs to the i-th configured event; `None` means the
/// competitor did not take part. Totals are zero until
/// `aggregate::apply_totals` has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedRow {
    pub key: CompetitorKey,
    pub slots: Vec<Option<EventEntry>>,
    pub total_points: u32,
    pub total_time: Duration,
}

impl MergedRow {
    /// Create a row with every event slot empty
    pub fn empty(key: CompetitorKey, event_count: usize) -> Self {
        Self { key, slots: vec![None; event_count], total_points: 0, total_time: Duration::zero() }
    }
}

/// A merged row with its overall and age-category positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRow {
    pub overall_pos: u32,
    pub category_pos: u32,
    pub row: MergedRow,
}
