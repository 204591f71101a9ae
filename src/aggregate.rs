/// Aggregate totals
///
/// An event a competitor did not run counts as zero points and zero time.
use crate::timing::sum_durations;
use crate::types::MergedRow;
use chrono::Duration;

/// Total points and time across the events present in a row.
///
/// Both totals saturate instead of overflowing.
pub fn totals(row: &MergedRow) -> (u32, Duration) {
    let present = row.slots.iter().flatten();
    let points = present.clone().fold(0u32, |acc, e| acc.saturating_add(e.points));
    let time = sum_durations(present.map(|e| e.time));
    (points, time)
}

/// Fill in `total_points` and `total_time` for every row
pub fn apply_totals(rows: &mut [MergedRow]) {
    for row in rows.iter_mut() {
        let (points, time) = totals(row);
        row.total_points = points;
        row.total_time = time;
    }
}
