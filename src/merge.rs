/// Multi-event merge
///
/// Full outer join of per-event results on (name, age category). Each
/// event owns a fixed slot position in every merged row, so column order
/// follows configured event order no matter who ran which event.
use crate::types::{CompetitorKey, EventEntry, EventResult, MergedRow};
use log::{debug, warn};
use std::collections::HashMap;

/// Merge per-event result sets, given in configured event order.
///
/// Rows come out in order of first appearance (event 0's competitors
/// first). Totals are left at zero for `aggregate::apply_totals`.
pub fn merge_events(events: &[Vec<EventResult>]) -> Vec<MergedRow> {
    let event_count = events.len();
    let mut rows: Vec<MergedRow> = Vec::new();
    let mut index: HashMap<CompetitorKey, usize> = HashMap::new();

    for (slot, results) in events.iter().enumerate() {
        for result in results {
            let row_idx = *index.entry(result.key.clone()).or_insert_with(|| {
                rows.push(MergedRow::empty(result.key.clone(), event_count));
                rows.len() - 1
            });

            let entry = &mut rows[row_idx].slots[slot];
            if entry.as_ref().is_some_and(|existing| existing.points >= result.points) {
                warn!("duplicate result for {:?} in {}; ignoring {} points", result.key, result.event, result.points);
            } else {
                *entry = Some(EventEntry::from(result));
            }
        }
        debug!("merged event slot {} ({} results), {} competitors so far", slot, results.len(), rows.len());
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn result(name: &str, category: &str, event: &str, points: u32, minutes: i64) -> EventResult {
        EventResult {
            key: CompetitorKey::new(name, category),
            event: event.to_string(),
            points,
            time: Duration::minutes(minutes),
        }
    }

    #[test]
    fn test_full_outer_join_keeps_everyone_once() {
        let events = vec![
            vec![result("Alex", "M21", "E1", 50, 40), result("Sam", "W40", "E1", 30, 45)],
            vec![result("Sam", "W40", "E2", 20, 30), result("Jo", "M40", "E2", 10, 20)],
            vec![result("Alex", "M21", "E3", 60, 35)],
        ];
        let rows = merge_events(&events);

        assert_eq!(rows.len(), 3, "one row per distinct competitor");
        let names: Vec<&str> = rows.iter().map(|r| r.key.name.as_str()).collect();
        assert_eq!(names, vec!["Alex", "Sam", "Jo"], "first-appearance order");
        assert!(rows.iter().all(|r| r.slots.len() == 3));
    }

    #[test]
    fn test_slots_follow_event_position() {
        let events = vec![
            vec![result("Alex", "M21", "E1", 50, 40)],
            vec![],
            vec![result("Alex", "M21", "E3", 60, 35), result("Jo", "M40", "E3", 5, 10)],
        ];
        let rows = merge_events(&events);

        let alex = &rows[0];
        assert_eq!(alex.slots[0].as_ref().map(|e| e.event.as_str()), Some("E1"));
        assert!(alex.slots[1].is_none(), "absent event stays empty, not zero");
        assert_eq!(alex.slots[2].as_ref().map(|e| e.points), Some(60));

        let jo = &rows[1];
        assert!(jo.slots[0].is_none());
        assert!(jo.slots[1].is_none());
        assert_eq!(jo.slots[2].as_ref().map(|e| e.event.as_str()), Some("E3"));
    }

    #[test]
    fn test_same_name_different_category_are_separate() {
        let events = vec![vec![result("Jo", "M40", "E1", 10, 20)], vec![result("Jo", "M45", "E2", 12, 22)]];
        let rows = merge_events(&events);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_duplicate_within_event_keeps_higher_points() {
        let events = vec![vec![result("Jo", "M40", "E1", 15, 20), result("Jo", "M40", "E1", 20, 25)]];
        let rows = merge_events(&events);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].slots[0].as_ref().map(|e| e.points), Some(20));
    }

    #[test]
    fn test_no_events_no_rows() {
        assert!(merge_events(&[]).is_empty());
    }
}
