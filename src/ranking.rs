/// Standings ranking
///
/// Competitors are ordered by total points (more is better), then total
/// time (less is better). Positions use standard competition ranking:
/// tied competitors share the best position and the positions they
/// occupy are skipped, e.g. 1, 2, 2, 4.
use crate::types::{MergedRow, RankedRow};
use chrono::Duration;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Sort key for a standing; `Less` means ranked higher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankKey {
    pub points: u32,
    pub time: Duration,
}

impl RankKey {
    pub fn of(row: &MergedRow) -> Self {
        Self { points: row.total_points, time: row.total_time }
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other.points.cmp(&self.points).then_with(|| self.time.cmp(&other.time))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Standard competition ("min") positions for a list of keys.
///
/// `positions[i]` is one plus the number of keys strictly ahead of `keys[i]`.
pub fn competition_positions(keys: &[RankKey]) -> Vec<u32> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| keys[a].cmp(&keys[b]));

    let mut positions = vec![0; keys.len()];
    for (place, &idx) in order.iter().enumerate() {
        let tied_with_previous = place > 0 && keys[order[place - 1]] == keys[idx];
        positions[idx] = if tied_with_previous { positions[order[place - 1]] } else { place as u32 + 1 };
    }
    positions
}

/// Rank merged rows overall and within each age category.
///
/// Rows must already carry their totals. The result is sorted best first;
/// competitors with identical totals keep their merge order.
pub fn rank_standings(rows: Vec<MergedRow>) -> Vec<RankedRow> {
    let keys: Vec<RankKey> = rows.iter().map(RankKey::of).collect();
    let overall = competition_positions(&keys);

    let mut by_category: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, row) in rows.iter().enumerate() {
        by_category.entry(row.key.age_category.as_str()).or_default().push(idx);
    }

    let mut category = vec![0; rows.len()];
    for members in by_category.values() {
        let member_keys: Vec<RankKey> = members.iter().map(|&idx| keys[idx]).collect();
        for (&idx, pos) in members.iter().zip(competition_positions(&member_keys)) {
            category[idx] = pos;
        }
    }

    let mut ranked: Vec<RankedRow> = rows
        .into_iter()
        .enumerate()
        .map(|(idx, row)| RankedRow { overall_pos: overall[idx], category_pos: category[idx], row })
        .collect();
    ranked.sort_by(|a, b| RankKey::of(&a.row).cmp(&RankKey::of(&b.row)));
    ranked
}

#[cfg(test)]
#[path = "ranking_test.rs"]
mod ranking_test;
