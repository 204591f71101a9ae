/// Tests for ranking module
#[cfg(test)]
mod tests {
    use crate::ranking::*;
    use crate::types::{CompetitorKey, MergedRow};
    use chrono::Duration;

    fn key(points: u32, minutes: i64) -> RankKey {
        RankKey { points, time: Duration::minutes(minutes) }
    }

    fn row(name: &str, category: &str, points: u32, minutes: i64) -> MergedRow {
        let mut row = MergedRow::empty(CompetitorKey::new(name, category), 1);
        row.total_points = points;
        row.total_time = Duration::minutes(minutes);
        row
    }

    #[test]
    fn test_tied_points_share_position() {
        let keys = vec![key(10, 60), key(10, 60), key(8, 60)];
        assert_eq!(competition_positions(&keys), vec![1, 1, 3]);
    }

    #[test]
    fn test_ties_skip_following_positions() {
        let keys = vec![key(10, 60), key(8, 60), key(8, 60), key(5, 60)];
        assert_eq!(competition_positions(&keys), vec![1, 2, 2, 4]);

        let keys = vec![key(9, 0), key(8, 0), key(8, 0), key(7, 0), key(6, 0), key(6, 0), key(5, 0)];
        assert_eq!(competition_positions(&keys), vec![1, 2, 2, 4, 5, 5, 7]);
    }

    #[test]
    fn test_positions_follow_input_index_not_sorted_order() {
        let keys = vec![key(5, 60), key(10, 60), key(8, 60)];
        assert_eq!(competition_positions(&keys), vec![3, 1, 2]);
    }

    #[test]
    fn test_less_time_breaks_points_tie() {
        let keys = vec![key(10, 70), key(10, 65)];
        assert_eq!(competition_positions(&keys), vec![2, 1]);
    }

    #[test]
    fn test_more_points_beats_less_time() {
        assert!(key(11, 90) < key(10, 30), "more points should rank ahead regardless of time");
    }

    #[test]
    fn test_empty_input() {
        assert!(competition_positions(&[]).is_empty());
        assert!(rank_standings(Vec::new()).is_empty());
    }

    #[test]
    fn test_rank_standings_sorted_best_first() {
        let ranked = rank_standings(vec![
            row("Sam", "W40", 30, 50),
            row("Alex", "M21", 110, 75),
            row("Jo", "M40", 30, 45),
        ]);

        let names: Vec<&str> = ranked.iter().map(|r| r.row.key.name.as_str()).collect();
        assert_eq!(names, vec!["Alex", "Jo", "Sam"]);
        let overall: Vec<u32> = ranked.iter().map(|r| r.overall_pos).collect();
        assert_eq!(overall, vec![1, 2, 3]);
    }

    #[test]
    fn test_category_positions_are_independent() {
        let ranked = rank_standings(vec![
            row("Alex", "M21", 100, 60),
            row("Jo", "M40", 50, 40),
            row("Sam", "W40", 50, 40),
            row("Chris", "M40", 20, 30),
        ]);

        let find = |name: &str| ranked.iter().find(|r| r.row.key.name == name).unwrap();

        assert_eq!(find("Jo").overall_pos, 2);
        assert_eq!(find("Sam").overall_pos, 2, "identical totals share the overall position");
        assert_eq!(find("Chris").overall_pos, 4);

        assert_eq!(find("Jo").category_pos, 1);
        assert_eq!(find("Sam").category_pos, 1, "best in own category regardless of overall position");
        assert_eq!(find("Chris").category_pos, 2);
        assert_eq!(find("Alex").category_pos, 1);
    }

    #[test]
    fn test_ties_keep_merge_order() {
        let ranked = rank_standings(vec![row("Zed", "M21", 10, 10), row("Amy", "W21", 10, 10)]);
        assert_eq!(ranked[0].row.key.name, "Zed");
        assert_eq!(ranked[1].row.key.name, "Amy");
        assert_eq!(ranked[0].overall_pos, ranked[1].overall_pos);
    }
}
