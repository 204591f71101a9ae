/// Tests for scoresheet module
#[cfg(test)]
mod tests {
    use crate::error::StandingsError;
    use crate::scoresheet::*;
    use crate::types::{CompetitorKey, EventResult};
    use chrono::Duration;

    const DANEBRIDGE: &str = include_str!("../test-fixtures/scoresheet_danebridge.html");
    const NO_THEAD: &str = include_str!("../test-fixtures/scoresheet_no_thead.html");

    fn result(name: &str, category: &str, event: &str, points: u32) -> EventResult {
        EventResult {
            key: CompetitorKey::new(name, category),
            event: event.to_string(),
            points,
            time: Duration::minutes(30),
        }
    }

    fn table(headers: &[&str], rows: &[&[&str]]) -> ScoreTable {
        ScoreTable {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows.iter().map(|r| r.iter().map(|s| s.to_string()).collect()).collect(),
        }
    }

    #[test]
    fn test_extract_table_reads_thead_headers() {
        let table = extract_table(DANEBRIDGE, "Danebridge").unwrap();
        assert_eq!(table.headers, vec!["Position", "Name", "AgeCat Position", "Club", "Points", "Time"]);
        assert_eq!(table.rows.len(), 6);
        assert_eq!(table.rows[1][1], "Sam Hollins", "cell whitespace should be normalised");
    }

    #[test]
    fn test_extract_table_without_th_uses_first_row() {
        let table = extract_table(NO_THEAD, "Winster").unwrap();
        assert_eq!(table.headers, vec!["Name", "AgeCat Position", "Points", "Time"]);
        assert_eq!(table.rows.len(), 2, "only the first table should be read");
    }

    #[test]
    fn test_document_without_table_fails() {
        let err = extract_table("<html><body><p>No results yet</p></body></html>", "Winster").unwrap_err();
        assert!(matches!(err, StandingsError::ParseNoTable { .. }));
    }

    #[test]
    fn test_parse_event_results_from_fixture() {
        let results = parse_event_results(DANEBRIDGE, "Danebridge").unwrap();

        let names: Vec<&str> = results.iter().map(|r| r.key.name.as_str()).collect();
        assert_eq!(names, vec!["Sam Hollins", "Jo Carter", "Alex Birch"], "unscored rows dropped, names descending");

        let sam = &results[0];
        assert_eq!(sam.key.age_category, "W40");
        assert_eq!(sam.points, 45, "trailing text after the points should be ignored");
        assert_eq!(sam.time, Duration::seconds(3660));
        assert_eq!(sam.event, "Danebridge");

        let jo = &results[1];
        assert_eq!(jo.points, 20, "the higher-scoring duplicate should be kept");
        assert_eq!(jo.time, Duration::seconds(55 * 60 + 10), "mm:ss should be read as minutes and seconds");
    }

    #[test]
    fn test_age_category_without_position() {
        let results = parse_event_results(NO_THEAD, "Winster").unwrap();
        let dee = results.iter().find(|r| r.key.name == "Dee Rowe").unwrap();
        assert_eq!(dee.key.age_category, "W50");
        assert_eq!(dee.points, 12);
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let t = table(&["Name", "AgeCat Position", "Points"], &[&["Alex", "M21:1", "50"]]);
        let err = results_from_table(&t, "Hartington").unwrap_err();
        match err {
            StandingsError::ParseMissingColumn { column, .. } => assert_eq!(column, "Time"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_bad_points_fails_whole_event() {
        let t = table(
            &["Name", "AgeCat Position", "Points", "Time"],
            &[&["Alex", "M21:1", "50", "0:40:00"], &["Sam", "W40:1", "DSQ", "0:41:00"]],
        );
        let err = results_from_table(&t, "Hartington").unwrap_err();
        assert!(matches!(err, StandingsError::ParsePoints { ref value, .. } if value == "DSQ"));
    }

    #[test]
    fn test_bad_time_fails_whole_event() {
        let t = table(&["Name", "AgeCat Position", "Points", "Time"], &[&["Alex", "M21:1", "50", "forty"]]);
        let err = results_from_table(&t, "Hartington").unwrap_err();
        assert!(matches!(err, StandingsError::ParseTime { .. }));
    }

    #[test]
    fn test_oversized_time_fails_event_without_panic() {
        let t = table(&["Name", "AgeCat Position", "Points", "Time"], &[&["Alex", "M21:1", "50", "3000000000000:00:00"]]);
        let err = results_from_table(&t, "Hartington").unwrap_err();
        assert!(matches!(err, StandingsError::ParseTime { ref name, .. } if name == "Alex"));
    }

    #[test]
    fn test_inline_markup_does_not_split_words() {
        let html = "<table><tr><th>Name</th><th>Points</th></tr>\
                    <tr><td>Jo Ca<b>rt</b>er</td><td> <span>50</span> </td></tr></table>";
        let table = extract_table(html, "Winster").unwrap();
        assert_eq!(table.rows[0], vec!["Jo Carter", "50"]);
    }

    #[test]
    fn test_short_rows_are_unscored() {
        let t = table(&["Name", "AgeCat Position", "Points", "Time"], &[&["Alex", "M21:1"]]);
        assert!(results_from_table(&t, "Hartington").unwrap().is_empty());
    }

    #[test]
    fn test_keep_best_per_competitor_keeps_highest_points() {
        let kept = keep_best_per_competitor(vec![
            result("Jo", "M40", "Winster", 15),
            result("Jo", "M40", "Winster", 20),
            result("Jo", "M45", "Winster", 5),
        ]);

        assert_eq!(kept.len(), 2, "different categories are different competitors");
        let jo_m40 = kept.iter().find(|r| r.key.age_category == "M40").unwrap();
        assert_eq!(jo_m40.points, 20);
    }

    #[test]
    fn test_age_category_strips_position() {
        assert_eq!(age_category("M40:3"), "M40");
        assert_eq!(age_category("W21"), "W21");
        assert_eq!(age_category(""), "");
    }

    #[test]
    fn test_parse_points() {
        assert_eq!(parse_points("120"), Some(120));
        assert_eq!(parse_points("120 (-10 late)"), Some(120));
        assert_eq!(parse_points("-5"), None);
        assert_eq!(parse_points("abc"), None);
    }
}
