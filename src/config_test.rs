/// Tests for config module
#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::error::StandingsError;
    use std::path::Path;

    #[test]
    fn test_event_order_follows_json_order() {
        let json = r#"{"Winster": "https://example.org/w", "Danebridge": "https://example.org/d", "Hartington": "https://example.org/h"}"#;
        let events = parse_events(json, "inline").expect("Should parse events");

        let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Winster", "Danebridge", "Hartington"], "object order is the event order");
        assert_eq!(events[1].url, "https://example.org/d");
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = parse_events("{\"Winster\": ", "inline").unwrap_err();
        assert!(matches!(err, StandingsError::ConfigJson { .. }));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_empty_mapping_rejected() {
        let err = parse_events("{}", "inline").unwrap_err();
        assert!(matches!(err, StandingsError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = parse_events("[\"https://example.org\"]", "inline").unwrap_err();
        assert!(matches!(err, StandingsError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_non_string_url_rejected() {
        let err = parse_events(r#"{"Winster": 42}"#, "inline").unwrap_err();
        match err {
            StandingsError::ConfigInvalid { message, .. } => assert!(message.contains("Winster")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_validate_year() {
        assert!(validate_year("2022").is_ok());
        assert!(validate_year("2022-spring").is_ok());
        assert!(validate_year("").is_err());
        assert!(validate_year("  ").is_err());
        assert!(validate_year("../escaped").is_err());
        assert!(validate_year("a\\b").is_err());
        assert!(validate_year("..").is_err());
    }

    #[test]
    fn test_config_path_uses_year() {
        assert_eq!(config_path(Path::new("conf"), "2022"), Path::new("conf").join("events_2022.json"));
    }

    #[test]
    fn test_load_events_from_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("events_2023.json"), r#"{"Race 1": "https://example.org/1"}"#).unwrap();

        let events = load_events(dir.path(), "2023").expect("Should load events");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Race 1");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_events(dir.path(), "1999").unwrap_err();
        assert!(matches!(err, StandingsError::ConfigRead { .. }));
    }
}
