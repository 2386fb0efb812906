//! Property-based tests for event payload rules

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use calendar_backend::shared::event::TITLE_MAX_LEN;
use calendar_backend::shared::time::parse_timestamp;
use calendar_backend::shared::{CreateEventRequest, Event, EventType, UpdateEventRequest, DEFAULT_COLOR};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn stored_event() -> Event {
    let start = base_time() + Duration::hours(9);
    Event {
        id: 1,
        user_id: 1,
        title: "Standup".to_string(),
        description: Some("Daily".to_string()),
        start_time: start,
        end_time: start + Duration::minutes(15),
        all_day: false,
        event_type: EventType::Task,
        color: "#0B8043".to_string(),
        created_at: base_time(),
        updated_at: base_time(),
    }
}

fn create_request(title: String, start_offset: i64, end_offset: i64) -> CreateEventRequest {
    CreateEventRequest {
        title,
        description: None,
        start_time: base_time() + Duration::minutes(start_offset),
        end_time: base_time() + Duration::minutes(end_offset),
        all_day: false,
        event_type: EventType::Event,
        color: DEFAULT_COLOR.to_string(),
    }
}

proptest! {
    #[test]
    fn test_title_length_limit(len in 1usize..400) {
        let request = create_request("a".repeat(len), 0, 60);
        prop_assert_eq!(request.validate().is_ok(), len <= TITLE_MAX_LEN);
    }

    #[test]
    fn test_blank_titles_rejected(spaces in " {0,10}") {
        let request = create_request(spaces, 0, 60);
        prop_assert!(request.validate().is_err());
    }

    #[test]
    fn test_range_rule(start in -10_000i64..10_000, end in -10_000i64..10_000) {
        let request = create_request("Meeting".to_string(), start, end);
        prop_assert_eq!(request.validate().is_ok(), end >= start);
    }

    #[test]
    fn test_description_only_update_keeps_other_fields(description in ".{0,300}") {
        let current = stored_event();
        let changes: UpdateEventRequest =
            serde_json::from_value(serde_json::json!({ "description": description.clone() })).unwrap();

        let updated = changes.apply(&current).unwrap();

        prop_assert_eq!(updated.description, Some(description));
        prop_assert_eq!(updated.title, current.title);
        prop_assert_eq!(updated.start_time, current.start_time);
        prop_assert_eq!(updated.end_time, current.end_time);
        prop_assert_eq!(updated.color, current.color);
        prop_assert_eq!(updated.event_type, current.event_type);
        prop_assert_eq!(updated.all_day, current.all_day);
    }

    #[test]
    fn test_minute_precision_timestamps_parse_as_utc(minutes in 0i64..5_000_000) {
        let expected = base_time() + Duration::minutes(minutes);
        let short_form = expected.format("%Y-%m-%dT%H:%MZ").to_string();
        let naive_form = expected.format("%Y-%m-%dT%H:%M:%S").to_string();

        prop_assert_eq!(parse_timestamp(&short_form).unwrap(), expected);
        prop_assert_eq!(parse_timestamp(&naive_form).unwrap(), expected);
    }
}
