#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use sinophone_core::errors::SinophoneError;
use sinophone_core::logging_facility::test_capture::init_test_capture;
use sinophone_core::{load_definition, log_op_end, log_op_error, log_op_start};
use sinophone_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_COLLOCATION_COUNT, FIELD_ERR_CODE,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let start_events: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START))
        .collect();
    assert!(
        !start_events.is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = SinophoneError::MalformedTone {
        ipa: "lol".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();
    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(
        error_events[0].field(FIELD_ERR_CODE),
        Some("ERR_MALFORMED_TONE")
    );
}

#[test]
fn test_boundary_ownership_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_ownership_unique_4";

    log_op_start!(op_name, syllable = "kɐʔ˥˥");
    log_op_end!(op_name, duration_ms = 3);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].field("syllable"), Some("kɐʔ˥˥"));
    assert_eq!(events[1].event.as_deref(), Some(EVENT_END));
}

#[test]
fn test_refresh_emits_start_and_end() {
    let capture = init_test_capture();

    let phonology = common::wu_phonology();

    capture.assert_event_exists("phonology_refresh", EVENT_START);
    capture.assert_event_exists("phonology_refresh", EVENT_END);
    let end = capture
        .events_for_op("phonology_refresh")
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .unwrap();
    assert!(end.field("initial_count").is_some());
    assert_eq!(phonology.initials().len(), 3);
}

#[test]
fn test_collocations_report_count() {
    let capture = init_test_capture();

    let count = common::wu_phonology().collocations().len();

    let expected = count.to_string();
    let found = capture.count_events(|e| {
        e.op.as_deref() == Some("phonology_collocations")
            && e.event.as_deref() == Some(EVENT_END)
            && e.field(FIELD_COLLOCATION_COUNT) == Some(expected.as_str())
    });
    assert!(found >= 1);
}

#[test]
fn test_failed_load_emits_error_event() {
    let capture = init_test_capture();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logging-missing.toml");

    assert!(load_definition(&path).is_err());

    let found = capture.count_events(|e| {
        e.op.as_deref() == Some("load_definition")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field(FIELD_ERR_CODE) == Some("ERR_IO")
    });
    assert!(found >= 1);
}
