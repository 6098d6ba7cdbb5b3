#![allow(clippy::unwrap_used, clippy::expect_used)]

use apisurf_core::errors::ApiSurfError;
use apisurf_core::logging_facility::test_capture::init_test_capture;
use apisurf_core::ExtractionContext;
use apisurf_core::{log_op_end, log_op_error, log_op_start};
use apisurf_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    assert_eq!(starts, 1);
}

#[test]
fn test_log_op_end_macro_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42, feature_count = 7usize);

    let events = capture.events_for_op(op_name);
    let end = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .expect("end event");
    assert_eq!(end.field("duration_ms"), Some("42"));
    assert_eq!(end.field("feature_count"), Some("7"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ApiSurfError::ScopeUnderflow {
        label: "pkg x".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for_op(op_name);
    let error_event = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("error event");
    assert_eq!(
        error_event.field("err_code"),
        Some("ERR_SCOPE_IMBALANCE")
    );
}

#[test]
fn test_verbose_extraction_logs_each_feature() {
    let capture = init_test_capture();

    let mut ctx = ExtractionContext::new().verbose(true);
    ctx.in_scope("pkg example.com/verbose_unique_4", |ctx| {
        ctx.emit("func Logged()")
    })
    .unwrap();

    let logged = capture.count_events(|e| {
        e.field("feature") == Some("pkg example.com/verbose_unique_4, func Logged()")
    });
    assert_eq!(logged, 1);
}

#[test]
fn test_quiet_extraction_logs_no_features() {
    let capture = init_test_capture();

    let mut ctx = ExtractionContext::new();
    ctx.in_scope("pkg example.com/quiet_unique_5", |ctx| ctx.emit("func Silent()"))
        .unwrap();

    let logged = capture.count_events(|e| {
        e.field("feature")
            .is_some_and(|f| f.contains("quiet_unique_5"))
    });
    assert_eq!(logged, 0);
}
