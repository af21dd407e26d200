//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use extkit::foundation::{Error, ErrorContext, ErrorKind, require};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_missing_input() {
    let err = Error::missing_input("list");
    assert!(matches!(err.kind, ErrorKind::MissingInput { argument: "list" }));
    assert!(err.is_missing_input());
    assert!(!err.is_invalid_argument());
    assert!(format!("{err}").contains("list"));
}

#[test]
fn error_empty_sequence() {
    let err = Error::empty_sequence();
    assert_eq!(err.kind, ErrorKind::EmptySequence);
    assert!(err.is_invalid_argument());
}

#[test]
fn error_out_of_range() {
    let err = Error::out_of_range("chunk_size", 0, 1, 10);
    let msg = format!("{err}");
    assert!(msg.contains("chunk_size"));
    assert!(msg.contains("1..=10"));
    assert!(err.is_invalid_argument());
}

#[test]
fn error_not_found() {
    let err = Error::not_found("key 42");
    assert!(err.is_not_found());
    assert!(format!("{err}").contains("42"));
}

#[test]
fn error_parse() {
    let err = Error::parse("maybe", "bool");
    assert_eq!(format!("{err}"), "cannot parse \"maybe\" as bool");
    assert!(err.is_invalid_argument());
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_display() {
    let context = ErrorContext::new()
        .with_operation("left")
        .with_detail("length exceeds input");
    assert_eq!(context.to_string(), "in left: length exceeds input");
    assert_eq!(ErrorContext::new().with_detail("only").to_string(), "only");
}

#[test]
fn in_operation_keeps_detail() {
    let err = Error::invalid_argument("bad")
        .with_context(ErrorContext::new().with_detail("while splitting"))
        .in_operation("split_to");
    let context = err.context.unwrap();
    assert_eq!(context.operation, Some("split_to"));
    assert_eq!(context.detail.as_deref(), Some("while splitting"));
}

// =============================================================================
// Require
// =============================================================================

#[test]
fn require_present_and_absent() {
    assert_eq!(require(Some(3), "value").unwrap(), 3);
    let err = require::<i32>(None, "value").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingInput { argument: "value" }));
}
