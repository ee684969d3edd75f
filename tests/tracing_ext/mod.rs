//! Tests for tracing integration.

use errstr::{ErrorStr, ResultTraceExt, Site};
use std::io;

#[test]
fn trace_without_subscriber_is_a_no_op() {
    let err = ErrorStr::wrap_at(io::Error::other("eof"), "reading", Site::new("io::read", "src/io.rs", 3, 1));
    err.trace();

    assert_eq!(err.message(), "reading");
}

#[test]
fn trace_handles_unknown_location() {
    ErrorStr::new_at("lost", Site::UNKNOWN).trace();
}

#[test]
fn trace_err_passes_ok_through() {
    let result: Result<i32, ErrorStr> = Ok(42);
    assert_eq!(result.trace_err().unwrap(), 42);
}

#[test]
fn trace_err_returns_the_same_error() {
    let result: Result<(), ErrorStr> = Err(ErrorStr::new("failed"));
    let err = result.trace_err().unwrap_err();

    assert_eq!(err.message(), "failed");
    assert!(err.site().is_some());
}
