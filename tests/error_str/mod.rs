use core::error::Error;
use errstr::{ErrorStr, Location, SharedError, SimpleError, Site};
use std::io;
use std::sync::Arc;

#[test]
fn new_keeps_message_verbatim() {
    for message in ["boom", "with spaces and: punctuation", "ünïcödé"] {
        let err = ErrorStr::new(message);
        assert_eq!(err.message(), message);
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn new_has_no_cause() {
    let err = ErrorStr::new("alone");
    assert!(err.cause().is_none());
    assert!(err.source().is_none());
}

#[test]
fn new_records_the_calling_line() {
    let line = line!() + 1;
    let err = ErrorStr::new("here");

    let site = err.site().expect("track_caller constructors record a site");
    assert_eq!(site.file(), file!());
    assert_eq!(site.line(), line);
    assert_eq!(site.function(), "");
}

#[test]
fn format_builds_message_from_arguments() {
    let err = ErrorStr::format(format_args!("code={}", 42));
    assert_eq!(err.message(), "code=42");
    assert!(err.cause().is_none());
}

#[test]
fn wrap_shares_the_cause_allocation() {
    let cause: SharedError = Arc::new(ErrorStr::new("root"));
    let err = ErrorStr::wrap(cause.clone(), "outer");

    assert!(Arc::ptr_eq(err.cause().unwrap(), &cause));
    assert!(err.matches(&*cause));
}

#[test]
fn wrap_accepts_arc_of_error_str() {
    let cause = Arc::new(ErrorStr::new("root"));
    let err = ErrorStr::wrap(cause.clone(), "outer");

    let held = err.cause().unwrap();
    assert!(core::ptr::addr_eq(Arc::as_ptr(held), Arc::as_ptr(&cause)));
    assert!(err.matches(&*cause));
}

#[test]
fn wrap_arc_keeps_typed_shared_causes() {
    let io_err = Arc::new(io::Error::other("refused"));
    let err = ErrorStr::wrap_arc(io_err.clone(), "dial");

    let held = err.cause().unwrap();
    assert!(core::ptr::addr_eq(Arc::as_ptr(held), Arc::as_ptr(&io_err)));
    assert!(err.matches(&*io_err));
    assert_eq!(Arc::strong_count(&io_err), 2);

    let simple = Arc::new(SimpleError::new("gone"));
    let outer = ErrorStr::wrap(ErrorStr::wrap_arc(simple.clone(), "inner"), "outer");
    assert!(outer.matches(&*simple));
}

#[test]
fn wrap_arc_at_keeps_the_site() {
    let site = Site::new("net::dial", "src/net.rs", 5, 1);
    let err = ErrorStr::wrap_arc_at(Arc::new(io::Error::other("refused")), "dial", site);

    assert_eq!(err.site(), Some(site));
    assert_eq!(err.error_chain(), "dial -> refused");
}

#[test]
fn wrapf_formats_and_keeps_cause() {
    let err = ErrorStr::wrapf(io::Error::other("eof"), format_args!("reading {} bytes", 16));

    assert_eq!(err.message(), "reading 16 bytes");
    assert_eq!(err.cause().unwrap().to_string(), "eof");
    assert_eq!(err.source().unwrap().to_string(), "eof");
}

#[test]
fn matches_is_transitive_over_three_layers() {
    let e1: SharedError = Arc::new(ErrorStr::new("e1"));
    let e2: SharedError = Arc::new(ErrorStr::wrap(e1.clone(), "e2"));
    let e3 = ErrorStr::wrap(e2.clone(), "e3");

    assert!(e3.matches(&e3));
    assert!(e3.matches(&*e2));
    assert!(e3.matches(&*e1));
}

#[test]
fn matches_rejects_errors_outside_the_chain() {
    let inside: SharedError = Arc::new(ErrorStr::new("same text"));
    let outside = ErrorStr::new("same text");
    let err = ErrorStr::wrap(inside, "outer");

    assert!(!err.matches(&outside));
    assert!(!err.matches(&io::Error::other("same text")));
}

#[test]
fn matches_sees_foreign_causes() {
    let io_err: SharedError = Arc::new(io::Error::other("refused"));
    let err = ErrorStr::wrap(ErrorStr::wrap(io_err.clone(), "dial"), "connect");

    assert!(err.matches(&*io_err));
}

#[test]
fn display_string_appends_location() {
    let err = ErrorStr::new_at("boom", Site::new("app::run", "src/app.rs", 12, 3));
    assert_eq!(err.display_string(), "boom [app::run src/app.rs:12]");
    assert_eq!(format!("{err:#}"), "boom [app::run src/app.rs:12]");
    assert_eq!(format!("{err}"), "boom");
}

#[test]
fn display_string_starts_with_message_for_track_caller_sites() {
    let err = ErrorStr::new("disk full");
    let rendered = err.display_string();

    assert!(rendered.starts_with("disk full ["));
    assert!(rendered.ends_with(']'));
    assert!(rendered.contains("<unknown func>"));
    assert!(rendered.contains(&format!("{}:", file!())));
    assert!(!rendered.contains('\n'));
}

#[test]
fn unknown_site_renders_placeholder_without_file() {
    let err = ErrorStr::new_at("lost", Site::UNKNOWN);

    assert_eq!(err.location(), Location::default());
    assert_eq!(err.display_string(), "lost [<unknown func>]");
}

#[test]
fn function_without_file_drops_file_and_line() {
    let err = ErrorStr::new_at("partial", Site::new("app::run", "", 9, 1));
    assert_eq!(err.display_string(), "partial [app::run]");
}

#[test]
fn location_resolves_to_the_triple() {
    let err = ErrorStr::new_at("x", Site::new("app::run", "src/app.rs", 4, 1));
    let (function, file, line) = err.location().into_parts();

    assert_eq!(function, "app::run");
    assert_eq!(file, "src/app.rs");
    assert_eq!(line, 4);
}

#[test]
fn clone_shares_cause_and_keeps_site() {
    let err = ErrorStr::wrap(io::Error::other("eof"), "read");
    let copy = err.clone();

    assert!(Arc::ptr_eq(err.cause().unwrap(), copy.cause().unwrap()));
    assert_eq!(err.site(), copy.site());
    assert_eq!(err.display_string(), copy.display_string());
}

#[test]
fn into_shared_can_be_wrapped_twice() {
    let shared = ErrorStr::new("root").into_shared();
    let left = ErrorStr::wrap(shared.clone(), "left");
    let right = ErrorStr::wrap(shared.clone(), "right");

    assert!(left.matches(&*shared));
    assert!(right.matches(&*shared));
    assert_eq!(Arc::strong_count(&shared), 3);
}

#[test]
fn debug_shows_message_location_and_cause() {
    let err = ErrorStr::wrap_at(io::Error::other("eof"), "read", Site::new("io::read", "src/io.rs", 2, 1));
    let debug = format!("{err:?}");

    assert!(debug.starts_with("ErrorStr"));
    assert!(debug.contains("\"read\""));
    assert!(debug.contains("io::read"));
    assert!(debug.contains("eof"));
}

#[track_caller]
fn not_found(what: &str) -> ErrorStr {
    ErrorStr::new(format!("{what} not found"))
}

#[test]
fn track_caller_helpers_report_their_caller() {
    let line = line!() + 1;
    let err = not_found("page");

    assert_eq!(err.message(), "page not found");
    assert_eq!(err.site().unwrap().line(), line);
}

fn explicit_not_found(what: &str, site: Site) -> ErrorStr {
    ErrorStr::new_at(format!("{what} not found"), site)
}

#[test]
fn explicit_site_is_kept() {
    let site = Site::caller();
    let err = explicit_not_found("row", site);

    assert_eq!(err.site(), Some(site));
}
