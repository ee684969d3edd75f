use errstr::{ErrorFormatConfig, ErrorStr, Site};
use std::io;

fn layered() -> ErrorStr {
    let root = ErrorStr::new_at("refused", Site::new("net::dial", "src/net.rs", 8, 1));
    let mid = ErrorStr::wrap_at(root, "connecting", Site::new("db::connect", "src/db.rs", 21, 5));
    ErrorStr::wrap_at(mid, "loading users", Site::UNKNOWN)
}

#[test]
fn default_config_joins_messages_with_arrow() {
    assert_eq!(layered().error_chain(), "loading users -> connecting -> refused");
}

#[test]
fn compact_config_uses_pipe() {
    let rendered = layered().fmt_chain(&ErrorFormatConfig::compact());
    assert_eq!(rendered, "loading users | connecting | refused");
}

#[test]
fn located_config_appends_locations_on_one_line() {
    let rendered = layered().fmt_chain(&ErrorFormatConfig::located());
    assert_eq!(
        rendered,
        "loading users [<unknown func>] -> connecting [db::connect src/db.rs:21] -> refused [net::dial src/net.rs:8]"
    );
}

#[test]
fn pretty_config_indents_each_cause() {
    let rendered = layered().fmt_chain(&ErrorFormatConfig::pretty());
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "loading users [<unknown func>]");
    assert_eq!(lines[1], "  └─ connecting [db::connect src/db.rs:21]");
    assert_eq!(lines[2], "    └─ refused [net::dial src/net.rs:8]");
}

#[test]
fn foreign_links_render_with_display_only() {
    let err = ErrorStr::wrap_at(io::Error::other("eof"), "reading header", Site::UNKNOWN);
    let rendered = err.fmt_chain(&ErrorFormatConfig::located());

    assert_eq!(rendered, "reading header [<unknown func>] -> eof");
}

#[test]
fn custom_config_fields_are_honoured() {
    let config = ErrorFormatConfig {
        separator: "; ".into(),
        cause_prefix: Some("caused by: ".into()),
        ..Default::default()
    };

    assert_eq!(
        layered().fmt_chain(&config),
        "loading users; caused by: connecting; caused by: refused"
    );
}

#[test]
fn single_error_has_no_separator() {
    let err = ErrorStr::new_at("alone", Site::UNKNOWN);

    assert_eq!(err.error_chain(), "alone");
    assert_eq!(err.fmt_chain(&ErrorFormatConfig::pretty()), "alone [<unknown func>]");
}

#[test]
fn format_accepts_any_error() {
    let err = io::Error::other("bad magic");
    assert_eq!(ErrorFormatConfig::pretty().format(&err), "bad magic");
}
