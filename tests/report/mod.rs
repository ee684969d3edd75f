use errstr::{ErrorReport, ErrorStr, Location, Site};
use std::io;

fn sample() -> ErrorStr {
    let root = ErrorStr::wrap_at(io::Error::other("disk full"), "writing page", Site::UNKNOWN);
    ErrorStr::wrap_at(root, "saving snapshot", Site::new("store::save", "src/store.rs", 40, 9))
}

#[test]
fn report_collects_message_location_and_causes() {
    let report = sample().report();

    assert_eq!(report.message, "saving snapshot");
    assert_eq!(report.location.function, "store::save");
    assert_eq!(report.location.line, 40);
    assert_eq!(report.causes.as_slice(), ["writing page", "disk full"]);
}

#[test]
fn report_serializes_to_json() {
    let json = serde_json::to_value(ErrorReport::from(&sample())).unwrap();

    assert_eq!(json["message"], "saving snapshot");
    assert_eq!(json["location"]["function"], "store::save");
    assert_eq!(json["location"]["file"], "src/store.rs");
    assert_eq!(json["causes"][1], "disk full");
}

#[test]
fn report_round_trips_through_json() {
    let report = sample().report();
    let text = serde_json::to_string(&report).unwrap();

    assert_eq!(serde_json::from_str::<ErrorReport>(&text).unwrap(), report);
}

#[test]
fn location_deserializes_missing_fields_as_unknown() {
    let location: Location = serde_json::from_str("{}").unwrap();
    assert_eq!(location, Location::default());
}

#[test]
fn site_serializes_all_fields() {
    let json = serde_json::to_value(Site::new("app::run", "src/app.rs", 3, 7)).unwrap();

    assert_eq!(json["function"], "app::run");
    assert_eq!(json["column"], 7);
}
