//! Tests for loading session configuration.

use std::io::Write;
use std::time::Duration;
use tictactoe_engine::Marker;
use tictactoe_session::{OpponentMode, SessionConfig};

#[test]
fn test_load_full_config() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "think_delay_ms = 250\nmode = \"human\"\nhuman_marker = \"O\"\nfirst = \"O\""
    )
    .expect("write config");

    let config = SessionConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.think_delay(), Duration::from_millis(250));
    assert_eq!(*config.mode(), OpponentMode::Human);
    assert_eq!(*config.human_marker(), Marker::O);
    assert_eq!(config.computer_marker(), Marker::X);
    assert_eq!(*config.first(), Marker::O);
}

#[test]
fn test_empty_file_is_default() {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    let config = SessionConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config, SessionConfig::default());
}

#[test]
fn test_bad_value_reports_parse_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "mode = \"robot\"").expect("write config");

    let err = SessionConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.file.ends_with("config.rs"));
}
