//! Tests for configuration loading

use super::*;
use crate::errors::ClientBookError;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_missing_file_yields_defaults() {
    let config = ConfigLoader::from_file("/definitely/not/here/config.yaml").unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.client_book_path, PathBuf::from("data/clientbook.json"));
}

#[test]
fn test_partial_yaml_keeps_other_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "client_book_path: /tmp/book.json\nlog_level: debug").unwrap();

    let config = ConfigLoader::from_file(file.path()).unwrap();
    assert_eq!(config.client_book_path, PathBuf::from("/tmp/book.json"));
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.log_file, PathBuf::from("clientbook.log"));
}

#[test]
fn test_empty_document() {
    assert_eq!(ConfigLoader::from_str("  \n").unwrap(), AppConfig::default());
}

#[test]
fn test_invalid_values_are_rejected() {
    let err = ConfigLoader::from_str("log_level: loud").unwrap_err();
    assert!(matches!(err, ClientBookError::Config(ref m) if m.contains("loud")));

    let err = ConfigLoader::from_str("client_book_path: \"\"").unwrap_err();
    assert!(matches!(err, ClientBookError::Config(_)));

    let err = ConfigLoader::from_str("log_level: [not, a, string]").unwrap_err();
    assert!(err.to_string().starts_with("Configuration error: Failed to parse YAML config"));
}
