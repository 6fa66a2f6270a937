//! I/O for benchmark documents and comparison snapshots.

use crate::comparison::ComparisonSet;
use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load a benchmark-result document from a JSON file.
///
/// The document is returned untyped; shape recognition happens at
/// extraction time. Parse errors keep the parser's line/column in the
/// message.
pub fn load_document(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    serde_json::from_str(&content).map_err(|source| Error::InvalidFormat {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a comparison snapshot to `path` as pretty-printed JSON
/// (2-space indentation).
pub fn write_comparison(comparisons: &ComparisonSet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(comparisons).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source: std::io::Error::new(ErrorKind::InvalidData, source),
    })?;
    fs::write(path, json).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::MetricComparison;
    use serde_json::json;

    #[test]
    fn test_load_document_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("baseline.json");
        fs::write(&path, r#"{"metrics": {"Throughput": {"ratio": 2.0}}}"#).unwrap();

        let document = load_document(&path).unwrap();
        assert_eq!(document["metrics"]["Throughput"]["ratio"], json!(2.0));
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_malformed_json_keeps_parser_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"metrics\": {\n  \"Throughput\": oops\n}}").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { .. }));
        let message = err.to_string();
        assert!(message.contains("broken.json"));
        assert!(message.contains("line 2"));
    }

    #[test]
    fn test_write_comparison_is_two_space_indented_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comparison.json");

        let mut comparisons = ComparisonSet::new();
        comparisons.insert("Throughput", MetricComparison::new(2.0, 1.8));
        write_comparison(&comparisons, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("{\n  \"Throughput\""));

        let parsed: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["Throughput"]["baseline"], json!(2.0));
        assert_eq!(parsed["Throughput"]["current"], json!(1.8));
        assert_eq!(parsed["Throughput"]["improved"], json!(false));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("comparison.json");

        let comparisons = ComparisonSet::new();
        let err = write_comparison(&comparisons, &path).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
        assert!(err.to_string().contains("comparison.json"));
    }
}
