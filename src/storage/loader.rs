use camino::{Utf8Path as Path, Utf8PathBuf as PathBuf};
use tracing::instrument;

use crate::types::{dataset::Dataset, record::Record};

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Couldn't read data file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Couldn't parse data file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a JSON array of records from `path`.
///
/// Any failure here means the service must not start.
#[instrument]
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let content = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    let records: Vec<Record> =
        serde_json::from_slice(&content).map_err(|source| LoadError::Parse {
            path: path.to_owned(),
            source,
        })?;
    tracing::debug!("Parsed {} records", records.len());
    Ok(Dataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_fixture(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn utf8_path(file: &tempfile::NamedTempFile) -> PathBuf {
        PathBuf::from_path_buf(file.path().to_owned()).unwrap()
    }

    #[test]
    fn test_load() {
        let file = write_fixture(
            r#"[
                {"latitude": -6.2, "longitude": 106.8, "timestamp": "2021-03-01 10:00:00"},
                {"latitude": -6.3, "longitude": 106.9, "timestamp": "not a date", "speed": 12}
            ]"#,
        );
        let dataset = load_dataset(&utf8_path(&file)).unwrap();
        assert_eq!(dataset.len(), 2);
        let records = dataset.positions(1..=2).unwrap();
        assert_eq!(records[0].latitude, -6.2);
        assert_eq!(records[1].timestamp, "not a date");
    }

    #[test]
    fn test_load_empty_array() {
        let file = write_fixture("[]");
        let dataset = load_dataset(&utf8_path(&file)).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = PathBuf::from_path_buf(dir.path().join("data.json")).unwrap();
        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("data.json"));
    }

    #[test]
    fn test_malformed_content() {
        for content in [
            "{",
            r#"{"latitude": 1.0}"#,
            r#"[{"latitude": "north", "longitude": 1.0, "timestamp": "t"}]"#,
            r#"[{"longitude": 1.0, "timestamp": "t"}]"#,
        ] {
            let file = write_fixture(content);
            let err = load_dataset(&utf8_path(&file)).unwrap_err();
            assert!(matches!(err, LoadError::Parse { .. }), "{content}");
        }
    }
}
