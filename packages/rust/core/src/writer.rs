//! Dataset serialization and output.
//!
//! The document is written as pretty-printed UTF-8 JSON (2-space indent,
//! non-ASCII kept literal, keys in insertion order, no trailing newline).

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument};

use mishnah_shared::{Document, MishnahError, Result};

/// Metadata for a written dataset file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    pub path: PathBuf,
    pub size_bytes: usize,
    pub sha256: String,
}

/// How an on-disk file compares with a fresh build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    UpToDate,
    Stale,
    Missing,
}

/// Serialize a document to pretty JSON bytes.
#[instrument(skip_all, fields(orders = document.orders.len()))]
pub fn serialize(document: &Document) -> Result<Vec<u8>> {
    let bytes = serde_json::to_vec_pretty(document)?;
    debug!(size = bytes.len(), "serialized document");
    Ok(bytes)
}

/// Parse previously serialized bytes back into a document.
pub fn parse(bytes: &[u8]) -> Result<Document> {
    serde_json::from_slice(bytes)
        .map_err(|e| MishnahError::validation(format!("invalid dataset JSON: {e}")))
}

/// Write bytes to `path`, replacing any existing file.
///
/// The bytes go to a temp sibling first and are renamed into place, so a
/// failed write never leaves a truncated dataset behind.
#[instrument(skip_all, fields(path = %path.display(), size = bytes.len()))]
pub fn write_to_file(path: &Path, bytes: &[u8]) -> Result<WriteResult> {
    let temp = temp_sibling(path)?;

    std::fs::write(&temp, bytes).map_err(|e| MishnahError::io(path, e))?;

    if let Err(e) = std::fs::rename(&temp, path) {
        let _ = std::fs::remove_file(&temp);
        return Err(MishnahError::io(path, e));
    }

    let sha256 = format!("{:x}", Sha256::digest(bytes));
    info!(path = %path.display(), size = bytes.len(), %sha256, "wrote dataset");

    Ok(WriteResult {
        path: path.to_path_buf(),
        size_bytes: bytes.len(),
        sha256,
    })
}

/// Hidden, per-call unique sibling of `path` used as the write target before rename.
fn temp_sibling(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| MishnahError::validation(format!("not a file path: {}", path.display())))?;
    Ok(path.with_file_name(format!(
        ".{}.{}.tmp",
        file_name.to_string_lossy(),
        uuid::Uuid::now_v7()
    )))
}

/// Compare the file at `path` with `expected` bytes.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn check_file(path: &Path, expected: &[u8]) -> Result<CheckOutcome> {
    let outcome = match std::fs::read(path) {
        Ok(existing) if existing == expected => CheckOutcome::UpToDate,
        Ok(_) => CheckOutcome::Stale,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => CheckOutcome::Missing,
        Err(e) => return Err(MishnahError::io(path, e)),
    };

    debug!(?outcome, "checked dataset file");
    Ok(outcome)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_embedded;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mishnah-writer-test-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn output_matches_reference_fixture() {
        let fixture = std::fs::read("../../../fixtures/json/mishnah_full.fixture.json")
            .expect("read fixture");
        let bytes = serialize(&build_embedded()).unwrap();
        assert!(bytes == fixture, "serialized output differs from fixture");
    }

    #[test]
    fn output_is_pretty_utf8_with_literal_hebrew() {
        let bytes = serialize(&build_embedded()).unwrap();
        let text = String::from_utf8(bytes).expect("utf-8");

        assert!(text.starts_with("{\n  \"Zeraim\": {\n    \"metadata\": {\n      \"order\": 1,"));
        assert!(text.contains("\"hebrewName\": \"זרעים\""));
        assert!(text.contains("\"hebrewName\": \"פרק 1\""));
        assert!(text.contains("\"Ta'anit\""));
        assert!(!text.contains("\\u"));
        assert!(text.ends_with('}'));
    }

    #[test]
    fn reserialization_is_byte_identical() {
        let bytes = serialize(&build_embedded()).unwrap();

        let typed = parse(&bytes).unwrap();
        assert_eq!(serialize(&typed).unwrap(), bytes);

        let untyped: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(serde_json::to_vec_pretty(&untyped).unwrap(), bytes);
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        let err = parse(br#"{"Zeraim": 1}"#).unwrap_err();
        assert!(err.to_string().contains("invalid dataset JSON"));
    }

    #[test]
    fn write_twice_is_byte_identical() {
        let tmp = temp_dir();
        let first = tmp.join("first.json");
        let second = tmp.join("second.json");

        let a = write_to_file(&first, &serialize(&build_embedded()).unwrap()).unwrap();
        let b = write_to_file(&second, &serialize(&build_embedded()).unwrap()).unwrap();

        assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
        assert_eq!(a.sha256, b.sha256);
        assert_eq!(a.sha256.len(), 64);
        assert_eq!(a.size_bytes, b.size_bytes);

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn write_overwrites_and_leaves_no_temp_file() {
        let tmp = temp_dir();
        let target = tmp.join("mishnah_full.json");
        std::fs::write(&target, "stale contents that are longer than the replacement").unwrap();

        let result = write_to_file(&target, b"{}").unwrap();
        assert_eq!(result.path, target);
        assert_eq!(result.size_bytes, 2);
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "{}");

        for entry in std::fs::read_dir(&tmp).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().to_string();
            assert!(!name.starts_with('.'), "temp file left behind: {name}");
        }

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn write_into_missing_directory_is_io_error() {
        let tmp = temp_dir();
        let target = tmp.join("does-not-exist").join("mishnah_full.json");

        let err = write_to_file(&target, b"{}").unwrap_err();
        match err {
            MishnahError::Io { path, .. } => assert_eq!(path, target),
            other => panic!("expected Io error, got {other:?}"),
        }

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn temp_siblings_are_unique_per_write() {
        let target = Path::new("data").join("mishnah_full.json");
        let a = temp_sibling(&target).unwrap();
        let b = temp_sibling(&target).unwrap();

        assert_ne!(a, b);
        assert_eq!(a.parent(), target.parent());
        let name = a.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with(".mishnah_full.json."));
        assert!(name.ends_with(".tmp"));
    }

    #[test]
    fn temp_sibling_rejects_non_file_path() {
        let err = temp_sibling(Path::new("..")).unwrap_err();
        assert!(err.to_string().contains("not a file path"));
    }

    #[test]
    fn check_file_outcomes() {
        let tmp = temp_dir();
        let target = tmp.join("mishnah_full.json");
        let bytes = serialize(&build_embedded()).unwrap();

        assert_eq!(check_file(&target, &bytes).unwrap(), CheckOutcome::Missing);

        std::fs::write(&target, b"{}").unwrap();
        assert_eq!(check_file(&target, &bytes).unwrap(), CheckOutcome::Stale);

        write_to_file(&target, &bytes).unwrap();
        assert_eq!(check_file(&target, &bytes).unwrap(), CheckOutcome::UpToDate);

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
