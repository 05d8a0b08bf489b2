//! Dated snapshots: the static archive and local `.json` files.
//!
//! Both use the [`Snapshot`] layout (`{"states": [...]}`).

use std::path::Path;

use chrono::NaiveDate;
use covid19mx_source_models::Snapshot;

use crate::http::send_text;
use crate::SourceError;

/// Builds the archive URL of the snapshot for `date`
/// (`<base>/<YYYY-MM-DD>.json`).
#[must_use]
pub fn snapshot_url(base: &str, date: NaiveDate) -> String {
    let separator = if base.ends_with('/') { "" } else { "/" };
    format!("{base}{separator}{}.json", date.format("%Y-%m-%d"))
}

/// Downloads and decodes a snapshot.
///
/// # Errors
///
/// Returns [`SourceError`] if the request fails or the body is not a
/// snapshot.
pub async fn fetch_snapshot(client: &reqwest::Client, url: &str) -> Result<Snapshot, SourceError> {
    log::info!("Fetching snapshot from {url}");
    let body = send_text(client.get(url)).await?;
    decode_snapshot(&body)
}

/// Reads a snapshot from a local file.
///
/// # Errors
///
/// Returns [`SourceError`] if the file cannot be read or decoded.
pub fn read_snapshot(path: &Path) -> Result<Snapshot, SourceError> {
    log::info!("Reading snapshot from {}", path.display());
    let body = std::fs::read_to_string(path)?;
    decode_snapshot(&body)
}

/// Decodes a snapshot document.
///
/// # Errors
///
/// Returns [`SourceError::Json`] if the document is malformed.
pub fn decode_snapshot(body: &str) -> Result<Snapshot, SourceError> {
    let snapshot: Snapshot = serde_json::from_str(body)?;
    log::debug!("Snapshot with {} state rows", snapshot.states.len());
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_dated_url() {
        let date = NaiveDate::from_ymd_opt(2020, 4, 19).unwrap();
        assert_eq!(
            snapshot_url("https://example.org/data/", date),
            "https://example.org/data/2020-04-19.json"
        );
        assert_eq!(
            snapshot_url("https://example.org/data", date),
            "https://example.org/data/2020-04-19.json"
        );
    }

    #[test]
    fn reads_snapshot_file() {
        let path = std::env::temp_dir().join(format!(
            "covid19mx-snapshot-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{"states":[{"name":"Colima","positive":3,"negative":9,"suspect":1,"deaths":0,"attack_rate":0.42}]}"#,
        )
        .unwrap();

        let snapshot = read_snapshot(&path);
        std::fs::remove_file(&path).ok();

        let snapshot = snapshot.unwrap();
        assert_eq!(snapshot.states.len(), 1);
        assert_eq!(snapshot.states[0].name, "Colima");
        assert_eq!(snapshot.states[0].counts.negative, 9);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_snapshot(Path::new("/nonexistent/covid19mx/2020-04-19.json")).unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }

    #[test]
    fn malformed_snapshot_is_json_error() {
        assert!(matches!(
            decode_snapshot(r#"{"estados": []}"#),
            Err(SourceError::Json(_))
        ));
    }
}
