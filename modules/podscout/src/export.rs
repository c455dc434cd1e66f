//! CSV export of the merged result set.

use std::path::Path;

use podscout_common::EpisodeRecord;
use thiserror::Error;
use tracing::info;

/// Fixed column header of the exported file.
const HEADER: [&str; 5] = ["Podcast Name", "Episode", "Link", "Guest Name", "Email"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write records to `dest`, overwriting any existing file. Absent optional
/// fields become empty cells. An export failure fails the run as a whole;
/// there is no partial-export recovery.
pub fn export_csv(records: &[EpisodeRecord], dest: &Path) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(dest)?;
    writer.write_record(HEADER)?;

    for record in records {
        writer.write_record([
            record.podcast_name.as_str(),
            record.episode_title.as_str(),
            record.link.as_str(),
            record.guest_name.as_deref().unwrap_or(""),
            record.guest_email.as_deref().unwrap_or(""),
        ])?;
    }

    writer.flush()?;
    info!(path = %dest.display(), rows = records.len(), "Export complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(episode: &str, guest: Option<&str>, email: Option<&str>) -> EpisodeRecord {
        EpisodeRecord {
            podcast_name: "Tech Weekly".to_string(),
            episode_title: episode.to_string(),
            link: format!("https://techweekly.fm/{episode}"),
            guest_name: guest.map(String::from),
            guest_email: email.map(String::from),
        }
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![
            record("ep1", Some("Jane Doe"), Some("jane@doe.dev")),
            record("ep2", None, None),
        ];

        export_csv(&records, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(HEADER.to_vec())
        );

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "ep1");
        assert_eq!(&rows[0][3], "Jane Doe");
        assert_eq!(&rows[0][4], "jane@doe.dev");
        // Absent optionals come back as empty cells.
        assert_eq!(&rows[1][3], "");
        assert_eq!(&rows[1][4], "");
    }

    #[test]
    fn test_empty_input_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        export_csv(&[], &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.headers().unwrap().len(), 5);
        assert_eq!(reader.records().count(), 0);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        export_csv(&[record("old", None, None)], &path).unwrap();
        export_csv(&[record("new", None, None)], &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "new");
    }

    #[test]
    fn test_delimiter_in_cell_is_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut with_comma = record("ep1", None, None);
        with_comma.episode_title = "Rust, async, and you".to_string();

        export_csv(std::slice::from_ref(&with_comma), &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][1], "Rust, async, and you");
    }

    #[test]
    fn test_unwritable_destination_fails() {
        let err = export_csv(&[], Path::new("/nonexistent-dir/out.csv"));
        assert!(err.is_err());
    }
}
