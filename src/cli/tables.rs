//! Input/output tables
//!
//! Reads the uploaded address table and writes the downloadable result
//! artifacts. Comma-separated, UTF-8, header row required.

use std::path::Path;

use crate::core::{ExecutiveLead, OutreachMessage, ProspectError, Result};

/// Required column in the input table
const URL_COLUMN: &str = "URL";

/// Read the profile addresses from the input table.
///
/// The table must carry a `URL` column; blank cells are skipped.
pub fn read_url_column(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| ProspectError::input(format!("cannot read {}: {}", path.display(), e)))?;

    let headers = reader.headers()?.clone();
    let url_index = headers
        .iter()
        .position(|h| h == URL_COLUMN)
        .ok_or_else(|| ProspectError::input(format!("CSV needs a column named '{}'", URL_COLUMN)))?;

    let mut urls = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(url) = record.get(url_index) {
            let url = url.trim();
            if !url.is_empty() {
                urls.push(url.to_string());
            }
        }
    }

    Ok(urls)
}

/// Write the generated messages artifact
pub fn write_messages(path: &Path, messages: &[OutreachMessage]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["LinkedIn URL", "Message"])?;
    for row in messages {
        writer.write_record([row.source_url.as_str(), row.message.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the executive-leads artifact
pub fn write_leads(path: &Path, leads: &[ExecutiveLead]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Title", "LinkedIn URL"])?;
    for lead in leads {
        writer.write_record([lead.title.as_str(), lead.profile_url.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("prospect-test-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_read_url_column() {
        let path = temp_path("input.csv");
        fs::write(&path, "Name,URL\nJane,in/janedoe\nJohn,\n,in/johnsmith\n").unwrap();

        let urls = read_url_column(&path).unwrap();
        assert_eq!(urls, vec!["in/janedoe", "in/johnsmith"]);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_url_column() {
        let path = temp_path("bad-input.csv");
        fs::write(&path, "Name,Link\nJane,in/janedoe\n").unwrap();

        let err = read_url_column(&path).unwrap_err();
        assert!(matches!(err, ProspectError::Input(_)));
        assert!(err.to_string().contains("URL"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_messages_round_trip() {
        let path = temp_path("messages.csv");
        let rows = vec![OutreachMessage {
            source_url: "in/janedoe".into(),
            message: "Hi Jane,\n\nLine with, comma".into(),
        }];
        write_messages(&path, &rows).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(vec!["LinkedIn URL", "Message"])
        );
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.get(0), Some("in/janedoe"));
        assert_eq!(record.get(1), Some("Hi Jane,\n\nLine with, comma"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_leads_header() {
        let path = temp_path("execs.csv");
        write_leads(&path, &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Title,LinkedIn URL"));

        fs::remove_file(&path).ok();
    }
}
