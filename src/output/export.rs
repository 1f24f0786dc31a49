use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;
use tracing::info;

use super::formatter::format_report;
use crate::pipeline::PipelineResult;
use crate::records::ScoredUser;

/// Serialize accepted users as a pretty-printed JSON array
pub fn export_json(users: &[ScoredUser]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(users).context("Failed to serialize users")?;
    json.push('\n');
    Ok(json)
}

/// Write the JSON export atomically
///
/// Uses atomic-write-file so a failed run never leaves a truncated file behind.
pub fn write_json(path: &Path, users: &[ScoredUser]) -> Result<()> {
    let json = export_json(users)?;
    write_atomically(path, &json)?;
    info!(path = %path.display(), users = users.len(), "wrote JSON export");
    Ok(())
}

/// Write the text report atomically
pub fn write_report(path: &Path, result: &PipelineResult) -> Result<()> {
    write_atomically(path, &format_report(result))?;
    info!(path = %path.display(), "wrote report");
    Ok(())
}

fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    file.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    // Commit the write atomically
    file.commit()
        .with_context(|| format!("Failed to save {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::UserRecord;
    use std::fs;
    use tempfile::TempDir;

    fn sample_users() -> Vec<ScoredUser> {
        vec![
            ScoredUser {
                record: UserRecord {
                    user_id: "Alice".to_string(),
                    age: 25,
                    purchases: 15,
                    visits: 30,
                },
                score: 300,
            },
            ScoredUser {
                record: UserRecord {
                    user_id: "Bob".to_string(),
                    age: 30,
                    purchases: 10,
                    visits: 20,
                },
                score: 200,
            },
        ]
    }

    #[test]
    fn test_export_valid_json() {
        let json = export_json(&sample_users()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed,
            serde_json::json!([
                {"user_id": "Alice", "age": 25, "purchases": 15, "visits": 30, "score": 300},
                {"user_id": "Bob", "age": 30, "purchases": 10, "visits": 20, "score": 200}
            ])
        );
    }

    #[test]
    fn test_export_keeps_key_order() {
        let json = export_json(&sample_users()[..1]).unwrap();
        let positions: Vec<usize> = ["\"user_id\"", "\"age\"", "\"purchases\"", "\"visits\"", "\"score\""]
            .iter()
            .map(|key| json.find(key).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_export_empty_list() {
        let json = export_json(&[]).unwrap();
        assert_eq!(json.trim(), "[]");
    }

    #[test]
    fn test_write_json_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("new_output.json");
        assert!(!path.exists());

        write_json(&path, &sample_users()).unwrap();

        let loaded: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_write_report_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("new_report.txt");
        assert!(!path.exists());

        let result = PipelineResult {
            accepted: sample_users(),
            ..Default::default()
        };
        write_report(&path, &result).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("User: Alice, Age: 25, Score: 300"));
        assert!(content.contains("Total users: 2"));
        assert!(content.contains("Average score: 250.00"));
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.json");
        fs::write(&path, "stale").unwrap();

        write_json(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("report.txt");
        assert!(write_report(&path, &PipelineResult::default()).is_err());
    }
}
