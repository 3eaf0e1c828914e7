use log::{debug, warn};
use rustc_hash::FxHashSet as HashSet;
use std::path::{Path, PathBuf};

use crate::data_types::reference_panel::{PanelEntry, ReferencePanel};

#[derive(thiserror::Error, Debug)]
pub enum PanelError {
    #[error("cannot open reference panel {path:?}: {error}")]
    InputNotFound { path: PathBuf, error: std::io::Error },
    #[error("reference panel line {line} has {fields} field(s), expected at least 2")]
    MalformedRecord { line: u64, fields: usize },
    #[error("error while reading reference panel {path:?}: {error}")]
    Io { path: PathBuf, error: csv::Error }
}

/// Loads a reference panel from a TSV file with no header.
/// Each line must have an accession and a reference allele, any further columns are ignored.
/// Blank lines have no fields, so they are malformed as well.
/// # Arguments
/// * `filename` - the panel TSV
/// # Errors
/// * if the file cannot be opened
/// * if any line (including a blank one) has fewer than 2 fields
pub fn load_reference_panel(filename: &Path) -> Result<ReferencePanel, PanelError> {
    let content = std::fs::read(filename)
        .map_err(|error| PanelError::InputNotFound { path: filename.to_path_buf(), error })?;

    // the csv reader silently skips empty lines, so those are checked up front
    if let Some(line) = first_blank_line(&content) {
        return Err(PanelError::MalformedRecord { line, fields: 0 });
    }

    let mut tsv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true) // rows can have different lengths, we check it ourselves below
        .from_reader(content.as_slice());

    let mut entries = vec![];
    let mut seen: HashSet<String> = Default::default();
    for result in tsv_reader.records() {
        let row = result.map_err(|error| PanelError::Io { path: filename.to_path_buf(), error })?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let (accession, raw_allele) = match (row.get(0), row.get(1)) {
            (Some(accession), Some(raw_allele)) => (accession, raw_allele),
            _ => return Err(PanelError::MalformedRecord { line, fields: row.len() })
        };

        let entry = PanelEntry::new(accession.to_string(), raw_allele);
        if entry.is_unresolved() {
            debug!("Reference allele {raw_allele:?} for {accession} is too long, marking as unresolved");
        }
        if !seen.insert(accession.to_string()) {
            warn!("Duplicate accession {accession} on line {line} of reference panel, later entries shadow earlier ones in lookups");
        }
        entries.push(entry);
    }

    debug!("Loaded {} reference loci from {filename:?}", entries.len());
    Ok(ReferencePanel::new(entries))
}

/// Returns the 1-based number of the first line that is empty or only `\r`.
/// The empty remainder after a final newline is not a line.
fn first_blank_line(content: &[u8]) -> Option<u64> {
    let num_lines = content.split(|&b| b == b'\n').count()
        - usize::from(content.is_empty() || content.ends_with(b"\n"));
    content.split(|&b| b == b'\n')
        .take(num_lines)
        .position(|line| line.strip_suffix(b"\r").unwrap_or(line).is_empty())
        .map(|i| i as u64 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_panel(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_panel() {
        let file = write_panel("rs1\tA\nrs2\tGG\nrs3\tACG\n");
        let panel = load_reference_panel(file.path()).unwrap();
        let pairs: Vec<(&str, &str)> = panel.iter().collect();
        assert_eq!(pairs, vec![
            ("rs1", "A"),
            ("rs2", "GG"),
            ("rs3", "-")
        ]);
    }

    #[test]
    fn test_extra_columns_and_duplicates() {
        let file = write_panel("rs1\tA\tcomment\nrs2\tC\nrs1\tT\n");
        let panel = load_reference_panel(file.path()).unwrap();
        assert_eq!(panel.len(), 3);
        assert_eq!(panel.entries()[0].reference_allele(), "A");
        assert_eq!(panel.to_lookup().get("rs1").map(|s| s.as_str()), Some("T"));
    }

    #[test]
    fn test_empty_panel() {
        let file = write_panel("");
        let panel = load_reference_panel(file.path()).unwrap();
        assert!(panel.is_empty());
    }

    #[test]
    fn test_malformed_record() {
        let file = write_panel("rs1\tA\nrs2\nrs3\tC\n");
        let result = load_reference_panel(file.path());
        match result {
            Err(PanelError::MalformedRecord { line, fields }) => {
                assert_eq!(line, 2);
                assert_eq!(fields, 1);
            },
            other => panic!("expected MalformedRecord, got {other:?}")
        }
    }

    #[test]
    fn test_blank_lines() {
        // blank line in the middle
        let file = write_panel("rs1\tA\n\nrs2\tC\n");
        let result = load_reference_panel(file.path());
        assert!(matches!(result, Err(PanelError::MalformedRecord { line: 2, fields: 0 })), "{result:?}");

        // blank line at the end
        let file = write_panel("rs1\tA\nrs2\tC\n\n");
        let result = load_reference_panel(file.path());
        assert!(matches!(result, Err(PanelError::MalformedRecord { line: 3, fields: 0 })), "{result:?}");

        // blank line at the start
        let file = write_panel("\nrs1\tA\n");
        let result = load_reference_panel(file.path());
        assert!(matches!(result, Err(PanelError::MalformedRecord { line: 1, fields: 0 })), "{result:?}");

        // a missing final newline and CRLF terminators are both fine
        let file = write_panel("rs1\tA\r\nrs2\tC");
        assert_eq!(load_reference_panel(file.path()).unwrap().len(), 2);
    }

    #[test]
    fn test_first_blank_line() {
        assert_eq!(first_blank_line(b""), None);
        assert_eq!(first_blank_line(b"rs1\tA"), None);
        assert_eq!(first_blank_line(b"rs1\tA\n"), None);
        assert_eq!(first_blank_line(b"\n"), Some(1));
        assert_eq!(first_blank_line(b"rs1\tA\r\n\r\nrs2\tC"), Some(2));
        // whitespace-only lines are not blank, the csv reader sees one field there
        assert_eq!(first_blank_line(b"rs1\tA\n \n"), None);
    }

    #[test]
    fn test_missing_panel() {
        let folder = tempfile::tempdir().unwrap();
        let missing = folder.path().join("missing.tsv");
        let result = load_reference_panel(&missing);
        match result {
            Err(PanelError::InputNotFound { path, error }) => {
                assert_eq!(path, missing);
                assert_eq!(error.kind(), std::io::ErrorKind::NotFound);
            },
            other => panic!("expected InputNotFound, got {other:?}")
        }
    }
}
