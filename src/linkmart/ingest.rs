//! Read-only ingestion of colon-delimited text files.
//!
//! A data directory carries a manifest (`files.json`, a JSON array of file
//! names) next to the files it lists. Loading is one-shot and fails soft:
//! a file that cannot be read contributes an empty row set, and a missing
//! or unreadable manifest yields an empty result. Nothing here mutates the
//! underlying files.

use std::fs;
use std::path::Path;

pub const MANIFEST: &str = "files.json";

/// One `label: value` line of a text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPair {
    pub label: String,
    pub value: String,
}

/// All parsed rows of one listed file, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRows {
    pub file_name: String,
    pub rows: Vec<RowPair>,
}

/// Load every file listed in the directory's manifest, in manifest order.
pub fn load_dir(dir: &Path) -> Vec<FileRows> {
    let names = match read_manifest(dir) {
        Some(names) => names,
        None => return Vec::new(),
    };

    names
        .into_iter()
        .map(|file_name| {
            let rows = fs::read_to_string(dir.join(&file_name))
                .map(|text| parse_rows(&text))
                .unwrap_or_default();
            FileRows { file_name, rows }
        })
        .collect()
}

/// The manifest's file names, for callers that need the listing itself
/// (e.g. registering page files). Empty when absent or unreadable.
pub fn list_manifest(dir: &Path) -> Vec<String> {
    read_manifest(dir).unwrap_or_default()
}

fn read_manifest(dir: &Path) -> Option<Vec<String>> {
    let content = fs::read_to_string(dir.join(MANIFEST)).ok()?;
    serde_json::from_str(&content).ok()
}

/// Split text into `{label, value}` pairs: one pair per line containing a
/// colon, split on the first colon, both sides trimmed. Lines without a
/// colon, and pairs where both sides are empty, are dropped.
pub fn parse_rows(text: &str) -> Vec<RowPair> {
    text.lines()
        .filter_map(|line| {
            let (label, value) = line.split_once(':')?;
            let label = label.trim();
            let value = value.trim();
            if label.is_empty() && value.is_empty() {
                return None;
            }
            Some(RowPair {
                label: label.to_string(),
                value: value.to_string(),
            })
        })
        .collect()
}
