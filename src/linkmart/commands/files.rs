use crate::commands::{CmdMessage, CmdResult, LinkmartPaths};
use crate::error::Result;
use crate::ingest;

/// Load the text-file database view: every manifest-listed file under
/// `datafiles/txt`, parsed into label/value rows.
pub fn run(paths: &LinkmartPaths) -> Result<CmdResult> {
    let tables = ingest::load_dir(&paths.txt_dir());

    let mut result = CmdResult::default();
    if tables.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No text files found (manifest: {}).",
            paths.txt_dir().join(ingest::MANIFEST).display()
        )));
    }

    Ok(result.with_tables(tables))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_manifest_listed_files() {
        let home = TempDir::new().unwrap();
        let paths = LinkmartPaths::new(home.path().to_path_buf());
        let txt = paths.txt_dir();
        fs::create_dir_all(&txt).unwrap();
        fs::write(txt.join("files.json"), r#"["visit1.txt"]"#).unwrap();
        fs::write(txt.join("visit1.txt"), "Country: Canada\nPlatform: Linux").unwrap();

        let result = run(&paths).unwrap();
        assert_eq!(result.tables.len(), 1);
        assert_eq!(result.tables[0].rows.len(), 2);
    }

    #[test]
    fn missing_manifest_is_empty_not_fatal() {
        let home = TempDir::new().unwrap();
        let paths = LinkmartPaths::new(home.path().to_path_buf());
        let result = run(&paths).unwrap();
        assert!(result.tables.is_empty());
        assert!(!result.messages.is_empty());
    }
}
