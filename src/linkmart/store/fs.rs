use super::DataStore;
use crate::error::{LinkmartError, Result};
use crate::model::{Link, Page};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const PAGES_FILE: &str = "pages.json";
const LINKS_FILE: &str = "links.json";

/// File-backed storage: one JSON array per collection inside `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load_blob<T: DeserializeOwned>(&self, name: &str) -> Result<Option<Vec<T>>> {
        let path = self.root.join(name);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(LinkmartError::Io)?;
        let records = serde_json::from_str(&content).map_err(LinkmartError::Serialization)?;
        Ok(Some(records))
    }

    fn save_blob<T: Serialize>(&self, name: &str, records: &[T]) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(LinkmartError::Io)?;
        }
        let content = serde_json::to_string_pretty(records).map_err(LinkmartError::Serialization)?;
        fs::write(self.root.join(name), content).map_err(LinkmartError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_pages(&self) -> Result<Option<Vec<Page>>> {
        self.load_blob(PAGES_FILE)
    }

    fn save_pages(&mut self, pages: &[Page]) -> Result<()> {
        self.save_blob(PAGES_FILE, pages)
    }

    fn load_links(&self) -> Result<Option<Vec<Link>>> {
        self.load_blob(LINKS_FILE)
    }

    fn save_links(&mut self, links: &[Link]) -> Result<()> {
        self.save_blob(LINKS_FILE, links)
    }
}
