use crate::config::LinkmartConfig;
use crate::db::PersistReport;
use crate::ingest::FileRows;
use crate::model::{Link, Page, Record};
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod export;
pub mod files;
pub mod link;
pub mod list;
pub mod register;
pub mod search;
pub mod session;
pub mod status;
pub mod visit;

/// Well-known locations inside the linkmart home directory.
#[derive(Debug, Clone)]
pub struct LinkmartPaths {
    pub data: PathBuf,
}

impl LinkmartPaths {
    pub fn new(data: PathBuf) -> Self {
        Self { data }
    }

    /// Root of the static data files (`datafiles/`).
    pub fn datafiles(&self) -> PathBuf {
        self.data.join("datafiles")
    }

    /// Colon-delimited text files plus their manifest.
    pub fn txt_dir(&self) -> PathBuf {
        self.datafiles().join("txt")
    }

    /// Static page files plus their manifest.
    pub fn pages_dir(&self) -> PathBuf {
        self.datafiles().join("pages")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, content)
    }
}

/// Collection totals, for the status command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub pages: usize,
    pub links: usize,
    pub visits: u64,
}

/// Structured result every command returns; the CLI decides how to render it.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_pages: Vec<Page>,
    pub affected_links: Vec<Link>,
    pub records: Vec<Record>,
    pub tables: Vec<FileRows>,
    pub export_path: Option<PathBuf>,
    pub config: Option<LinkmartConfig>,
    pub stats: Option<Stats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// Turn swallowed persistence failures into user-visible warnings.
    pub fn absorb_persist(&mut self, report: &PersistReport) {
        for warning in &report.warnings {
            self.messages.push(CmdMessage::warning(warning.clone()));
        }
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    pub fn with_tables(mut self, tables: Vec<FileRows>) -> Self {
        self.tables = tables;
        self
    }

    pub fn with_config(mut self, config: LinkmartConfig) -> Self {
        self.config = Some(config);
        self
    }
}
