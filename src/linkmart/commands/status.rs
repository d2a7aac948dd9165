use crate::commands::{CmdResult, Stats};
use crate::db::Database;
use crate::error::Result;
use crate::store::DataStore;

/// Collection totals: pages, links, and the sum of all visits.
pub fn run<S: DataStore>(db: &Database<S>) -> Result<CmdResult> {
    let stats = Stats {
        pages: db.pages().len(),
        links: db.links().len(),
        visits: db.links().iter().map(|l| l.visits).sum(),
    };

    let mut result = CmdResult::default();
    result.stats = Some(stats);
    Ok(result)
}
