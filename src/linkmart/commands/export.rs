use crate::commands::{CmdMessage, CmdResult};
use crate::db::Database;
use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;
use chrono::Utc;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export records as CSV into `out_dir`. The record set is either the whole
/// database (pages then links) or the result of a search.
pub fn run<S: DataStore>(
    db: &Database<S>,
    query: Option<&str>,
    out_dir: &Path,
) -> Result<CmdResult> {
    let records = match query {
        Some(q) => db.search(q),
        None => db
            .pages()
            .iter()
            .cloned()
            .map(Record::Page)
            .chain(db.links().iter().cloned().map(Record::Link))
            .collect(),
    };

    if records.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("Nothing to export."));
        return Ok(res);
    }

    let filename = format!("linkmart-{}.csv", Utc::now().format("%Y-%m-%d_%H-%M-%S"));
    let path = out_dir.join(filename);
    let file = File::create(&path)?;
    write_csv(file, &records)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} record(s) to {}",
        records.len(),
        path.display()
    )));
    result.export_path = Some(path);
    Ok(result)
}

fn write_csv<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["type", "id", "title", "fullLink", "pageId", "createdAt", "visits"])?;

    for record in records {
        match record {
            Record::Page(p) => {
                let created = p.created_at.to_rfc3339();
                wtr.write_record([
                    "page",
                    p.id.as_str(),
                    p.title.as_str(),
                    "",
                    "",
                    created.as_str(),
                    "",
                ])?;
            }
            Record::Link(l) => {
                let created = l.created_at.to_rfc3339();
                let visits = l.visits.to_string();
                wtr.write_record([
                    "link",
                    l.id.as_str(),
                    "",
                    l.full_link.as_str(),
                    l.page_id.as_str(),
                    created.as_str(),
                    visits.as_str(),
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
