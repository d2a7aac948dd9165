use crate::commands::{CmdMessage, CmdResult, LinkmartPaths};
use crate::db::Database;
use crate::error::{LinkmartError, Result};
use crate::ingest;
use crate::model::Page;
use crate::store::DataStore;

/// Register a static page file as a file-backed page. The file must be
/// listed in the pages manifest; registering does not copy or modify it.
pub fn run<S: DataStore>(
    db: &mut Database<S>,
    paths: &LinkmartPaths,
    file_name: &str,
) -> Result<CmdResult> {
    let listed = ingest::list_manifest(&paths.pages_dir());
    if !listed.iter().any(|f| f == file_name) {
        return Err(LinkmartError::Api(format!(
            "{} is not listed in the pages manifest; add it to {} first",
            file_name,
            paths.pages_dir().join(ingest::MANIFEST).display()
        )));
    }

    let title = file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name)
        .to_string();
    let file_path = format!("/datafiles/pages/{}", file_name);
    let page = Page::file_backed(title, file_path);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "File page registered ({}): {}",
        page.id, file_name
    )));
    result.affected_pages.push(page.clone());

    let report = db.insert_page(page);
    result.absorb_persist(&report);

    Ok(result)
}
