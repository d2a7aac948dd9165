use crate::commands::{CmdMessage, CmdResult};
use crate::db::Database;
use crate::draft::PageDraft;
use crate::error::Result;
use crate::model::Page;
use crate::store::DataStore;

/// Create a page from a draft. Never fails: malformed input is normalized
/// into a minimal valid record and every substitution is reported.
pub fn run<S: DataStore>(db: &mut Database<S>, draft: PageDraft) -> Result<CmdResult> {
    let sanitized = draft.sanitize();

    let mut result = CmdResult::default();
    for field in &sanitized.defaulted {
        result.add_message(CmdMessage::info(format!("Defaulted {}", field)));
    }

    let page = Page::new(
        sanitized.title,
        sanitized.content,
        sanitized.menu_items,
        sanitized.slider_images,
        sanitized.center_image,
        sanitized.grid_items,
    );

    result.add_message(CmdMessage::success(format!(
        "Page created ({}): {}",
        page.id, page.title
    )));
    result.affected_pages.push(page.clone());

    let report = db.insert_page(page);
    result.absorb_persist(&report);

    Ok(result)
}
