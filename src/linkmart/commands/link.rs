use crate::commands::{CmdMessage, CmdResult};
use crate::config::DEFAULT_LINK;
use crate::db::Database;
use crate::error::{LinkmartError, Result};
use crate::model::{random_suffix, Link};
use crate::store::DataStore;
use url::Url;

const SUFFIX_LEN: usize = 8;

/// Generate a shortened link for an existing page.
pub fn run<S: DataStore>(
    db: &mut Database<S>,
    default_link: &str,
    page_id: &str,
) -> Result<CmdResult> {
    if db.find_page(page_id).is_none() {
        return Err(LinkmartError::PageNotFound(page_id.to_string()));
    }

    let full_link = format!("{}/{}", base_url(default_link), random_suffix(SUFFIX_LEN));
    let link = Link::new(page_id.to_string(), full_link.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Link generated: {}", full_link)));
    result.affected_links.push(link.clone());

    let report = db.insert_link(link);
    result.absorb_persist(&report);

    Ok(result)
}

// An empty or unparsable configured base must still yield a well-formed URL.
fn base_url(configured: &str) -> String {
    let trimmed = configured.trim();
    if trimmed.is_empty() || Url::parse(trimmed).is_err() {
        return DEFAULT_LINK.to_string();
    }
    trimmed.trim_end_matches('/').to_string()
}
