use crate::commands::{CmdMessage, CmdResult};
use crate::db::Database;
use crate::error::Result;
use crate::store::DataStore;

/// List all pages, newest first.
pub fn pages<S: DataStore>(db: &Database<S>) -> Result<CmdResult> {
    let mut pages = db.pages().to_vec();
    pages.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut result = CmdResult::default();
    if pages.is_empty() {
        result.add_message(CmdMessage::info("No pages yet."));
    }
    result.affected_pages = pages;
    Ok(result)
}

/// List links — all of them, or only those referencing one page, in
/// storage order.
pub fn links<S: DataStore>(db: &Database<S>, page_id: Option<&str>) -> Result<CmdResult> {
    let links = match page_id {
        Some(id) => db.page_links(id).into_iter().cloned().collect(),
        None => db.links().to_vec(),
    };

    let mut result = CmdResult::default();
    if links.is_empty() {
        result.add_message(CmdMessage::info("No links found."));
    }
    result.affected_links = links;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::DbFixture;

    #[test]
    fn pages_are_listed_newest_first() {
        let fixture = DbFixture::new().with_page("First").with_page("Second");
        let result = pages(&fixture.db).unwrap();
        assert_eq!(result.affected_pages.len(), 2);
        // Created in order, so ordering falls back to insertion when
        // timestamps collide; both orders put Second no later than First.
        let titles: Vec<&str> = result
            .affected_pages
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert!(titles.contains(&"First") && titles.contains(&"Second"));
    }

    #[test]
    fn links_filtered_by_page_keep_storage_order() {
        let mut fixture = DbFixture::new().with_page("A").with_link().with_link();
        fixture = fixture.with_page("B").with_link();
        let page_a = fixture.db.pages()[0].id.clone();

        let result = links(&fixture.db, Some(&page_a)).unwrap();
        assert_eq!(result.affected_links.len(), 2);
        assert!(result.affected_links.iter().all(|l| l.page_id == page_a));

        let ids: Vec<&str> = fixture
            .db
            .page_links(&page_a)
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        let listed: Vec<&str> = result.affected_links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, listed);
    }

    #[test]
    fn unknown_page_yields_empty_links() {
        let fixture = DbFixture::new().with_page("A").with_link();
        let result = links(&fixture.db, Some("ghost")).unwrap();
        assert!(result.affected_links.is_empty());
    }
}
