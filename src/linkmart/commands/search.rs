use crate::commands::{CmdMessage, CmdResult};
use crate::db::Database;
use crate::error::Result;
use crate::store::DataStore;

/// Search pages and links by substring. Matching pages come first, then
/// matching links; a blank query matches nothing.
pub fn run<S: DataStore>(db: &Database<S>, query: &str) -> Result<CmdResult> {
    let records = db.search(query);

    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info(format!("No results for \"{}\".", query)));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} result(s) for \"{}\".",
            records.len(),
            query
        )));
    }

    Ok(result.with_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::store::memory::fixtures::DbFixture;

    #[test]
    fn matches_page_title_and_id() {
        let fixture = DbFixture::new().with_page("Fantasy Books").with_page("Cooking");
        let result = run(&fixture.db, "fantasy").unwrap();
        assert_eq!(result.records.len(), 1);
        assert!(matches!(&result.records[0], Record::Page(p) if p.title == "Fantasy Books"));

        let by_id = fixture.db.pages()[1].id.clone();
        let result = run(&fixture.db, &by_id).unwrap();
        assert_eq!(result.records.len(), 1);
    }

    #[test]
    fn matches_link_url() {
        let fixture = DbFixture::new().with_page("Test").with_link();
        let result = run(&fixture.db, "example.com").unwrap();
        assert_eq!(result.records.len(), 1);
        assert!(matches!(result.records[0], Record::Link(_)));
    }

    #[test]
    fn pages_come_before_links() {
        let fixture = DbFixture::new().with_page("example page").with_link();
        let result = run(&fixture.db, "example").unwrap();
        assert_eq!(result.records.len(), 2);
        assert!(matches!(result.records[0], Record::Page(_)));
        assert!(matches!(result.records[1], Record::Link(_)));
    }

    #[test]
    fn empty_query_returns_no_records() {
        let fixture = DbFixture::new().with_pages(3);
        let result = run(&fixture.db, "").unwrap();
        assert!(result.records.is_empty());
    }
}
