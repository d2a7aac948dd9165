use crate::commands::{CmdMessage, CmdResult};
use crate::db::Database;
use crate::error::Result;
use crate::store::DataStore;

/// Record one visit against a link. Unknown links change nothing.
pub fn run<S: DataStore>(db: &mut Database<S>, link_id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match db.record_visit(link_id) {
        Some(report) => {
            // Present after record_visit returned Some.
            if let Some(link) = db.find_link(link_id) {
                result.add_message(CmdMessage::success(format!(
                    "Visit recorded for {} (page {}, {} total)",
                    link.id, link.page_id, link.visits
                )));
                result.affected_links.push(link.clone());
            }
            result.absorb_persist(&report);
        }
        None => {
            result.add_message(CmdMessage::info(format!(
                "Link not found: {} (nothing recorded)",
                link_id
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::DbFixture;

    #[test]
    fn increments_by_exactly_one() {
        let mut fixture = DbFixture::new().with_page("Test").with_link();
        let link_id = fixture.db.links()[0].id.clone();

        run(&mut fixture.db, &link_id).unwrap();
        assert_eq!(fixture.db.find_link(&link_id).unwrap().visits, 1);

        run(&mut fixture.db, &link_id).unwrap();
        assert_eq!(fixture.db.find_link(&link_id).unwrap().visits, 2);
    }

    #[test]
    fn unknown_link_changes_nothing() {
        let mut fixture = DbFixture::new().with_page("Test").with_link();
        let result = run(&mut fixture.db, "ghost").unwrap();
        assert!(result.affected_links.is_empty());
        assert_eq!(fixture.db.links()[0].visits, 0);
    }
}
