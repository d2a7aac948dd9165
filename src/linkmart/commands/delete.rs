use crate::commands::{CmdMessage, CmdResult};
use crate::db::Database;
use crate::error::Result;
use crate::store::DataStore;

/// Delete a page and, by cascade, every link referencing it. A supplied
/// password must match the admin secret; a wrong one refuses the deletion
/// without touching any state.
pub fn page<S: DataStore>(
    db: &mut Database<S>,
    admin_password: &str,
    id: &str,
    password: Option<&str>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if let Some(supplied) = password {
        if supplied != admin_password {
            result.add_message(CmdMessage::error("Incorrect password, page not deleted."));
            return Ok(result);
        }
    }

    match db.remove_page(id) {
        Some(removal) => {
            result.add_message(CmdMessage::success(format!(
                "Page deleted ({}): {} ({} associated links removed)",
                id, removal.page.title, removal.links_removed
            )));
            result.affected_pages.push(removal.page);
            result.absorb_persist(&removal.report);
        }
        None => {
            result.add_message(CmdMessage::info(format!("Page not found: {}", id)));
        }
    }

    Ok(result)
}

/// Delete a single link, unconditionally.
pub fn link<S: DataStore>(db: &mut Database<S>, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match db.remove_link(id) {
        Some(report) => {
            result.add_message(CmdMessage::success(format!("Link deleted: {}", id)));
            result.absorb_persist(&report);
        }
        None => {
            result.add_message(CmdMessage::info(format!("Link not found: {}", id)));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::DbFixture;

    const ADMIN: &str = "admin123";

    #[test]
    fn wrong_password_refuses_and_leaves_state_unchanged() {
        let mut fixture = DbFixture::new().with_page("Test").with_link();
        let page_id = fixture.db.pages()[0].id.clone();

        let result = page(&mut fixture.db, ADMIN, &page_id, Some("nope")).unwrap();

        assert!(result.affected_pages.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert_eq!(fixture.db.pages().len(), 1);
        assert_eq!(fixture.db.links().len(), 1);
    }

    #[test]
    fn correct_password_deletes_with_cascade() {
        let mut fixture = DbFixture::new().with_page("Test").with_link().with_link();
        let page_id = fixture.db.pages()[0].id.clone();

        let result = page(&mut fixture.db, ADMIN, &page_id, Some(ADMIN)).unwrap();

        assert_eq!(result.affected_pages.len(), 1);
        assert!(fixture.db.pages().is_empty());
        assert!(fixture.db.page_links(&page_id).is_empty());
        assert!(fixture.db.links().is_empty());
    }

    #[test]
    fn no_password_skips_the_check() {
        let mut fixture = DbFixture::new().with_page("Test");
        let page_id = fixture.db.pages()[0].id.clone();

        let result = page(&mut fixture.db, ADMIN, &page_id, None).unwrap();
        assert_eq!(result.affected_pages.len(), 1);
        assert!(fixture.db.pages().is_empty());
    }

    #[test]
    fn missing_page_is_a_noop() {
        let mut fixture = DbFixture::new().with_page("Test");
        let result = page(&mut fixture.db, ADMIN, "ghost", None).unwrap();
        assert!(result.affected_pages.is_empty());
        assert_eq!(fixture.db.pages().len(), 1);
    }

    #[test]
    fn link_deletion_is_unconditional() {
        let mut fixture = DbFixture::new().with_page("Test").with_link();
        let link_id = fixture.db.links()[0].id.clone();

        link(&mut fixture.db, &link_id).unwrap();
        assert!(fixture.db.links().is_empty());
        // The page itself is untouched.
        assert_eq!(fixture.db.pages().len(), 1);
    }
}
