//! Canonical in-memory state for pages and links, mirrored to a
//! [`DataStore`] after every mutation.
//!
//! The database is the single owner of both collections. Mutations are
//! synchronous; persistence is fire-and-forget — a failed write keeps the
//! in-memory change and comes back as a warning on the returned report, so
//! in-memory and persisted state can diverge. Deleting a page always
//! cascades to its links here, at the lowest level that can mutate the
//! collections, so no caller can leave dangling links behind.

use crate::model::{GridItem, Link, MenuItem, Page, Record};
use crate::store::DataStore;

/// Which collection changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Pages,
    Links,
}

/// Callback invoked after every mutation, for UI layers to re-render on.
pub type ChangeListener = Box<dyn FnMut(Change)>;

/// Outcome of the persistence step of a mutation. Warnings are non-fatal:
/// the in-memory mutation has already happened.
#[derive(Debug, Default)]
pub struct PersistReport {
    pub warnings: Vec<String>,
}

impl PersistReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Result of removing a page: the page itself and how many links the
/// cascade took with it.
#[derive(Debug)]
pub struct PageRemoval {
    pub page: Page,
    pub links_removed: usize,
    pub report: PersistReport,
}

pub struct Database<S: DataStore> {
    store: S,
    pages: Vec<Page>,
    links: Vec<Link>,
    listeners: Vec<ChangeListener>,
}

impl<S: DataStore> Database<S> {
    /// Load both collections from the store. A missing or unreadable blob
    /// falls back to the built-in seed dataset.
    pub fn open(store: S) -> Self {
        let pages = match store.load_pages() {
            Ok(Some(pages)) => pages,
            Ok(None) | Err(_) => seed_pages(),
        };
        let links = match store.load_links() {
            Ok(Some(links)) => links,
            Ok(None) | Err(_) => seed_links(),
        };
        Self {
            store,
            pages,
            links,
            listeners: Vec::new(),
        }
    }

    /// An empty database over the given store, skipping the seed dataset.
    pub fn open_empty(store: S) -> Self {
        Self {
            store,
            pages: Vec::new(),
            links: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn on_change(&mut self, listener: impl FnMut(Change) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn find_page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn find_link(&self, id: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.id == id)
    }

    /// All links referencing a page, in storage order.
    pub fn page_links(&self, page_id: &str) -> Vec<&Link> {
        self.links.iter().filter(|l| l.page_id == page_id).collect()
    }

    pub fn insert_page(&mut self, page: Page) -> PersistReport {
        let mut report = PersistReport::default();
        self.pages.push(page);
        self.persist_pages(&mut report);
        report
    }

    pub fn insert_link(&mut self, link: Link) -> PersistReport {
        let mut report = PersistReport::default();
        self.links.push(link);
        self.persist_links(&mut report);
        report
    }

    /// Remove a page and every link referencing it. `None` if the page does
    /// not exist.
    pub fn remove_page(&mut self, id: &str) -> Option<PageRemoval> {
        let pos = self.pages.iter().position(|p| p.id == id)?;
        let page = self.pages.remove(pos);

        let before = self.links.len();
        self.links.retain(|l| l.page_id != id);
        let links_removed = before - self.links.len();

        let mut report = PersistReport::default();
        self.persist_pages(&mut report);
        if links_removed > 0 {
            self.persist_links(&mut report);
        }

        Some(PageRemoval {
            page,
            links_removed,
            report,
        })
    }

    /// Remove a single link. `None` if it does not exist.
    pub fn remove_link(&mut self, id: &str) -> Option<PersistReport> {
        let pos = self.links.iter().position(|l| l.id == id)?;
        self.links.remove(pos);
        let mut report = PersistReport::default();
        self.persist_links(&mut report);
        Some(report)
    }

    /// Increment a link's visit counter by one. `None` (and no persistence,
    /// no notification) if the link does not exist.
    pub fn record_visit(&mut self, link_id: &str) -> Option<PersistReport> {
        let link = self.links.iter_mut().find(|l| l.id == link_id)?;
        link.visits += 1;
        let mut report = PersistReport::default();
        self.persist_links(&mut report);
        Some(report)
    }

    /// Case-insensitive substring search over page id/title and link
    /// id/fullLink. A blank query matches nothing, not everything.
    pub fn search(&self, query: &str) -> Vec<Record> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut records: Vec<Record> = self
            .pages
            .iter()
            .filter(|p| {
                p.id.to_lowercase().contains(&query) || p.title.to_lowercase().contains(&query)
            })
            .cloned()
            .map(Record::Page)
            .collect();

        records.extend(
            self.links
                .iter()
                .filter(|l| {
                    l.id.to_lowercase().contains(&query)
                        || l.full_link.to_lowercase().contains(&query)
                })
                .cloned()
                .map(Record::Link),
        );

        records
    }

    fn persist_pages(&mut self, report: &mut PersistReport) {
        if let Err(e) = self.store.save_pages(&self.pages) {
            report
                .warnings
                .push(format!("pages were not persisted: {}", e));
        }
        self.notify(Change::Pages);
    }

    fn persist_links(&mut self, report: &mut PersistReport) {
        if let Err(e) = self.store.save_links(&self.links) {
            report
                .warnings
                .push(format!("links were not persisted: {}", e));
        }
        self.notify(Change::Links);
    }

    fn notify(&mut self, change: Change) {
        for listener in &mut self.listeners {
            listener(change);
        }
    }
}

/// Built-in sample data, used when nothing (readable) is stored yet.
fn seed_pages() -> Vec<Page> {
    let mut page = Page::new(
        "Fantasy Books Collection".to_string(),
        "Explore our fantastic collection of fantasy books for all ages.".to_string(),
        vec![
            MenuItem::new("Home", "#"),
            MenuItem::new("Books", "#"),
            MenuItem::new("About", "#"),
            MenuItem::new("Contact", "#"),
        ],
        vec![
            "https://source.unsplash.com/random/1200x400/?fantasy,books".to_string(),
            "https://source.unsplash.com/random/1200x400/?library".to_string(),
        ],
        "https://source.unsplash.com/random/600x400/?books".to_string(),
        vec![
            grid_tile("g1", "The Lord of the Rings", "fantasy"),
            grid_tile("g2", "Harry Potter", "magic"),
            grid_tile("g3", "The Witcher", "medieval"),
            grid_tile("g4", "The Hobbit", "adventure"),
        ],
    );
    page.id = "page1".to_string();
    vec![page]
}

fn seed_links() -> Vec<Link> {
    let mut link = Link::new("page1".to_string(), "http://example.com/abc123".to_string());
    link.id = "link1".to_string();
    link.visits = 5;
    vec![link]
}

fn grid_tile(id: &str, title: &str, topic: &str) -> GridItem {
    GridItem {
        id: id.to_string(),
        title: title.to_string(),
        image: format!("https://source.unsplash.com/random/300x300/?{}", topic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn open_seeds_an_empty_store() {
        let db = Database::open(InMemoryStore::new());
        assert_eq!(db.pages().len(), 1);
        assert_eq!(db.pages()[0].id, "page1");
        assert_eq!(db.links().len(), 1);
        assert_eq!(db.links()[0].visits, 5);
    }

    #[test]
    fn open_prefers_stored_data_over_seed() {
        let page = Page::new("Stored".into(), "".into(), vec![], vec![], "".into(), vec![]);
        let store = InMemoryStore::with_data(vec![page.clone()], vec![]);
        let db = Database::open(store);
        assert_eq!(db.pages().len(), 1);
        assert_eq!(db.pages()[0].title, "Stored");
        // An empty stored link collection is honored, not re-seeded.
        assert!(db.links().is_empty());
    }

    #[test]
    fn insert_page_persists_the_full_collection() {
        let mut db = Database::open_empty(InMemoryStore::new());
        let page = Page::new("A".into(), "".into(), vec![], vec![], "".into(), vec![]);
        let id = page.id.clone();
        let report = db.insert_page(page);
        assert!(report.is_clean());
        assert!(db.find_page(&id).is_some());
    }

    #[test]
    fn remove_page_cascades_to_links() {
        let mut db = Database::open_empty(InMemoryStore::new());
        let page = Page::new("A".into(), "".into(), vec![], vec![], "".into(), vec![]);
        let page_id = page.id.clone();
        db.insert_page(page);
        db.insert_link(Link::new(page_id.clone(), "http://example.com/aaaa1111".into()));
        db.insert_link(Link::new(page_id.clone(), "http://example.com/bbbb2222".into()));
        db.insert_link(Link::new("other".into(), "http://example.com/cccc3333".into()));

        let removal = db.remove_page(&page_id).unwrap();
        assert_eq!(removal.links_removed, 2);
        assert!(db.find_page(&page_id).is_none());
        assert!(db.page_links(&page_id).is_empty());
        assert_eq!(db.links().len(), 1);
    }

    #[test]
    fn remove_missing_page_is_none() {
        let mut db = Database::open_empty(InMemoryStore::new());
        assert!(db.remove_page("nope").is_none());
    }

    #[test]
    fn record_visit_increments_exactly_one_field() {
        let mut db = Database::open(InMemoryStore::new());
        let before = db.find_link("link1").unwrap().clone();
        db.record_visit("link1").unwrap();
        let after = db.find_link("link1").unwrap();
        assert_eq!(after.visits, before.visits + 1);
        assert_eq!(after.id, before.id);
        assert_eq!(after.full_link, before.full_link);
        assert_eq!(after.page_id, before.page_id);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn record_visit_on_missing_link_changes_nothing() {
        let mut db = Database::open(InMemoryStore::new());
        assert!(db.record_visit("ghost").is_none());
        assert_eq!(db.find_link("link1").unwrap().visits, 5);
    }

    #[test]
    fn failed_saves_keep_the_mutation_and_warn() {
        let mut db = Database::open_empty(InMemoryStore::new().fail_saves());
        let page = Page::new("A".into(), "".into(), vec![], vec![], "".into(), vec![]);
        let id = page.id.clone();
        let report = db.insert_page(page);
        assert!(!report.is_clean());
        // In-memory state diverges from the (failed) persisted state.
        assert!(db.find_page(&id).is_some());
    }

    #[test]
    fn listeners_hear_every_mutation() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);

        let mut db = Database::open_empty(InMemoryStore::new());
        db.on_change(move |c| sink.borrow_mut().push(c));

        let page = Page::new("A".into(), "".into(), vec![], vec![], "".into(), vec![]);
        let page_id = page.id.clone();
        db.insert_page(page);
        db.insert_link(Link::new(page_id.clone(), "http://example.com/dddd4444".into()));
        db.remove_page(&page_id);

        assert_eq!(
            *log.borrow(),
            vec![
                Change::Pages,
                Change::Links,
                Change::Pages, // page removal
                Change::Links, // cascade
            ]
        );
    }

    #[test]
    fn search_is_case_insensitive_and_ordered() {
        let mut db = Database::open_empty(InMemoryStore::new());
        let page = Page::new("Fantasy Shop".into(), "".into(), vec![], vec![], "".into(), vec![]);
        let page_id = page.id.clone();
        db.insert_page(page);
        db.insert_link(Link::new(page_id, "http://example.com/FANTASYxx".into()));

        let records = db.search("fantasy");
        assert_eq!(records.len(), 2);
        assert!(matches!(records[0], Record::Page(_)));
        assert!(matches!(records[1], Record::Link(_)));
    }

    #[test]
    fn blank_search_returns_nothing() {
        let db = Database::open(InMemoryStore::new());
        assert!(db.search("").is_empty());
        assert!(db.search("   ").is_empty());
    }
}
