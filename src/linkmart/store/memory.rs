use super::DataStore;
use crate::error::{LinkmartError, Result};
use crate::model::{Link, Page};

/// In-memory storage for testing and development.
/// Keeps the same whole-blob semantics as [`super::fs::FileStore`], without
/// touching the filesystem.
#[derive(Default)]
pub struct InMemoryStore {
    pages: Option<Vec<Page>>,
    links: Option<Vec<Link>>,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the stored blobs, as if a previous session had saved them.
    pub fn with_data(pages: Vec<Page>, links: Vec<Link>) -> Self {
        Self {
            pages: Some(pages),
            links: Some(links),
            fail_saves: false,
        }
    }

    /// Make every save fail, to exercise the swallowed-write-error path.
    pub fn fail_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_saves {
            return Err(LinkmartError::Store("simulated save failure".to_string()));
        }
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn load_pages(&self) -> Result<Option<Vec<Page>>> {
        Ok(self.pages.clone())
    }

    fn save_pages(&mut self, pages: &[Page]) -> Result<()> {
        self.check_writable()?;
        self.pages = Some(pages.to_vec());
        Ok(())
    }

    fn load_links(&self) -> Result<Option<Vec<Link>>> {
        Ok(self.links.clone())
    }

    fn save_links(&mut self, links: &[Link]) -> Result<()> {
        self.check_writable()?;
        self.links = Some(links.to_vec());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::db::Database;
    use crate::draft::PageDraft;

    /// Builder for a [`Database`] over in-memory storage, pre-loaded with
    /// simple pages and links.
    pub struct DbFixture {
        pub db: Database<InMemoryStore>,
    }

    impl Default for DbFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl DbFixture {
        /// An empty database (no seed data).
        pub fn new() -> Self {
            Self {
                db: Database::open_empty(InMemoryStore::new()),
            }
        }

        pub fn with_page(mut self, title: &str) -> Self {
            let draft = PageDraft {
                title: Some(title.to_string()),
                content: Some(format!("Content for {}", title)),
                ..Default::default()
            };
            let sanitized = draft.sanitize();
            let page = crate::model::Page::new(
                sanitized.title,
                sanitized.content,
                sanitized.menu_items,
                sanitized.slider_images,
                sanitized.center_image,
                sanitized.grid_items,
            );
            self.db.insert_page(page);
            self
        }

        pub fn with_pages(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_page(&format!("Test Page {}", i + 1));
            }
            self
        }

        /// A link for the most recently added page.
        pub fn with_link(mut self) -> Self {
            let page_id = self
                .db
                .pages()
                .last()
                .map(|p| p.id.clone())
                .expect("fixture has no page to link to");
            let full_link = format!("http://example.com/{}", crate::model::random_suffix(8));
            self.db.insert_link(crate::model::Link::new(page_id, full_link));
            self
        }
    }
}
