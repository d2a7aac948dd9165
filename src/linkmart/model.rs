use chrono::{DateTime, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

/// The maximum number of product tiles a page can carry.
pub const MAX_GRID_ITEMS: usize = 16;

/// A navigation entry on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub title: String,
    pub link: String,
}

impl MenuItem {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// A product tile on a page grid. Tile ids are unique within their page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridItem {
    pub id: String,
    pub title: String,
    pub image: String,
}

/// A templated landing page.
///
/// Persisted with camelCase field names; `isFileBasedPage`/`filePath` only
/// appear for pages backed by a static file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub title: String,
    pub content: String,
    pub menu_items: Vec<MenuItem>,
    pub slider_images: Vec<String>,
    pub center_image: String,
    pub grid_items: Vec<GridItem>,
    // Set once at creation, never updated.
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_file_based_page: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Page {
    pub fn new(
        title: String,
        content: String,
        menu_items: Vec<MenuItem>,
        slider_images: Vec<String>,
        center_image: String,
        grid_items: Vec<GridItem>,
    ) -> Self {
        Self {
            id: fresh_id("page"),
            title,
            content,
            menu_items,
            slider_images,
            center_image,
            grid_items,
            created_at: Utc::now(),
            is_file_based_page: false,
            file_path: None,
        }
    }

    /// A page backed by a static file rather than authored content.
    pub fn file_backed(title: String, file_path: String) -> Self {
        Self {
            id: fresh_id("page"),
            title,
            content: String::new(),
            menu_items: Vec::new(),
            slider_images: Vec::new(),
            center_image: String::new(),
            grid_items: Vec::new(),
            created_at: Utc::now(),
            is_file_based_page: true,
            file_path: Some(file_path),
        }
    }
}

/// A shortened link pointing at a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub full_link: String,
    pub page_id: String,
    pub created_at: DateTime<Utc>,
    pub visits: u64,
}

impl Link {
    pub fn new(page_id: String, full_link: String) -> Self {
        Self {
            id: fresh_id("link"),
            full_link,
            page_id,
            created_at: Utc::now(),
            visits: 0,
        }
    }
}

/// A page or a link, as returned by search and consumed by export.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Page(Page),
    Link(Link),
}

impl Record {
    pub fn id(&self) -> &str {
        match self {
            Record::Page(p) => &p.id,
            Record::Link(l) => &l.id,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Record::Page(p) => p.created_at,
            Record::Link(l) => l.created_at,
        }
    }
}

/// A random alphanumeric string, used for link codes and id suffixes.
pub fn random_suffix(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn fresh_id(prefix: &str) -> String {
    format!(
        "{}_{}_{}",
        prefix,
        Utc::now().timestamp_millis(),
        random_suffix(6)
    )
}
