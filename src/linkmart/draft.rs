//! Loosely-typed page drafts and the normalization step that turns them
//! into valid page fields.
//!
//! Drafts arrive from forms or JSON files and may be missing fields or
//! carry the wrong types. Normalization never fails: every malformed field
//! degrades to a default, and the exact set of substitutions is reported
//! back so callers (and tests) can see what was patched up.

use crate::model::{random_suffix, GridItem, MenuItem, MAX_GRID_ITEMS};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

pub const DEFAULT_TITLE: &str = "Untitled Page";
pub const DEFAULT_ITEM_TITLE: &str = "Untitled Item";

/// A partial page as submitted by the user: everything optional.
#[derive(Debug, Clone, Default)]
pub struct PageDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub menu_items: Vec<MenuItem>,
    pub slider_images: Option<Vec<String>>,
    pub center_image: Option<String>,
    pub grid_items: Vec<GridItemDraft>,
}

#[derive(Debug, Clone, Default)]
pub struct GridItemDraft {
    pub id: Option<String>,
    pub title: Option<String>,
    pub image: Option<String>,
}

impl GridItemDraft {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: Some(title.into()),
            image: None,
        }
    }
}

/// A field that normalization had to substitute a default for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultedField {
    Title,
    Content,
    SliderImages,
    CenterImage,
    GridItemId(usize),
    GridItemTitle(usize),
    GridItemImage(usize),
    /// Tiles beyond the 16-item cap were dropped; carries the drop count.
    GridTruncated(usize),
}

impl fmt::Display for DefaultedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultedField::Title => write!(f, "title"),
            DefaultedField::Content => write!(f, "content"),
            DefaultedField::SliderImages => write!(f, "sliderImages"),
            DefaultedField::CenterImage => write!(f, "centerImage"),
            DefaultedField::GridItemId(i) => write!(f, "gridItems[{}].id", i),
            DefaultedField::GridItemTitle(i) => write!(f, "gridItems[{}].title", i),
            DefaultedField::GridItemImage(i) => write!(f, "gridItems[{}].image", i),
            DefaultedField::GridTruncated(n) => write!(f, "gridItems ({} over cap)", n),
        }
    }
}

/// The outcome of normalizing a draft: valid page fields plus the list of
/// substitutions that were applied.
#[derive(Debug, Clone)]
pub struct SanitizedDraft {
    pub title: String,
    pub content: String,
    pub menu_items: Vec<MenuItem>,
    pub slider_images: Vec<String>,
    pub center_image: String,
    pub grid_items: Vec<GridItem>,
    pub defaulted: Vec<DefaultedField>,
}

impl PageDraft {
    /// Lenient extraction from raw JSON. Wrong types are treated as absent
    /// rather than rejected; unparsable input yields an empty draft.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::from_value(&value),
            Err(_) => Self::default(),
        }
    }

    pub fn from_value(value: &Value) -> Self {
        let title = string_field(value, "title");
        let content = string_field(value, "content");

        let menu_items = value
            .get("menuItems")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|e| {
                        let title = e.get("title")?.as_str()?.to_string();
                        let link = e
                            .get("link")
                            .and_then(Value::as_str)
                            .unwrap_or("#")
                            .to_string();
                        Some(MenuItem { title, link })
                    })
                    .collect()
            })
            .unwrap_or_default();

        // A non-array stays None so normalization records the substitution.
        let slider_images = value
            .get("sliderImages")
            .and_then(Value::as_array)
            .map(|urls| {
                urls.iter()
                    .filter_map(|u| u.as_str().map(str::to_string))
                    .collect()
            });

        let center_image = string_field(value, "centerImage");

        let grid_items = value
            .get("gridItems")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .map(|e| GridItemDraft {
                        id: string_field(e, "id"),
                        title: string_field(e, "title"),
                        image: string_field(e, "image"),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            title,
            content,
            menu_items,
            slider_images,
            center_image,
            grid_items,
        }
    }

    /// Normalize the draft into valid page fields. Never fails.
    pub fn sanitize(self) -> SanitizedDraft {
        let mut defaulted = Vec::new();

        let title = match self.title {
            Some(t) if !t.trim().is_empty() => t,
            _ => {
                defaulted.push(DefaultedField::Title);
                DEFAULT_TITLE.to_string()
            }
        };

        let content = match self.content {
            Some(c) => c,
            None => {
                defaulted.push(DefaultedField::Content);
                String::new()
            }
        };

        let slider_images = match self.slider_images {
            Some(urls) => urls,
            None => {
                defaulted.push(DefaultedField::SliderImages);
                Vec::new()
            }
        };

        let center_image = match self.center_image {
            Some(url) => url,
            None => {
                defaulted.push(DefaultedField::CenterImage);
                String::new()
            }
        };

        let mut drafts = self.grid_items;
        if drafts.len() > MAX_GRID_ITEMS {
            defaulted.push(DefaultedField::GridTruncated(drafts.len() - MAX_GRID_ITEMS));
            drafts.truncate(MAX_GRID_ITEMS);
        }

        let mut seen_ids = HashSet::new();
        let mut grid_items = Vec::with_capacity(drafts.len());
        for (i, item) in drafts.into_iter().enumerate() {
            let id = match item.id {
                // Duplicate tile ids within a page are regenerated.
                Some(id) if !id.is_empty() && !seen_ids.contains(&id) => id,
                _ => {
                    defaulted.push(DefaultedField::GridItemId(i));
                    fresh_item_id(&seen_ids)
                }
            };
            seen_ids.insert(id.clone());

            let title = match item.title {
                Some(t) if !t.trim().is_empty() => t,
                _ => {
                    defaulted.push(DefaultedField::GridItemTitle(i));
                    DEFAULT_ITEM_TITLE.to_string()
                }
            };

            let image = match item.image {
                Some(url) => url,
                None => {
                    defaulted.push(DefaultedField::GridItemImage(i));
                    String::new()
                }
            };

            grid_items.push(GridItem { id, title, image });
        }

        SanitizedDraft {
            title,
            content,
            menu_items: self.menu_items,
            slider_images,
            center_image,
            grid_items,
            defaulted,
        }
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn fresh_item_id(taken: &HashSet<String>) -> String {
    loop {
        let id = format!("item-{}", random_suffix(6));
        if !taken.contains(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_gets_all_defaults() {
        let out = PageDraft::default().sanitize();
        assert_eq!(out.title, DEFAULT_TITLE);
        assert_eq!(out.content, "");
        assert!(out.slider_images.is_empty());
        assert_eq!(out.center_image, "");
        assert!(out.grid_items.is_empty());
        assert_eq!(
            out.defaulted,
            vec![
                DefaultedField::Title,
                DefaultedField::Content,
                DefaultedField::SliderImages,
                DefaultedField::CenterImage,
            ]
        );
    }

    #[test]
    fn complete_draft_reports_nothing_defaulted() {
        let draft = PageDraft {
            title: Some("Shop".into()),
            content: Some("Welcome".into()),
            menu_items: vec![MenuItem::new("Home", "#")],
            slider_images: Some(vec!["http://img/1.jpg".into()]),
            center_image: Some("http://img/c.jpg".into()),
            grid_items: vec![GridItemDraft {
                id: Some("g1".into()),
                title: Some("Book".into()),
                image: Some("http://img/g.jpg".into()),
            }],
        };
        let out = draft.sanitize();
        assert!(out.defaulted.is_empty());
        assert_eq!(out.grid_items[0].id, "g1");
    }

    #[test]
    fn blank_title_is_replaced() {
        let draft = PageDraft {
            title: Some("   ".into()),
            ..Default::default()
        };
        let out = draft.sanitize();
        assert_eq!(out.title, DEFAULT_TITLE);
        assert!(out.defaulted.contains(&DefaultedField::Title));
    }

    #[test]
    fn non_array_slider_images_becomes_empty() {
        let draft = PageDraft::from_json(r#"{"title":"T","sliderImages":"oops"}"#);
        assert!(draft.slider_images.is_none());
        let out = draft.sanitize();
        assert!(out.slider_images.is_empty());
        assert!(out.defaulted.contains(&DefaultedField::SliderImages));
    }

    #[test]
    fn non_string_slider_entries_are_dropped() {
        let draft =
            PageDraft::from_json(r#"{"sliderImages":["http://a.jpg", 7, null, "http://b.jpg"]}"#);
        assert_eq!(
            draft.slider_images,
            Some(vec!["http://a.jpg".to_string(), "http://b.jpg".to_string()])
        );
    }

    #[test]
    fn non_string_center_image_becomes_empty() {
        let draft = PageDraft::from_json(r#"{"centerImage":42}"#);
        let out = draft.sanitize();
        assert_eq!(out.center_image, "");
        assert!(out.defaulted.contains(&DefaultedField::CenterImage));
    }

    #[test]
    fn grid_items_get_generated_ids() {
        let draft = PageDraft {
            grid_items: vec![GridItemDraft::titled("The Hobbit")],
            ..Default::default()
        };
        let out = draft.sanitize();
        assert!(out.grid_items[0].id.starts_with("item-"));
        assert!(out.defaulted.contains(&DefaultedField::GridItemId(0)));
    }

    #[test]
    fn duplicate_grid_ids_are_regenerated() {
        let dup = |title: &str| GridItemDraft {
            id: Some("g1".into()),
            title: Some(title.into()),
            image: Some(String::new()),
        };
        let draft = PageDraft {
            grid_items: vec![dup("A"), dup("B")],
            ..Default::default()
        };
        let out = draft.sanitize();
        assert_eq!(out.grid_items[0].id, "g1");
        assert_ne!(out.grid_items[1].id, "g1");
        assert!(out.defaulted.contains(&DefaultedField::GridItemId(1)));
    }

    #[test]
    fn grid_is_capped_at_sixteen() {
        let draft = PageDraft {
            grid_items: (0..20).map(|i| GridItemDraft::titled(format!("#{}", i))).collect(),
            ..Default::default()
        };
        let out = draft.sanitize();
        assert_eq!(out.grid_items.len(), MAX_GRID_ITEMS);
        assert!(out.defaulted.contains(&DefaultedField::GridTruncated(4)));
    }

    #[test]
    fn garbage_json_yields_empty_draft() {
        let draft = PageDraft::from_json("not json at all {{{");
        assert!(draft.title.is_none());
        assert!(draft.grid_items.is_empty());
    }
}
