//! Items displayed by the terminal host.

use super::identifiers::ItemId;
use super::sort_key::SortKey;
use crate::grid::GridItem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the ordered collection.
///
/// The grid only looks at [`GridItem::item_id`] and [`GridItem::sort_label`].
/// Everything else is for the cell renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier.
    pub id: ItemId,
    /// Label used for character jumps (usually a lowercased, article-free title).
    pub sort_name: String,
    /// Display title. Falls back to `sort_name` when absent.
    #[serde(default)]
    pub title: Option<String>,
    /// Whether the item is monitored.
    #[serde(default)]
    pub monitored: bool,
    /// Quality profile name.
    #[serde(default)]
    pub quality_profile: Option<String>,
    /// Completion ratio in `0.0..=1.0`.
    #[serde(default)]
    pub progress: Option<f64>,
    /// Per-sort-key annotation text (e.g. `"sizeOnDisk" -> "12.4 GiB"`).
    #[serde(default)]
    pub details: BTreeMap<String, String>,
}

impl Item {
    /// Minimal item with only an id and sort name.
    pub fn new(id: impl Into<ItemId>, sort_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sort_name: sort_name.into(),
            title: None,
            monitored: false,
            quality_profile: None,
            progress: None,
            details: BTreeMap::new(),
        }
    }

    /// Title to display.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.sort_name)
    }

    /// Annotation shown for the active sort key, if the item has one.
    pub fn annotation(&self, sort_key: Option<&SortKey>) -> Option<&str> {
        sort_key.and_then(|key| self.details.get(key.as_str()).map(String::as_str))
    }

    /// Progress clamped to `0.0..=1.0`, zero when unknown.
    pub fn progress_ratio(&self) -> f64 {
        self.progress.unwrap_or(0.0).clamp(0.0, 1.0)
    }
}

impl GridItem for Item {
    fn item_id(&self) -> ItemId {
        self.id
    }

    fn sort_label(&self) -> &str {
        &self.sort_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_title_falls_back_to_sort_name() {
        let item = Item::new(1, "beatles");
        assert_eq!(item.display_title(), "beatles");

        let titled = Item {
            title: Some("The Beatles".to_string()),
            ..item
        };
        assert_eq!(titled.display_title(), "The Beatles");
    }

    #[test]
    fn annotation_looks_up_active_sort_key() {
        let mut item = Item::new(1, "abba");
        item.details
            .insert("sizeOnDisk".to_string(), "3.2 GiB".to_string());

        assert_eq!(item.annotation(Some(&SortKey::SizeOnDisk)), Some("3.2 GiB"));
        assert_eq!(item.annotation(Some(&SortKey::Path)), None);
        assert_eq!(item.annotation(None), None);
    }

    #[test]
    fn progress_ratio_is_clamped() {
        let mut item = Item::new(1, "a");
        assert_eq!(item.progress_ratio(), 0.0);
        item.progress = Some(1.7);
        assert_eq!(item.progress_ratio(), 1.0);
        item.progress = Some(-0.2);
        assert_eq!(item.progress_ratio(), 0.0);
    }

    #[test]
    fn deserializes_minimal_json() {
        let item: Item = serde_json::from_str(r#"{"id": 7, "sort_name": "queen"}"#).unwrap();
        assert_eq!(item.id, ItemId::new(7));
        assert!(item.details.is_empty());
        assert!(!item.monitored);
    }

    #[test]
    fn grid_item_exposes_id_and_label() {
        let item = Item::new(9, "zappa");
        assert_eq!(item.item_id(), ItemId::new(9));
        assert_eq!(item.sort_label(), "zappa");
    }
}
