//! The menu item - a single navigable entry owned by exactly one menu set.

use std::cell::OnceCell;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::LinkType;
use super::identity::{FileId, ItemId, Locale, PageId, SetId};

/// Per-locale field overrides.
///
/// Only the fields the legacy localisation table carried; absent fields fall
/// through to the item's base values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedFields {
    pub menu_title: Option<String>,
    pub url: Option<String>,
    pub anchor: Option<String>,
}

impl LocalizedFields {
    pub fn is_empty(&self) -> bool {
        self.menu_title.is_none() && self.url.is_none() && self.anchor.is_none()
    }
}

/// A dynamically-typed field read, used by the page-fallback accessor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Int(i64),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// A single menu entry.
///
/// The resolved link is memoized per in-memory instance and never persisted;
/// a fresh load (or deserialisation) recomputes it. Mutating `link_type` or
/// the references after the first resolution requires `invalidate_link` or
/// the stale cached value keeps winning.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub parent_set: SetId,
    pub menu_title: Option<String>,
    pub link_type: Option<LinkType>,
    pub page_ref: Option<PageId>,
    pub url: Option<String>,
    pub file_ref: Option<FileId>,
    pub anchor: Option<String>,
    pub is_new_window: bool,
    pub sort: i64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub localized: BTreeMap<Locale, LocalizedFields>,
    #[serde(skip)]
    pub(crate) link_cached: OnceCell<Option<String>>,
}

impl MenuItem {
    pub fn new(id: ItemId, parent_set: SetId) -> Self {
        Self {
            id,
            parent_set,
            menu_title: None,
            link_type: Some(LinkType::Internal),
            page_ref: None,
            url: None,
            file_ref: None,
            anchor: None,
            is_new_window: false,
            sort: 0,
            localized: BTreeMap::new(),
            link_cached: OnceCell::new(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.menu_title.as_deref()
    }

    /// Title under a locale, falling back to the base title.
    pub fn title_for(&self, locale: &Locale) -> Option<&str> {
        self.localized
            .get(locale)
            .and_then(|f| f.menu_title.as_deref())
            .or(self.title())
    }

    /// Drop the memoized link so the next resolution recomputes it.
    pub fn invalidate_link(&mut self) {
        self.link_cached = OnceCell::new();
    }

    /// Read one of the item's own declared fields by name.
    ///
    /// Returns `None` for unknown names and for empty values (blank strings,
    /// unset references, `false`, `0`) - the emptiness rule the page-fallback
    /// accessor depends on. `id` answers for any store-allocated identifier.
    pub fn own_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => int_field(self.id.value()),
            "menu_title" => non_empty(self.menu_title.as_deref()),
            "link_type" => self
                .link_type
                .map(|t| FieldValue::Text(t.as_str().to_string())),
            "url" => non_empty(self.url.as_deref()),
            "anchor" => non_empty(self.anchor.as_deref()),
            "page_id" => self.page_ref.and_then(|p| int_field(p.value())),
            "file_id" => self.file_ref.and_then(|f| int_field(f.value())),
            "menu_set_id" => int_field(self.parent_set.value()),
            "is_new_window" => self.is_new_window.then_some(FieldValue::Flag(true)),
            "sort" => (self.sort != 0).then_some(FieldValue::Int(self.sort)),
            _ => None,
        }
    }
}

// Refuse rather than wrap identifiers beyond i64 range.
fn int_field(value: u64) -> Option<FieldValue> {
    i64::try_from(value).ok().map(FieldValue::Int)
}

fn non_empty(value: Option<&str>) -> Option<FieldValue> {
    value
        .filter(|s| !s.is_empty())
        .map(|s| FieldValue::Text(s.to_string()))
}
