//! Menu item lifecycle.
//!
//! Title defaulting on save, the explicit page-fallback field accessor,
//! navigation-highlight state, capability checks, and the single deletion
//! hook path that cascades also go through.

use tracing::debug;

use crate::collab::{CapabilityChecker, FileSource, PageSource};
use crate::core::{Capability, FieldValue, ItemId, LinkType, LinkingMode, MenuItem};
use crate::store::MenuStore;

/// Derive a display title from the referenced entity.
///
/// Internal items take the page title, file items the file title; anything
/// else stays untitled.
pub fn derive_title(
    item: &MenuItem,
    pages: &dyn PageSource,
    files: &dyn FileSource,
) -> Option<String> {
    match item.link_type {
        Some(LinkType::Internal) => {
            let page = pages.page(item.page_ref?)?;
            Some(page.title().to_string())
        }
        Some(LinkType::File) => {
            let file = files.file(item.file_ref?)?;
            Some(file.title().to_string())
        }
        _ => None,
    }
}

/// Save an item, running the before-save hook.
///
/// A blank `menu_title` is re-derived on every save, not only creation, so a
/// later-cleared title picks up the referenced entity's name again.
pub fn save(
    store: &mut MenuStore,
    pages: &dyn PageSource,
    files: &dyn FileSource,
    mut item: MenuItem,
) -> ItemId {
    if item.menu_title.as_deref().is_none_or(|t| t.is_empty()) {
        item.menu_title = derive_title(&item, pages, files);
    }
    let id = item.id;
    store.put_item(item);
    id
}

/// Delete one item through its lifecycle hook path.
///
/// The set cascade calls this per child rather than wiping at the storage
/// layer, so any deletion side effects run for every item.
pub fn delete(store: &mut MenuStore, id: ItemId) -> Option<MenuItem> {
    let removed = store.remove_item(id);
    if let Some(item) = &removed {
        debug!(item = %item.id, set = %item.parent_set, "deleted menu item");
    }
    removed
}

/// Read a field, falling back to the referenced page when the item's own
/// value is absent or empty.
///
/// The fallback only applies to `internal` items, prefers a same-named page
/// accessor over a plain field, and never forwards `id`.
pub fn effective_field(
    item: &MenuItem,
    pages: &dyn PageSource,
    name: &str,
) -> Option<FieldValue> {
    if let Some(own) = item.own_field(name) {
        return Some(own);
    }
    if name == "id" || item.link_type != Some(LinkType::Internal) {
        return None;
    }
    let page = pages.page(item.page_ref?)?;
    page.call(name).or_else(|| page.field(name))
}

/// Navigation-highlight state: delegated to the page for resolvable internal
/// items, flat `Link` for everything else.
pub fn linking_mode(item: &MenuItem, pages: &dyn PageSource) -> LinkingMode {
    if item.link_type == Some(LinkType::Internal) {
        if let Some(page) = item.page_ref.and_then(|id| pages.page(id)) {
            return page.linking_mode();
        }
    }
    LinkingMode::Link
}

pub fn can_create(checker: &dyn CapabilityChecker, member: Option<&str>) -> bool {
    checker.check(Capability::ManageMenuItems, member)
}

pub fn can_edit(checker: &dyn CapabilityChecker, member: Option<&str>) -> bool {
    checker.check(Capability::ManageMenuItems, member)
}

pub fn can_view(checker: &dyn CapabilityChecker, member: Option<&str>) -> bool {
    checker.check(Capability::ManageMenuItems, member)
}

pub fn can_delete(checker: &dyn CapabilityChecker, member: Option<&str>) -> bool {
    checker.check(Capability::ManageMenuItems, member)
}
