//! Canonical in-memory entity store.
//!
//! The persistence boundary of the crate: query-by-field lookups, ordered
//! listing, and per-record commit semantics. Deliberately dumb - no cascade
//! and no lifecycle hooks live here; those run in `sets` and `items` so each
//! child deletion takes the same path as a standalone one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{ItemId, MenuItem, MenuSet, SetId, TenantId};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MenuStore {
    sets: BTreeMap<SetId, MenuSet>,
    items: BTreeMap<ItemId, MenuItem>,
    next_set_id: u64,
    next_item_id: u64,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate_set_id(&mut self) -> SetId {
        self.next_set_id += 1;
        SetId::new(self.next_set_id)
    }

    pub fn allocate_item_id(&mut self) -> ItemId {
        self.next_item_id += 1;
        ItemId::new(self.next_item_id)
    }

    /// Commit a set record. Insert or replace; one write, one commit.
    pub fn put_set(&mut self, set: MenuSet) {
        self.next_set_id = self.next_set_id.max(set.id.value());
        self.sets.insert(set.id, set);
    }

    pub fn set(&self, id: SetId) -> Option<&MenuSet> {
        self.sets.get(&id)
    }

    pub fn remove_set(&mut self, id: SetId) -> Option<MenuSet> {
        self.sets.remove(&id)
    }

    /// All sets ordered by sort, then id for a stable tie-break.
    pub fn sets(&self) -> Vec<&MenuSet> {
        let mut out: Vec<&MenuSet> = self.sets.values().collect();
        out.sort_by_key(|s| (s.sort, s.id));
        out
    }

    /// Sets visible under a tenant scope. `None` lists unscoped sets only.
    pub fn sets_for_tenant(&self, tenant: Option<TenantId>) -> Vec<&MenuSet> {
        let mut out: Vec<&MenuSet> = self
            .sets
            .values()
            .filter(|s| s.tenant == tenant)
            .collect();
        out.sort_by_key(|s| (s.sort, s.id));
        out
    }

    /// First set with this exact name, across all tenants.
    pub fn set_by_name(&self, name: &str) -> Option<&MenuSet> {
        self.sets().into_iter().find(|s| s.name == name)
    }

    /// First set matching name and tenant scope.
    pub fn set_by_name_scoped(&self, name: &str, tenant: Option<TenantId>) -> Option<&MenuSet> {
        self.sets()
            .into_iter()
            .find(|s| s.name == name && s.tenant == tenant)
    }

    /// Commit an item record.
    pub fn put_item(&mut self, item: MenuItem) {
        self.next_item_id = self.next_item_id.max(item.id.value());
        self.items.insert(item.id, item);
    }

    pub fn item(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.get(&id)
    }

    pub fn remove_item(&mut self, id: ItemId) -> Option<MenuItem> {
        self.items.remove(&id)
    }

    /// Items owned by a set, ordered by sort ascending (id tie-break).
    pub fn items_of(&self, set: SetId) -> Vec<&MenuItem> {
        let mut out: Vec<&MenuItem> = self
            .items
            .values()
            .filter(|i| i.parent_set == set)
            .collect();
        out.sort_by_key(|i| (i.sort, i.id));
        out
    }

    pub fn item_ids_of(&self, set: SetId) -> Vec<ItemId> {
        self.items_of(set).into_iter().map(|i| i.id).collect()
    }

    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    /// Global item count - the migration entry guard reads this.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_listed_in_sort_order() {
        let mut store = MenuStore::new();
        let set_id = store.allocate_set_id();
        store.put_set(MenuSet::new(set_id, "Main"));
        for (sort, _) in [(30, "c"), (10, "a"), (20, "b")] {
            let id = store.allocate_item_id();
            let mut item = MenuItem::new(id, set_id);
            item.sort = sort;
            store.put_item(item);
        }
        let sorts: Vec<i64> = store.items_of(set_id).iter().map(|i| i.sort).collect();
        assert_eq!(sorts, vec![10, 20, 30]);
    }

    #[test]
    fn tenant_listing_is_scoped_and_ordered() {
        let mut store = MenuStore::new();
        let a = store.allocate_set_id();
        let mut main = MenuSet::new(a, "Main");
        main.sort = 2;
        store.put_set(main);
        let b = store.allocate_set_id();
        let mut footer = MenuSet::new(b, "Footer");
        footer.sort = 1;
        store.put_set(footer);
        let c = store.allocate_set_id();
        store.put_set(MenuSet::new(c, "Sidebar").with_tenant(TenantId::new(2)));

        let unscoped: Vec<&str> = store
            .sets_for_tenant(None)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(unscoped, vec!["Footer", "Main"]);

        let scoped: Vec<&str> = store
            .sets_for_tenant(Some(TenantId::new(2)))
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(scoped, vec!["Sidebar"]);
        assert!(store.sets_for_tenant(Some(TenantId::new(3))).is_empty());
    }

    #[test]
    fn tenant_scope_filters_lookup() {
        let mut store = MenuStore::new();
        let a = store.allocate_set_id();
        store.put_set(MenuSet::new(a, "Footer"));
        let b = store.allocate_set_id();
        store.put_set(MenuSet::new(b, "Footer").with_tenant(TenantId::new(2)));

        assert_eq!(store.set_by_name_scoped("Footer", None).map(|s| s.id), Some(a));
        assert_eq!(
            store
                .set_by_name_scoped("Footer", Some(TenantId::new(2)))
                .map(|s| s.id),
            Some(b)
        );
        assert!(store.set_by_name_scoped("Footer", Some(TenantId::new(3))).is_none());
    }
}
