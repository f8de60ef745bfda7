//! Menu set lifecycle.
//!
//! Duplicate-name validation, capability checks with the default-set delete
//! protection, per-child cascade deletion, and idempotent bootstrapping of
//! configured default sets.

use tracing::info;

use crate::collab::CapabilityChecker;
use crate::core::{
    Capability, CoreError, MenuSet, SetId, ValidationError, ValidationResult,
};
use crate::store::MenuStore;
use crate::{Error, items};

/// Structural validation for a save attempt.
///
/// Fails with `DuplicateName` when a different set already holds this name
/// within the same tenant scope. Exact-string, case-sensitive.
pub fn validate(store: &MenuStore, set: &MenuSet) -> ValidationResult {
    let mut result = ValidationResult::new();
    if let Some(existing) = store.set_by_name_scoped(&set.name, set.tenant) {
        if existing.id != set.id {
            result.add_error(ValidationError::DuplicateName {
                name: set.name.clone(),
            });
        }
    }
    result
}

/// Validate then commit. Refuses to persist on any validation error.
pub fn save(store: &mut MenuStore, set: MenuSet) -> crate::Result<SetId> {
    let result = validate(store, &set);
    if !result.is_valid() {
        return Err(Error::Core(CoreError::Validation(result)));
    }
    let id = set.id;
    store.put_set(set);
    Ok(id)
}

/// Whether this set's name appears in the configured default list.
pub fn is_default_set(set: &MenuSet, default_names: &[String]) -> bool {
    default_names.iter().any(|n| n == &set.name)
}

/// Delete a set, cascading to its items first.
///
/// Each owned item is deleted individually through the item lifecycle hook
/// path - never a bulk storage-level cascade.
pub fn delete(store: &mut MenuStore, id: SetId) -> Option<MenuSet> {
    for item_id in store.item_ids_of(id) {
        items::delete(store, item_id);
    }
    let removed = store.remove_set(id);
    if let Some(set) = &removed {
        info!(set = %set.id, name = %set.name, "deleted menu set");
    }
    removed
}

/// Ensure every configured default set exists; create the absent ones.
///
/// Idempotent - safe on every startup. Returns whether anything was created
/// so the caller can log it.
pub fn bootstrap_defaults(store: &mut MenuStore, default_names: &[String]) -> crate::Result<bool> {
    let mut created = false;
    for name in default_names {
        if store.set_by_name(name).is_none() {
            let id = store.allocate_set_id();
            save(store, MenuSet::new(id, name.clone()))?;
            info!(name = %name, "created default menu set");
            created = true;
        }
    }
    Ok(created)
}

pub fn can_create(checker: &dyn CapabilityChecker, member: Option<&str>) -> bool {
    checker.check(Capability::ManageMenuSets, member)
}

pub fn can_edit(checker: &dyn CapabilityChecker, member: Option<&str>) -> bool {
    checker.check(Capability::ManageMenuSets, member)
        || checker.check(Capability::ManageMenuItems, member)
}

pub fn can_view(checker: &dyn CapabilityChecker, member: Option<&str>) -> bool {
    checker.check(Capability::ManageMenuSets, member)
        || checker.check(Capability::ManageMenuItems, member)
}

/// Delete permission, with the default-set protection.
///
/// A set named in the default list cannot be deleted while it is the unique
/// holder of that name; a historical duplicate may still be removed.
pub fn can_delete(
    store: &MenuStore,
    set: &MenuSet,
    default_names: &[String],
    checker: &dyn CapabilityChecker,
    member: Option<&str>,
) -> bool {
    let is_duplicate = store
        .sets()
        .iter()
        .any(|s| s.name == set.name && s.tenant == set.tenant && s.id != set.id);
    if is_default_set(set, default_names) && !is_duplicate {
        return false;
    }
    checker.check(Capability::ManageMenuSets, member)
}
