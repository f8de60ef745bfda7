//! The menu set - a named, ordered container of menu items.

use serde::{Deserialize, Serialize};

use super::identity::{SetId, TenantId};

/// A named container of menu items.
///
/// `name` is unique across all sets (case-sensitive) and immutable after
/// creation; items are owned by composition and cascade on delete. The set
/// itself only carries scalar fields - ownership of items lives in the
/// store, keyed by `parent_set` on each item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSet {
    pub id: SetId,
    pub name: String,
    pub description: Option<String>,
    pub sort: i64,
    pub tenant: Option<TenantId>,
}

impl MenuSet {
    pub fn new(id: SetId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            sort: 0,
            tenant: None,
        }
    }

    pub fn with_tenant(mut self, tenant: TenantId) -> Self {
        self.tenant = Some(tenant);
        self
    }
}
