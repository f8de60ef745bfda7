//! Import from the legacy flat menu schema.
//!
//! The old model stored one row per item with a page reference, a file
//! reference, and a literal link column side by side; the variant is derived
//! here (page wins over file wins over literal link) and everything flows
//! through the normal set/item lifecycle - no store-level bypass.
//!
//! Idempotency is layered: a coarse global entry guard (any item in the new
//! model aborts the run), plus per-set safety (name lookup instead of blind
//! create, wipe-and-recreate of owned items). Each write commits
//! independently; there is no whole-run rollback.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::collab::{FileSource, LocaleProvider, PageSource};
use crate::core::{
    FileId, LinkType, Locale, LocalizedFields, MenuItem, MenuSet, PageId, TenantId,
};
use crate::store::MenuStore;
use crate::{items, sets};

/// One row of the legacy menu-set relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacySetRow {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub tenant_id: Option<u64>,
}

/// One row of the legacy menu-item relation.
///
/// `page_id` / `file_id` follow the old store's convention that `0` means
/// unset. Columns with no counterpart in the new model land in `extra` and
/// are dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyItemRow {
    pub id: u64,
    pub menu_set_id: u64,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub menu_title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub page_id: Option<u64>,
    #[serde(default)]
    pub file_id: Option<u64>,
    #[serde(default)]
    pub sort: i64,
    #[serde(default)]
    pub is_new_window: bool,
    #[serde(default)]
    pub anchor: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One row of the legacy per-locale localisation relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyLocalisedRow {
    pub id: u64,
    pub record_id: u64,
    pub locale: String,
    #[serde(default)]
    pub menu_title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub anchor: Option<String>,
}

/// Raw tabular snapshot of the legacy relations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacyTables {
    #[serde(default)]
    pub menu_sets: Vec<LegacySetRow>,
    #[serde(default)]
    pub menu_items: Vec<LegacyItemRow>,
    #[serde(default)]
    pub localisations: Vec<LegacyLocalisedRow>,
}

impl LegacyTables {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Summary of a completed migration run.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MigrationReport {
    pub sets_created: usize,
    pub sets_reused: usize,
    pub items_wiped: usize,
    pub items_migrated: usize,
    pub localised_rows: usize,
    pub sets_without_items: Vec<String>,
}

/// Entry-guard decision plus result of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MigrationOutcome {
    /// Preconditions failed; nothing was written.
    Skipped { reason: String },
    Migrated(MigrationReport),
}

/// Migrate the legacy flat relations into the current model.
///
/// Sets and items are processed in the relations' natural order; legacy sort
/// values are carried over, not renumbered. Localised fields are applied one
/// locale at a time, only when a locale provider is configured.
pub fn migrate_legacy_menus(
    store: &mut MenuStore,
    legacy: &LegacyTables,
    pages: &dyn PageSource,
    files: &dyn FileSource,
    locales: Option<&dyn LocaleProvider>,
) -> crate::Result<MigrationOutcome> {
    if legacy.menu_sets.is_empty() {
        info!("aborting: no menus to migrate");
        return Ok(MigrationOutcome::Skipped {
            reason: "no menus to migrate".to_string(),
        });
    }

    // Coarse global guard, deliberately unscoped by set or tenant.
    if store.item_count() > 0 {
        info!("aborting: there are already menu items in the new system");
        return Ok(MigrationOutcome::Skipped {
            reason: "there are already menu items in the new system".to_string(),
        });
    }

    let mut report = MigrationReport::default();

    for old_set in &legacy.menu_sets {
        let tenant = old_set.tenant_id.map(TenantId::new);
        let existing = match tenant {
            Some(t) => store.set_by_name_scoped(&old_set.name, Some(t)),
            None => store.set_by_name(&old_set.name),
        };

        let set_id = match existing.map(|s| s.id) {
            Some(id) => {
                info!(name = %old_set.name, "using existing menu set");
                report.sets_reused += 1;
                id
            }
            None => {
                info!(name = %old_set.name, "creating new menu set");
                let mut set = MenuSet::new(store.allocate_set_id(), old_set.name.clone());
                set.tenant = tenant;
                report.sets_created += 1;
                sets::save(store, set)?
            }
        };

        // Per-set re-run safety: wipe owned items through the hook path.
        for item_id in store.item_ids_of(set_id) {
            items::delete(store, item_id);
            report.items_wiped += 1;
        }

        let old_items: Vec<&LegacyItemRow> = legacy
            .menu_items
            .iter()
            .filter(|i| i.menu_set_id == old_set.id)
            .collect();

        if old_items.is_empty() {
            info!(name = %old_set.name, "skipping: no items to migrate");
            report.sets_without_items.push(old_set.name.clone());
            continue;
        }

        for old_item in old_items {
            let page_ref = old_item.page_id.filter(|&v| v != 0).map(PageId::new);
            let file_ref = old_item.file_id.filter(|&v| v != 0).map(FileId::new);
            let literal = old_item.link.as_deref().filter(|l| !l.is_empty());

            let link_type = if page_ref.is_some() {
                Some(LinkType::Internal)
            } else if file_ref.is_some() {
                Some(LinkType::File)
            } else if literal.is_some() {
                Some(LinkType::External)
            } else {
                None
            };

            let mut item = MenuItem::new(store.allocate_item_id(), set_id);
            item.link_type = link_type;
            item.page_ref = page_ref;
            item.file_ref = file_ref;
            // The literal link column survives only as an external URL.
            item.url = match link_type {
                Some(LinkType::External) => literal.map(str::to_string),
                _ => None,
            };
            item.menu_title = old_item.menu_title.clone();
            item.sort = old_item.sort;
            item.is_new_window = old_item.is_new_window;
            item.anchor = old_item.anchor.clone();

            for column in old_item.extra.keys() {
                debug!(column = %column, "dropping legacy column with no counterpart");
            }

            let new_id = items::save(store, pages, files, item);
            report.items_migrated += 1;

            let Some(provider) = locales else { continue };
            for locale in provider.locales() {
                let localised = legacy
                    .localisations
                    .iter()
                    .find(|l| l.record_id == old_item.id && l.locale == locale.as_str());
                let Some(row) = localised else { continue };

                // One locale at a time: apply and commit before the next.
                if apply_localised(store, pages, files, new_id, &locale, row) {
                    report.localised_rows += 1;
                }
            }
        }
    }

    info!(
        sets_created = report.sets_created,
        sets_reused = report.sets_reused,
        items = report.items_migrated,
        localised = report.localised_rows,
        "legacy menu migration finished"
    );
    Ok(MigrationOutcome::Migrated(report))
}

/// Persist one locale's fields as a full item save of its own, so the
/// localised write takes the same lifecycle path as every other write.
fn apply_localised(
    store: &mut MenuStore,
    pages: &dyn PageSource,
    files: &dyn FileSource,
    id: crate::core::ItemId,
    locale: &Locale,
    row: &LegacyLocalisedRow,
) -> bool {
    // id and record_id are stripped; only content fields carry over.
    let fields = LocalizedFields {
        menu_title: row.menu_title.clone(),
        url: row.url.clone(),
        anchor: row.anchor.clone(),
    };
    if fields.is_empty() {
        return false;
    }
    let Some(mut item) = store.item(id).cloned() else {
        return false;
    };
    item.localized.insert(locale.clone(), fields);
    items::save(store, pages, files, item);
    true
}
