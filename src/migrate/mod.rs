//! One-shot migrations into the current menu model.

mod legacy_menus;

pub use legacy_menus::{
    LegacyItemRow, LegacyLocalisedRow, LegacySetRow, LegacyTables, MigrationOutcome,
    MigrationReport, migrate_legacy_menus,
};
