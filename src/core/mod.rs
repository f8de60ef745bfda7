//! Core domain types for menu management.
//!
//! Module order follows type dependency order:
//! - identity: SetId, ItemId, PageId, FileId, TenantId, Locale
//! - domain: LinkType, Capability, LinkingMode
//! - error: CoreError, ValidationResult
//! - menu_set: MenuSet
//! - menu_item: MenuItem, LocalizedFields, FieldValue

pub mod domain;
pub mod error;
pub mod identity;
pub mod menu_item;
pub mod menu_set;

pub use domain::{Capability, LinkType, LinkingMode};
pub use error::{CoreError, InvalidLinkType, InvalidLocale, ValidationError, ValidationResult};
pub use identity::{FileId, ItemId, Locale, PageId, SetId, TenantId};
pub use menu_item::{FieldValue, LocalizedFields, MenuItem};
pub use menu_set::MenuSet;
