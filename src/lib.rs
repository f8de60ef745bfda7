#![forbid(unsafe_code)]

pub mod collab;
pub mod config;
pub mod core;
pub mod error;
pub mod items;
pub mod migrate;
pub mod resolve;
pub mod sets;
pub mod store;
pub mod telemetry;
pub mod test_harness;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

// Re-export core types at crate root for convenience
pub use crate::core::{
    Capability, CoreError, FieldValue, FileId, InvalidLinkType, InvalidLocale, ItemId, LinkType,
    LinkingMode, Locale, LocalizedFields, MenuItem, MenuSet, PageId, SetId, TenantId,
    ValidationError, ValidationResult,
};
pub use crate::migrate::{MigrationOutcome, MigrationReport};
pub use crate::resolve::LinkResolver;
pub use crate::store::MenuStore;
