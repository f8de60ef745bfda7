//! Collaborator interfaces.
//!
//! Everything the menu core consumes but does not own: pages, files, slug
//! normalisation, capability checks, locale enumeration. Existence of a
//! referenced entity is modelled by the source lookup returning `Some`;
//! a dangling reference is never an error anywhere downstream.

use crate::core::{Capability, FieldValue, FileId, LinkingMode, Locale, PageId};

/// An external page a menu item may point at.
///
/// The page computes its own link; this core never assembles page URLs.
pub trait Page {
    fn title(&self) -> &str;

    fn url_segment(&self) -> &str;

    fn link(&self, action: Option<&str>) -> String;

    /// Current/section/link state of this page in the active navigation.
    fn linking_mode(&self) -> LinkingMode {
        LinkingMode::Link
    }

    /// Read a named field, for the item's page-fallback accessor.
    fn field(&self, _name: &str) -> Option<FieldValue> {
        None
    }

    /// Invoke a named zero-argument accessor, preferred over `field` when
    /// the page answers to both.
    fn call(&self, _name: &str) -> Option<FieldValue> {
        None
    }
}

/// An external file a menu item may point at.
pub trait File {
    fn title(&self) -> &str;

    fn link(&self) -> String;
}

/// Lookup of pages by identifier.
pub trait PageSource {
    fn page(&self, id: PageId) -> Option<&dyn Page>;
}

/// Lookup of files by identifier.
pub trait FileSource {
    fn file(&self, id: FileId) -> Option<&dyn File>;
}

/// Text normalisation used to derive a URL segment from a file title.
pub trait SlugFilter {
    fn filter(&self, text: &str) -> String;
}

/// Stock slug filter: lowercase, non-URL-safe runs collapsed to `-`.
#[derive(Clone, Copy, Debug, Default)]
pub struct UrlSegmentFilter;

impl SlugFilter for UrlSegmentFilter {
    fn filter(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut pending_dash = false;
        for c in text.chars() {
            if c.is_ascii_alphanumeric() {
                if pending_dash && !out.is_empty() {
                    out.push('-');
                }
                pending_dash = false;
                out.push(c.to_ascii_lowercase());
            } else {
                pending_dash = true;
            }
        }
        out
    }
}

/// Permission checks for the two named menu capabilities.
///
/// `member` is an opaque caller identity; `None` means the ambient session.
pub trait CapabilityChecker {
    fn check(&self, capability: Capability, member: Option<&str>) -> bool;
}

/// Enumerates configured locales for localized field storage.
///
/// Absence of a provider means localisation is not enabled; the migration
/// engine detects this rather than assuming it.
pub trait LocaleProvider {
    fn locales(&self) -> Vec<Locale>;
}
