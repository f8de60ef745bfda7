//! Identity atoms.
//!
//! SetId/ItemId: store-assigned record identifiers
//! PageId/FileId: weak references to external entities
//! TenantId: opaque multi-site scope
//! Locale: validated `xx` / `xx_YY` tag

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{CoreError, InvalidLocale};

macro_rules! record_id {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub fn new(n: u64) -> Self {
                Self(n)
            }

            pub fn value(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(SetId, "Menu set record identifier.");
record_id!(ItemId, "Menu item record identifier.");
record_id!(PageId, "Weak reference to an external page entity.");
record_id!(FileId, "Weak reference to an external file entity.");
record_id!(TenantId, "Opaque tenant (subsite) scope identifier.");

/// Locale tag - `xx` or `xx_YY`.
///
/// Kept deliberately loose: two lowercase letters, optionally followed by
/// `_` and two uppercase letters. Hosts with richer tags can relax this at
/// their boundary.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn parse(s: impl Into<String>) -> Result<Self, CoreError> {
        let s = s.into();
        let bytes = s.as_bytes();
        let ok = match bytes.len() {
            2 => bytes.iter().all(|b| b.is_ascii_lowercase()),
            5 => {
                bytes[0].is_ascii_lowercase()
                    && bytes[1].is_ascii_lowercase()
                    && bytes[2] == b'_'
                    && bytes[3].is_ascii_uppercase()
                    && bytes[4].is_ascii_uppercase()
            }
            _ => false,
        };
        if ok {
            Ok(Self(s))
        } else {
            Err(InvalidLocale { raw: s }.into())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Locale({:?})", self.0)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
