//! Domain enums.
//!
//! LinkType: internal, external, file
//! Capability: the two named permission checks menu operations depend on
//! LinkingMode: navigation-highlight state

use serde::{Deserialize, Serialize};

use super::error::{CoreError, InvalidLinkType};

/// Which of the three destinations a menu item resolves through.
///
/// Closed set. Collaborator-added variants live outside this enum: an item
/// whose stored tag is unknown deserialises to no link type at all and
/// resolves to `None` until a registered extension handles it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    Internal,
    External,
    File,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::External => "external",
            Self::File => "file",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw {
            "internal" => Ok(Self::Internal),
            "external" => Ok(Self::External),
            "file" => Ok(Self::File),
            other => Err(InvalidLinkType {
                raw: other.to_string(),
            }
            .into()),
        }
    }

    /// Human label used by option lists.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Internal => "Link to an internal page",
            Self::External => "Link to an external page, email or phone number",
            Self::File => "Link to a file",
        }
    }
}

/// Named capabilities gating menu operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    ManageMenuSets,
    ManageMenuItems,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageMenuSets => "MANAGE_MENU_SETS",
            Self::ManageMenuItems => "MANAGE_MENU_ITEMS",
        }
    }
}

/// Navigation-highlight state of a menu entry.
///
/// `Current` and `Section` only ever come from a referenced page; everything
/// else is a plain `Link`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkingMode {
    Current,
    Section,
    #[default]
    Link,
}

impl LinkingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Section => "section",
            Self::Link => "link",
        }
    }
}
