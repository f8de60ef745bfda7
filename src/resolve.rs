//! Link resolution.
//!
//! Pure function of an item's variant and its referenced entities. A variant
//! whose required reference is absent yields `None`, never an error; the
//! anchor only ever applies to internal links.

use tracing::trace;

use crate::collab::{FileSource, PageSource, SlugFilter};
use crate::core::{LinkType, MenuItem};

/// A registered link-resolution extension.
///
/// Extensions run in registration order after the built-in dispatch, each
/// receiving the intermediate result by mutable reference. This is how
/// collaborator-added variants get a destination at all: the built-in match
/// leaves them at `None`.
pub trait LinkExtension {
    fn update_link(&self, _item: &MenuItem, _link: &mut Option<String>) {}

    fn update_link_types(&self, _types: &mut Vec<(String, String)>) {}
}

/// Computes effective links and URL segments for menu items.
pub struct LinkResolver<'a> {
    pages: &'a dyn PageSource,
    files: &'a dyn FileSource,
    slug: &'a dyn SlugFilter,
    extensions: Vec<Box<dyn LinkExtension>>,
}

impl<'a> LinkResolver<'a> {
    pub fn new(
        pages: &'a dyn PageSource,
        files: &'a dyn FileSource,
        slug: &'a dyn SlugFilter,
    ) -> Self {
        Self {
            pages,
            files,
            slug,
            extensions: Vec::new(),
        }
    }

    /// Register an extension; runs after all previously registered ones.
    pub fn register(&mut self, extension: Box<dyn LinkExtension>) {
        self.extensions.push(extension);
    }

    /// The single effective navigable link of an item.
    ///
    /// Memoized on the item instance: the first call computes, runs the
    /// extensions, caches, and every later call returns the cached value.
    pub fn resolve_link(&self, item: &MenuItem) -> Option<String> {
        item.link_cached
            .get_or_init(|| {
                let mut link = self.compute_link(item);
                for extension in &self.extensions {
                    extension.update_link(item, &mut link);
                }
                trace!(item = %item.id, link = link.as_deref(), "resolved link");
                link
            })
            .clone()
    }

    fn compute_link(&self, item: &MenuItem) -> Option<String> {
        match item.link_type {
            Some(LinkType::Internal) => {
                let page = self.pages.page(item.page_ref?)?;
                let mut link = page.link(None);
                if let Some(anchor) = item.anchor.as_deref().filter(|a| !a.is_empty()) {
                    link.push('#');
                    link.push_str(anchor.strip_prefix('#').unwrap_or(anchor));
                }
                Some(link)
            }
            Some(LinkType::External) => item.url.clone().filter(|u| !u.is_empty()),
            Some(LinkType::File) => {
                let file = self.files.file(item.file_ref?)?;
                Some(file.link())
            }
            None => None,
        }
    }

    /// URL-path-segment equivalent of the link. Not memoized.
    ///
    /// External links have no segment; file segments are the slug-filtered
    /// file title.
    pub fn url_segment(&self, item: &MenuItem) -> Option<String> {
        match item.link_type {
            Some(LinkType::Internal) => {
                let page = self.pages.page(item.page_ref?)?;
                Some(page.url_segment().to_string())
            }
            Some(LinkType::File) => {
                let file = self.files.file(item.file_ref?)?;
                Some(self.slug.filter(file.title()))
            }
            _ => None,
        }
    }

    /// Ordered `(tag, label)` mapping of selectable link types.
    ///
    /// Starts with the three built-in variants; registered extensions may
    /// append or relabel.
    pub fn link_type_options(&self) -> Vec<(String, String)> {
        let mut types: Vec<(String, String)> = [LinkType::Internal, LinkType::External, LinkType::File]
            .iter()
            .map(|t| (t.as_str().to_string(), t.label().to_string()))
            .collect();
        for extension in &self.extensions {
            extension.update_link_types(&mut types);
        }
        types
    }

    /// Human label for an item's link type, falling back to the raw tag.
    pub fn link_type_label(&self, item: &MenuItem) -> Option<String> {
        let tag = item.link_type?.as_str();
        Some(
            self.link_type_options()
                .into_iter()
                .find(|(t, _)| t == tag)
                .map(|(_, label)| label)
                .unwrap_or_else(|| tag.to_string()),
        )
    }
}
