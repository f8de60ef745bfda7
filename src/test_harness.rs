//! In-memory collaborator fakes for unit and integration tests.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::collab::{
    CapabilityChecker, File, FileSource, LocaleProvider, Page, PageSource,
};
use crate::core::{Capability, FieldValue, FileId, LinkingMode, Locale, PageId};

/// Scripted page: fixed title/segment/link, optional extra fields.
#[derive(Default)]
pub struct FakePage {
    pub title: String,
    pub segment: String,
    pub link: String,
    pub mode: LinkingMode,
    pub fields: BTreeMap<String, FieldValue>,
    pub methods: BTreeMap<String, FieldValue>,
}

impl FakePage {
    pub fn new(title: &str, segment: &str, link: &str) -> Self {
        Self {
            title: title.to_string(),
            segment: segment.to_string(),
            link: link.to_string(),
            ..Self::default()
        }
    }
}

impl Page for FakePage {
    fn title(&self) -> &str {
        &self.title
    }

    fn url_segment(&self) -> &str {
        &self.segment
    }

    fn link(&self, _action: Option<&str>) -> String {
        self.link.clone()
    }

    fn linking_mode(&self) -> LinkingMode {
        self.mode
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        self.fields.get(name).cloned()
    }

    fn call(&self, name: &str) -> Option<FieldValue> {
        self.methods.get(name).cloned()
    }
}

pub struct FakeFile {
    pub title: String,
    pub link: String,
}

impl FakeFile {
    pub fn new(title: &str, link: &str) -> Self {
        Self {
            title: title.to_string(),
            link: link.to_string(),
        }
    }
}

impl File for FakeFile {
    fn title(&self) -> &str {
        &self.title
    }

    fn link(&self) -> String {
        self.link.clone()
    }
}

/// A site of fake pages and files, usable as both sources.
#[derive(Default)]
pub struct FakeSite {
    pub pages: BTreeMap<PageId, FakePage>,
    pub files: BTreeMap<FileId, FakeFile>,
}

impl FakeSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_page(&mut self, id: u64, page: FakePage) -> PageId {
        let id = PageId::new(id);
        self.pages.insert(id, page);
        id
    }

    pub fn add_file(&mut self, id: u64, file: FakeFile) -> FileId {
        let id = FileId::new(id);
        self.files.insert(id, file);
        id
    }
}

impl PageSource for FakeSite {
    fn page(&self, id: PageId) -> Option<&dyn Page> {
        self.pages.get(&id).map(|p| p as &dyn Page)
    }
}

impl FileSource for FakeSite {
    fn file(&self, id: FileId) -> Option<&dyn File> {
        self.files.get(&id).map(|f| f as &dyn File)
    }
}

/// Grants exactly the capabilities it was built with, to any member.
#[derive(Default)]
pub struct FakePermissions {
    granted: BTreeSet<Capability>,
}

impl FakePermissions {
    pub fn granting(capabilities: &[Capability]) -> Self {
        Self {
            granted: capabilities.iter().copied().collect(),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

impl CapabilityChecker for FakePermissions {
    fn check(&self, capability: Capability, _member: Option<&str>) -> bool {
        self.granted.contains(&capability)
    }
}

/// Fixed locale list.
pub struct FakeLocales(pub Vec<Locale>);

impl FakeLocales {
    pub fn parse(tags: &[&str]) -> Self {
        Self(
            tags.iter()
                .map(|t| Locale::parse(*t).expect("test locale"))
                .collect(),
        )
    }
}

impl LocaleProvider for FakeLocales {
    fn locales(&self) -> Vec<Locale> {
        self.0.clone()
    }
}
