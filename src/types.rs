use serde::{Deserialize, Serialize};
use std::fmt;

/// Filter selection made once per menu action. Every active flag must pass
/// for an entry to be included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub only_files: bool,
    pub only_dirs: bool,
    pub only_jar: bool,
    pub only_json: bool,
    pub smaller_than_1mb: bool,
    pub larger_than_1mb: bool,
    pub exclude_keyword: Option<String>,
    pub include_keyword: Option<String>,
    pub modified_last_24h: bool,
    pub modified_over_24h: bool,
    pub show_tree: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => write!(f, "File"),
            EntryKind::Directory => write!(f, "Directory"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: EntryKind,
    #[serde(rename = "Size")]
    pub size: String,
}

/// Names-only projection of an [`EntryRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    FullData,
    NamesOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub name: String,
    pub path: std::path::PathBuf,
    pub size: Option<u64>,
}
