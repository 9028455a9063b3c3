use crate::error::{ArborError, Result};
use crate::types::{EntryKind, EntryRecord, FilterCriteria, SearchHit};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One immediate child of a listed directory.
#[derive(Debug)]
pub struct DirEntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Shallow listing of `path`. Order is whatever the platform returns unless
/// `sorted` is set.
pub fn list_dir(path: &Path, sorted: bool) -> Result<Vec<DirEntryInfo>> {
    let read = fs::read_dir(path).map_err(|e| ArborError::io(path, e))?;

    let mut entries = Vec::new();
    for entry in read {
        let entry = entry.map_err(|e| ArborError::io(path, e))?;
        let full_path = entry.path();
        entries.push(DirEntryInfo {
            name: entry.file_name().to_string_lossy().to_string(),
            // Follows symlinks, so a link to a directory lists as a directory.
            is_dir: full_path.is_dir(),
            path: full_path,
        });
    }

    if sorted {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
    }
    Ok(entries)
}

fn passes(criteria: Option<&FilterCriteria>, entry: &DirEntryInfo) -> bool {
    criteria.is_none_or(|c| c.should_include(&entry.name, &entry.path, entry.is_dir))
}

/// Depth-first tree of `path`. Listing failures are rendered inline and never
/// stop the walk of sibling directories.
pub fn print_tree<W: Write>(
    out: &mut W,
    path: &Path,
    indent: usize,
    criteria: Option<&FilterCriteria>,
    sorted: bool,
) {
    let pad = "  ".repeat(indent);

    let entries = match list_dir(path, sorted) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("tree listing failed: {e}");
            writeln!(out, "{}", listing_error_line(&e, indent)).ok();
            return;
        }
    };

    for entry in entries.iter().filter(|e| passes(criteria, e)) {
        let prefix = format!("{pad}|-- ");
        if entry.is_dir {
            writeln!(out, "{prefix}{}/", entry.name).ok();
            print_tree(out, &entry.path, indent + 1, criteria, sorted);
        } else {
            match fs::metadata(&entry.path) {
                Ok(meta) => writeln!(
                    out,
                    "{prefix}{} ({} bytes)",
                    entry.name,
                    group_thousands(meta.len())
                )
                .ok(),
                Err(_) => writeln!(out, "{prefix}{}", entry.name).ok(),
            };
        }
    }
}

/// Inline placeholder printed in place of a directory that could not be listed.
#[must_use]
pub fn listing_error_line(err: &ArborError, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    if err.is_permission_denied() {
        format!("{pad}[Permission Denied]")
    } else {
        format!("{pad}[Error: {}]", error_message(err))
    }
}

fn error_message(err: &ArborError) -> String {
    match err {
        ArborError::Io { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}

/// Shallow collection of the entries of `path` that pass `criteria`.
pub fn collect_entries(
    path: &Path,
    criteria: Option<&FilterCriteria>,
    sorted: bool,
) -> Result<Vec<EntryRecord>> {
    let entries = list_dir(path, sorted)?;

    Ok(entries
        .iter()
        .filter(|e| passes(criteria, e))
        .map(|e| {
            let (kind, size) = if e.is_dir {
                (EntryKind::Directory, "0 bytes".to_string())
            } else {
                let size = fs::metadata(&e.path)
                    .map(|m| format_file_size(m.len()))
                    .unwrap_or_else(|_| "Unknown".to_string());
                (EntryKind::File, size)
            };
            EntryRecord {
                name: e.name.clone(),
                kind,
                size,
            }
        })
        .collect())
}

/// Recursive search for files whose name contains `term` (case-insensitive)
/// and that pass `criteria`. Unreadable subtrees are skipped.
pub fn search_files<'a>(
    root: &Path,
    term: &str,
    criteria: Option<&'a FilterCriteria>,
    sorted: bool,
) -> impl Iterator<Item = SearchHit> + 'a {
    let needle = term.to_lowercase();
    let mut walker = WalkDir::new(root).min_depth(1);
    if sorted {
        walker = walker.sort_by_file_name();
    }

    walker
        .into_iter()
        .filter_map(std::result::Result::ok)
        // Follows symlinks, so a link to a directory is never a match.
        .filter(|e| !e.path().is_dir())
        .filter_map(move |e| {
            let name = e.file_name().to_string_lossy().to_string();
            if !name.to_lowercase().contains(&needle) {
                return None;
            }
            if let Some(c) = criteria
                && !c.should_include(&name, e.path(), false)
            {
                return None;
            }
            let size = fs::metadata(e.path()).ok().map(|m| m.len());
            Some(SearchHit {
                name,
                path: e.into_path(),
                size,
            })
        })
}

/// KB below 1024 KB, MB above, two decimals.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    let size_kb = bytes as f64 / 1_024.0;
    if size_kb < 1_024.0 {
        format!("{size_kb:.2} KB")
    } else {
        format!("{:.2} MB", size_kb / 1_024.0)
    }
}

/// `1234567` -> `"1,234,567"`.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
