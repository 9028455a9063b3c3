use crate::console::Console;
use crate::types::FilterCriteria;
use chrono::{DateTime, Local};
use colored::Colorize;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

const ONE_MIB: u64 = 1_024 * 1_024;
const DAY_MILLIS: i64 = 24 * 60 * 60 * 1_000;

const FILTER_MENU: [&str; 11] = [
    "1: Only files",
    "2: Only directories",
    "3: Only JAR files",
    "4: Only JSON files",
    "5: Files smaller than 1 MB",
    "6: Files larger than 1 MB",
    "7: Exclude files with keyword",
    "8: Include only files with keyword",
    "9: Modified in last 24 hours",
    "10: Modified over 24 hours ago",
    "11: Show directory tree (special display mode)",
];

impl FilterCriteria {
    /// Decides whether one entry passes every active filter.
    ///
    /// Directories are only subject to the files/directories flags; every
    /// other filter targets files. A size that cannot be read lets the entry
    /// through, while an unreadable modification time excludes it.
    #[must_use]
    pub fn should_include(&self, name: &str, full_path: &Path, is_dir: bool) -> bool {
        if self.only_files && is_dir {
            return false;
        }
        if self.only_dirs && !is_dir {
            return false;
        }
        if is_dir {
            return true;
        }

        let lower_name = name.to_lowercase();

        if self.only_jar && !lower_name.ends_with(".jar") {
            return false;
        }
        if self.only_json && !lower_name.ends_with(".json") {
            return false;
        }

        if (self.smaller_than_1mb || self.larger_than_1mb)
            && let Ok(meta) = fs::metadata(full_path)
        {
            let size = meta.len();
            if self.smaller_than_1mb && size >= ONE_MIB {
                return false;
            }
            if self.larger_than_1mb && size < ONE_MIB {
                return false;
            }
        }

        if let Some(keyword) = active_keyword(self.exclude_keyword.as_deref())
            && lower_name.contains(&keyword)
        {
            return false;
        }
        if let Some(keyword) = active_keyword(self.include_keyword.as_deref())
            && !lower_name.contains(&keyword)
        {
            return false;
        }

        if self.modified_last_24h || self.modified_over_24h {
            let Some(age_ms) = modified_age_millis(full_path) else {
                return false;
            };
            if self.modified_last_24h && age_ms > DAY_MILLIS {
                return false;
            }
            if self.modified_over_24h && age_ms <= DAY_MILLIS {
                return false;
            }
        }

        true
    }

    /// Sets the flag behind a numeric menu token and returns its label.
    /// Keyword tokens (7, 8) and unknown tokens return `None`.
    pub fn apply_flag(&mut self, token: &str) -> Option<&'static str> {
        let label = match token {
            "1" => {
                self.only_files = true;
                "Only files"
            }
            "2" => {
                self.only_dirs = true;
                "Only directories"
            }
            "3" => {
                self.only_jar = true;
                "Only JAR files"
            }
            "4" => {
                self.only_json = true;
                "Only JSON files"
            }
            "5" => {
                self.smaller_than_1mb = true;
                "Files < 1 MB"
            }
            "6" => {
                self.larger_than_1mb = true;
                "Files > 1 MB"
            }
            "9" => {
                self.modified_last_24h = true;
                "Modified < 24h ago"
            }
            "10" => {
                self.modified_over_24h = true;
                "Modified > 24h ago"
            }
            "11" => {
                self.show_tree = true;
                "Directory tree"
            }
            _ => return None,
        };
        Some(label)
    }

    /// Files-only and directories-only together can never match anything.
    #[must_use]
    pub fn has_conflicting_kinds(&self) -> bool {
        self.only_files && self.only_dirs
    }
}

fn active_keyword(keyword: Option<&str>) -> Option<String> {
    keyword.filter(|k| !k.is_empty()).map(str::to_lowercase)
}

fn modified_age_millis(path: &Path) -> Option<i64> {
    let modified: DateTime<Local> = fs::metadata(path).ok()?.modified().ok()?.into();
    Some(
        Local::now()
            .signed_duration_since(modified)
            .num_milliseconds(),
    )
}

/// Splits a comma separated selection such as `"1, 3,8"` into tokens.
#[must_use]
pub fn parse_selection(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Interactive filter setup. `None` means the user declined filtering.
pub fn setup_filters<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Option<FilterCriteria> {
    if !console.confirm("Do you want to apply any filters? (yes or no): ") {
        return None;
    }

    console.say("\nAvailable filters:");
    for line in FILTER_MENU {
        console.say(line);
    }
    console.say("\nTo select multiple filters, separate with commas (e.g., 1,3,8)");

    let selection = console.ask("Enter filter numbers (1-11): ");
    let mut criteria = FilterCriteria::default();

    for token in parse_selection(&selection) {
        match token.as_str() {
            "7" => {
                let keyword = console.ask("Enter keyword to EXCLUDE: ");
                console.say(format!("{} Filter: Exclude '{keyword}'", "✓".green()));
                criteria.exclude_keyword = Some(keyword);
            }
            "8" => {
                let keyword = console.ask("Enter keyword to INCLUDE: ");
                console.say(format!("{} Filter: Include '{keyword}'", "✓".green()));
                criteria.include_keyword = Some(keyword);
            }
            other => match criteria.apply_flag(other) {
                Some(label) if other == "11" => {
                    console.say(format!("{} Special mode: {label}", "✓".green()));
                }
                Some(label) => console.say(format!("{} Filter: {label}", "✓".green())),
                None => log::debug!("ignoring unknown filter token {other:?}"),
            },
        }
    }

    if criteria.has_conflicting_kinds() {
        console.say(format!(
            "{} 'Only files' and 'Only directories' together match nothing.",
            "WARNING:".yellow()
        ));
    }

    Some(criteria)
}
