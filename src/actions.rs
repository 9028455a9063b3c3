use crate::config::Settings;
use crate::console::Console;
use crate::error::{ArborError, Result};
use crate::scanner;
use crate::store;
use crate::types::{EntryKind, EntryRecord, FilterCriteria, StoreFormat};
use colored::Colorize;
use comfy_table::{Cell, Color, Table};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const RULE_WIDE: usize = 60;

fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDE)
}

/// Shallow collection with user-facing reporting.
///
/// `None` means nothing could be collected: the path is missing, is a plain
/// file, or could not be listed. `Some(vec![])` means the directory was read
/// but nothing passed the filters (or the tree display mode was used).
pub fn collect_files<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    path: &Path,
    criteria: Option<&FilterCriteria>,
    settings: &Settings,
) -> Option<Vec<EntryRecord>> {
    if !path.exists() {
        console.say(format!("Error: Path '{}' does not exist.", path.display()));
        return None;
    }

    if path.is_file() {
        console.say("This is just a file. Skipping filter process...");
        let name = path
            .file_name()
            .map_or_else(String::new, |n| n.to_string_lossy().to_string());
        console.say(format!("File: {name}"));
        if let Ok(meta) = fs::metadata(path) {
            console.say(format!("Size: {} bytes", scanner::group_thousands(meta.len())));
            let location = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
            console.say(format!("Location: {}", location.display()));
        }
        return None;
    }

    if let Some(c) = criteria
        && c.show_tree
    {
        console.say(format!("\n{}", rule('=')));
        console.say(format!("DIRECTORY TREE: {}", path.display()));
        console.say(rule('='));
        scanner::print_tree(console.out(), path, 0, criteria, settings.sorted);
        console.say(format!("{}\n", rule('=')));
        return Some(Vec::new());
    }

    match scanner::collect_entries(path, criteria, settings.sorted) {
        Ok(data) => {
            console.say(format!(
                "\n{} Collected {} item(s) matching filters",
                "✓".green(),
                data.len()
            ));
            Some(data)
        }
        Err(e) if e.is_permission_denied() => {
            console.say(format!(
                "Error: Permission denied accessing '{}'",
                path.display()
            ));
            None
        }
        Err(e) => {
            console.say(format!("Error collecting files: {e}"));
            None
        }
    }
}

fn entries_table(records: &[EntryRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
    table.set_header(vec!["Name", "Type", "Size"]);

    for record in records {
        let kind_color = match record.kind {
            EntryKind::Directory => Color::Cyan,
            EntryKind::File => Color::White,
        };
        table.add_row(vec![
            Cell::new(&record.name),
            Cell::new(record.kind).fg(kind_color),
            Cell::new(&record.size),
        ]);
    }
    table
}

/// Menu choice 1: collect a directory and store the result as JSON.
pub fn collect_and_store<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    criteria: Option<&FilterCriteria>,
    settings: &Settings,
) {
    let path = console.ask("\nEnter directory path: ");
    let Some(data) = collect_files(console, Path::new(&path), criteria, settings) else {
        return;
    };

    if data.is_empty() {
        console.say("No files collected (filters may have excluded everything).");
        return;
    }

    console.say(entries_table(&data));

    let json_path = if console.confirm("\nCreate JSON file to store data? (yes/no): ") {
        match choose_store_location(console, settings) {
            Ok(path) => path,
            Err(e) => {
                console.say(format!("Error preparing data store: {e}"));
                return;
            }
        }
    } else {
        PathBuf::from(
            console
                .ask("Enter full path for JSON file (include .json): ")
                .trim(),
        )
    };

    console.say("\nStorage options:");
    console.say("1: Full data (Name, Type, Size)");
    console.say("2: Names only");
    let format = if console.ask("Choose (1 or 2): ").trim() == "2" {
        StoreFormat::NamesOnly
    } else {
        StoreFormat::FullData
    };

    match store::write_records(&json_path, &data, format) {
        Ok(()) => {
            log::info!("wrote {} record(s) to {}", data.len(), json_path.display());
            console.say(format!(
                "\n{} Data saved to: {}",
                "✓".green(),
                json_path.display()
            ));
        }
        Err(e) => console.say(format!("Error saving JSON: {e}")),
    }
}

fn choose_store_location<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &Settings,
) -> Result<PathBuf> {
    console.say("Do not include .json extension in the name");
    let name = console
        .ask("What would you like to name your JSON file? (Press Enter for 'dataStore'): ");
    let json_name = store::json_file_name(&name);
    console.say(format!("File will be named: {json_name}"));

    let location = console.ask(
        "Where to store JSON? (Press Enter to store in program's Data_Store folder): ",
    );
    let location = location.trim();

    if location.is_empty() {
        store::ensure_dir(&settings.data_store)?;
        let path = settings.data_store.join(&json_name);
        console.say(format!(
            "{} Using default location: {}",
            "✓".green(),
            path.display()
        ));
        Ok(path)
    } else if Path::new(location).is_dir() {
        let path = Path::new(location).join(&json_name);
        console.say(format!("{} Saving to: {}", "✓".green(), path.display()));
        Ok(path)
    } else {
        log::warn!("{location:?} is not a directory, falling back to the data store");
        console.say(format!(
            "{}  Invalid directory. Using program's Data_Store folder instead.",
            "⚠️".yellow()
        ));
        store::ensure_dir(&settings.data_store)?;
        let path = settings.data_store.join(&json_name);
        console.say(format!(
            "{} Fallback location: {}",
            "✓".green(),
            path.display()
        ));
        Ok(path)
    }
}

/// Menu choice 2: recursive file name search.
pub fn search<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    criteria: Option<&FilterCriteria>,
    settings: &Settings,
) {
    let path = console.ask("\nEnter directory path to search: ");
    let term = console.ask("Enter filename to search for: ").to_lowercase();

    console.say(format!("\nSearching for '{term}' in '{path}'..."));
    console.say(rule('-'));

    let mut found = 0usize;
    let mut total_bytes = 0u64;
    for hit in scanner::search_files(Path::new(&path), &term, criteria, settings.sorted) {
        found += 1;
        console.say(format!("\n[{found}] Found: {}", hit.name));
        console.say(format!("    Path: {}", hit.path.display()));
        if let Some(size) = hit.size {
            total_bytes += size;
            console.say(format!("    Size: {} bytes", scanner::group_thousands(size)));
        }
    }

    console.say(rule('-'));
    if found == 0 {
        console.say(format!("No files matching '{term}' found."));
    } else {
        console.say(format!(
            "{} Found {found} file(s) matching '{term}' ({} total)",
            "✓".green(),
            human_bytes::human_bytes(total_bytes as f64)
        ));
    }
}

/// Renames `source` to `destination`, or into it when `destination` is an
/// existing directory. Returns the final location.
pub fn move_path(source: &Path, destination: &Path) -> Result<PathBuf> {
    if !source.exists() {
        return Err(ArborError::NotFound(source.to_path_buf()));
    }

    let target = match source.file_name() {
        Some(name) if destination.is_dir() => {
            let inside = destination.join(name);
            if fs::symlink_metadata(&inside).is_ok() {
                return Err(ArborError::AlreadyExists(inside));
            }
            inside
        }
        _ => destination.to_path_buf(),
    };

    fs::rename(source, &target).map_err(|e| ArborError::io(source, e))?;
    Ok(target)
}

/// Menu choice 3: move a file or directory.
pub fn move_entry<R: BufRead, W: Write>(console: &mut Console<R, W>) {
    let source = console.ask("\nEnter path of file/directory to move: ");
    let source = Path::new(&source);

    if !source.exists() {
        console.say("Error: Source path does not exist.");
        return;
    }

    let destination = console.ask("Enter destination path: ");

    if source.is_dir() && !console.confirm("Moving a directory. Continue? (yes/no): ") {
        console.say("Move cancelled.");
        return;
    }

    match move_path(source, Path::new(&destination)) {
        Ok(target) => {
            log::info!("moved {} to {}", source.display(), target.display());
            console.say(format!(
                "{} Moved '{}' to '{destination}'",
                "✓".green(),
                source.display()
            ));
        }
        Err(e) => console.say(format!("Error moving: {e}")),
    }
}

/// Menu choice 4: delete a file, a whole directory, or the files of a
/// directory that pass the filters.
pub fn delete<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    criteria: Option<&FilterCriteria>,
    settings: &Settings,
) {
    console.say(format!(
        "\n{}",
        "⚠️  WARNING: DELETION IS PERMANENT!".red().bold()
    ));
    console.say("Proceed with caution.".yellow());

    let target = console.ask("\nEnter path to delete: ");
    let target_path = Path::new(&target);

    if !target_path.exists() {
        console.say(format!("Error: Path '{target}' does not exist."));
        return;
    }

    if target_path.is_file() {
        if !console.confirm(&format!("Delete '{target}'? (yes/no): ")) {
            console.say("Deletion cancelled.");
            return;
        }
        match fs::remove_file(target_path) {
            Ok(()) => {
                log::info!("deleted file {target}");
                console.say(format!("{} Deleted: {target}", "✓".green()));
            }
            Err(e) => console.say(format!("Error deleting: {e}")),
        }
        return;
    }

    if !target_path.is_dir() {
        return;
    }

    match criteria {
        Some(c) => delete_matching(console, target_path, c, settings),
        None => {
            let prompt =
                format!("Delete ENTIRE directory '{target}' and all contents? (yes/no): ");
            if !console.confirm(&prompt) {
                console.say("Deletion cancelled.");
                return;
            }
            match fs::remove_dir_all(target_path) {
                Ok(()) => {
                    log::info!("deleted directory tree {target}");
                    console.say(format!("{} Deleted: {target}", "✓".green()));
                }
                Err(e) => console.say(format!("Error deleting: {e}")),
            }
        }
    }
}

fn delete_matching<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dir: &Path,
    criteria: &FilterCriteria,
    settings: &Settings,
) {
    console.say("\nFilters active - will delete only matching files in directory.");

    let data = match collect_files(console, dir, Some(criteria), settings) {
        Some(data) if !data.is_empty() => data,
        _ => {
            console.say("No files match filters. Nothing to delete.");
            return;
        }
    };

    console.say(format!("\nFiles to delete ({}):", data.len()));
    for item in &data {
        console.say(format!("  - {}", item.name));
    }

    if !console.confirm(&format!("\nDelete all {} file(s)? (yes/no): ", data.len())) {
        console.say("Deletion cancelled.");
        return;
    }

    let mut deleted = 0usize;
    for item in &data {
        let path = dir.join(&item.name);
        // Matched directories are listed but never removed here.
        if !path.is_file() {
            continue;
        }
        match fs::remove_file(&path) {
            Ok(()) => {
                deleted += 1;
                log::info!("deleted {}", path.display());
                console.say(format!("  {} Deleted: {}", "✓".green(), item.name));
            }
            Err(e) => console.say(format!(
                "  {} Error deleting {}: {e}",
                "✗".red(),
                item.name
            )),
        }
    }

    console.say(format!(
        "\n{} Deleted {deleted}/{} file(s)",
        "✓".green(),
        data.len()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::tests::{scripted, transcript};
    use tempfile::TempDir;

    fn settings(store: &Path) -> Settings {
        Settings::new(Some(store.to_path_buf()), true)
    }

    fn path_str(p: &Path) -> String {
        p.to_string_lossy().to_string()
    }

    #[test]
    fn test_collect_files_missing_path_is_absent() {
        let dir = TempDir::new().unwrap();
        let mut console = scripted(&[]);
        let missing = dir.path().join("missing");

        let result = collect_files(&mut console, &missing, None, &settings(dir.path()));

        assert!(result.is_none());
        assert!(transcript(console).contains("does not exist"));
    }

    #[test]
    fn test_collect_files_plain_file_is_absent() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("one.txt");
        fs::write(&file, b"12345").unwrap();
        let mut console = scripted(&[]);

        let result = collect_files(&mut console, &file, None, &settings(dir.path()));

        assert!(result.is_none());
        let out = transcript(console);
        assert!(out.contains("This is just a file"));
        assert!(out.contains("Size: 5 bytes"));
    }

    #[test]
    fn test_collect_files_filtered_out_is_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), b"x").unwrap();
        let criteria = FilterCriteria {
            only_json: true,
            ..Default::default()
        };
        let mut console = scripted(&[]);

        let result = collect_files(&mut console, dir.path(), Some(&criteria), &settings(dir.path()));

        assert_eq!(result, Some(Vec::new()));
    }

    #[test]
    fn test_collect_files_tree_mode_prints_tree() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.txt"), b"abc").unwrap();
        let criteria = FilterCriteria {
            show_tree: true,
            ..Default::default()
        };
        let mut console = scripted(&[]);

        let result = collect_files(&mut console, dir.path(), Some(&criteria), &settings(dir.path()));

        assert_eq!(result, Some(Vec::new()));
        let out = transcript(console);
        assert!(out.contains("DIRECTORY TREE:"));
        assert!(out.contains("|-- nested/\n  |-- deep.txt (3 bytes)"));
    }

    #[test]
    fn test_collect_and_store_round_trip_default_location() {
        let work = TempDir::new().unwrap();
        let src = work.path().join("src");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("a.txt"), vec![b'a'; 10]).unwrap();
        fs::create_dir(src.join("sub")).unwrap();
        let store_dir = work.path().join("Data_Store");

        let src_arg = path_str(&src);
        let mut console = scripted(&[&src_arg, "yes", "listing.json", "", "1"]);
        collect_and_store(&mut console, None, &settings(&store_dir));

        let written = store_dir.join("listing.json");
        let text = fs::read_to_string(&written).unwrap();
        let records: Vec<EntryRecord> = serde_json::from_str(&text).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "a.txt");
        assert_eq!(records[0].kind, EntryKind::File);
        assert_eq!(records[0].size, "0.01 KB");
        assert_eq!(records[1].name, "sub");
        assert_eq!(records[1].kind, EntryKind::Directory);
        assert!(text.contains("\"Type\": \"Directory\""));
        assert!(transcript(console).contains("Data saved to:"));
    }

    #[test]
    fn test_collect_and_store_names_only_in_chosen_dir() {
        let work = TempDir::new().unwrap();
        fs::write(work.path().join("x.jar"), b"x").unwrap();
        let out_dir = work.path().join("out");
        fs::create_dir(&out_dir).unwrap();

        let src_arg = path_str(work.path());
        let out_arg = path_str(&out_dir);
        let mut console = scripted(&[&src_arg, "yes", "", &out_arg, "2"]);
        let criteria = FilterCriteria {
            only_jar: true,
            only_files: true,
            ..Default::default()
        };
        collect_and_store(&mut console, Some(&criteria), &settings(&work.path().join("unused")));

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out_dir.join("dataStore.json")).unwrap())
                .unwrap();
        assert_eq!(value, serde_json::json!([{ "Name": "x.jar" }]));
        assert!(!work.path().join("unused").exists());
    }

    #[test]
    fn test_collect_and_store_invalid_location_falls_back() {
        let work = TempDir::new().unwrap();
        let src = work.path().join("src");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("a.txt"), b"a").unwrap();
        let store_dir = work.path().join("store");

        let src_arg = path_str(&src);
        let bogus = path_str(&work.path().join("not-a-dir"));
        let mut console = scripted(&[&src_arg, "yes", "r.e.p", &bogus, "1"]);
        collect_and_store(&mut console, None, &settings(&store_dir));

        assert!(store_dir.join("rep.json").is_file());
        assert!(transcript(console).contains("Invalid directory"));
    }

    #[test]
    fn test_collect_and_store_explicit_path() {
        let work = TempDir::new().unwrap();
        let src = work.path().join("src");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("a.txt"), b"a").unwrap();
        let target = work.path().join("custom.json");

        let src_arg = path_str(&src);
        let target_arg = path_str(&target);
        let mut console = scripted(&[&src_arg, "no", &target_arg, "1"]);
        collect_and_store(&mut console, None, &settings(&work.path().join("store")));

        assert!(target.is_file());
    }

    #[test]
    fn test_collect_and_store_empty_result_writes_nothing() {
        let work = TempDir::new().unwrap();
        let store_dir = work.path().join("store");
        let src = work.path().join("src");
        fs::create_dir(&src).unwrap();

        let src_arg = path_str(&src);
        let mut console = scripted(&[&src_arg]);
        collect_and_store(&mut console, None, &settings(&store_dir));

        assert!(!store_dir.exists());
        assert!(transcript(console).contains("No files collected"));
    }

    #[test]
    fn test_search_reports_running_count() {
        let work = TempDir::new().unwrap();
        fs::create_dir(work.path().join("logs")).unwrap();
        fs::write(work.path().join("app.log"), vec![b'x'; 1_500]).unwrap();
        fs::write(work.path().join("logs").join("error.LOG"), b"e").unwrap();
        fs::write(work.path().join("readme.md"), b"r").unwrap();

        let root = path_str(work.path());
        let mut console = scripted(&[&root, "Log"]);
        search(&mut console, None, &settings(work.path()));
        let out = transcript(console);

        assert!(out.contains("[1] Found: app.log"));
        assert!(out.contains("Size: 1,500 bytes"));
        assert!(out.contains("[2] Found: error.LOG"));
        assert!(!out.contains("readme.md"));
        assert!(out.contains("Found 2 file(s) matching 'log'"));
    }

    #[test]
    fn test_search_without_hits() {
        let work = TempDir::new().unwrap();
        let root = path_str(work.path());
        let mut console = scripted(&[&root, "nothing"]);
        search(&mut console, None, &settings(work.path()));

        assert!(transcript(console).contains("No files matching 'nothing' found."));
    }

    #[test]
    fn test_move_path_into_existing_directory() {
        let work = TempDir::new().unwrap();
        let file = work.path().join("a.txt");
        fs::write(&file, b"a").unwrap();
        let dest = work.path().join("dest");
        fs::create_dir(&dest).unwrap();

        let target = move_path(&file, &dest).unwrap();

        assert_eq!(target, dest.join("a.txt"));
        assert!(target.is_file());
        assert!(!file.exists());
    }

    #[test]
    fn test_move_path_refuses_to_replace_existing_entry() {
        let work = TempDir::new().unwrap();
        let file = work.path().join("a.txt");
        fs::write(&file, b"new").unwrap();
        let dest = work.path().join("dest");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("a.txt"), b"precious").unwrap();

        let err = move_path(&file, &dest).unwrap_err();

        assert!(matches!(err, ArborError::AlreadyExists(ref p) if *p == dest.join("a.txt")));
        assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "precious");
        assert_eq!(fs::read_to_string(&file).unwrap(), "new");
    }

    #[test]
    fn test_move_directory_into_dir_with_same_name_is_refused() {
        let work = TempDir::new().unwrap();
        let src = work.path().join("folder");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("inner.txt"), b"i").unwrap();
        let dest = work.path().join("dest");
        fs::create_dir_all(dest.join("folder")).unwrap();

        let src_arg = path_str(&src);
        let dest_arg = path_str(&dest);
        let mut console = scripted(&[&src_arg, &dest_arg, "yes"]);
        move_entry(&mut console);

        assert!(src.join("inner.txt").is_file());
        assert!(dest.join("folder").is_dir());
        assert!(!dest.join("folder").join("inner.txt").exists());
        assert!(transcript(console).contains("already exists"));
    }

    #[test]
    fn test_move_path_missing_source() {
        let work = TempDir::new().unwrap();
        let err = move_path(&work.path().join("nope"), work.path()).unwrap_err();
        assert!(matches!(err, ArborError::NotFound(_)));
    }

    #[test]
    fn test_move_directory_declined_changes_nothing() {
        let work = TempDir::new().unwrap();
        let src = work.path().join("folder");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("inner.txt"), b"i").unwrap();
        let dest = work.path().join("renamed");

        let src_arg = path_str(&src);
        let dest_arg = path_str(&dest);
        let mut console = scripted(&[&src_arg, &dest_arg, "no"]);
        move_entry(&mut console);

        assert!(src.join("inner.txt").is_file());
        assert!(!dest.exists());
        assert!(transcript(console).contains("Move cancelled."));
    }

    #[test]
    fn test_move_directory_confirmed() {
        let work = TempDir::new().unwrap();
        let src = work.path().join("folder");
        fs::create_dir(&src).unwrap();
        let dest = work.path().join("renamed");

        let src_arg = path_str(&src);
        let dest_arg = path_str(&dest);
        let mut console = scripted(&[&src_arg, &dest_arg, "yes"]);
        move_entry(&mut console);

        assert!(dest.is_dir());
        assert!(!src.exists());
    }

    #[test]
    fn test_move_file_needs_no_confirmation() {
        let work = TempDir::new().unwrap();
        let src = work.path().join("a.txt");
        fs::write(&src, b"a").unwrap();
        let dest = work.path().join("b.txt");

        let src_arg = path_str(&src);
        let dest_arg = path_str(&dest);
        let mut console = scripted(&[&src_arg, &dest_arg]);
        move_entry(&mut console);

        assert!(dest.is_file());
        assert!(transcript(console).contains("Moved"));
    }

    #[test]
    fn test_move_missing_source_reports_error() {
        let work = TempDir::new().unwrap();
        let src_arg = path_str(&work.path().join("ghost"));
        let mut console = scripted(&[&src_arg]);
        move_entry(&mut console);

        assert!(transcript(console).contains("Error: Source path does not exist."));
    }

    #[test]
    fn test_delete_with_filter_removes_only_matches() {
        let work = TempDir::new().unwrap();
        fs::write(work.path().join("keep.txt"), b"k").unwrap();
        fs::write(work.path().join("drop.log"), b"d").unwrap();
        let criteria = FilterCriteria {
            include_keyword: Some("log".to_string()),
            ..Default::default()
        };

        let target = path_str(work.path());
        let mut console = scripted(&[&target, "yes"]);
        delete(&mut console, Some(&criteria), &settings(work.path()));

        assert!(work.path().join("keep.txt").exists());
        assert!(!work.path().join("drop.log").exists());
        assert!(transcript(console).contains("Deleted 1/1 file(s)"));
    }

    #[test]
    fn test_delete_with_filter_skips_matched_directories() {
        let work = TempDir::new().unwrap();
        fs::write(work.path().join("a.txt"), b"a").unwrap();
        fs::create_dir(work.path().join("sub")).unwrap();

        let target = path_str(work.path());
        let mut console = scripted(&[&target, "yes"]);
        delete(
            &mut console,
            Some(&FilterCriteria::default()),
            &settings(work.path()),
        );

        assert!(!work.path().join("a.txt").exists());
        assert!(work.path().join("sub").is_dir());
        assert!(transcript(console).contains("Deleted 1/2 file(s)"));
    }

    #[test]
    fn test_delete_with_filter_and_no_matches() {
        let work = TempDir::new().unwrap();
        fs::write(work.path().join("a.txt"), b"a").unwrap();
        let criteria = FilterCriteria {
            only_jar: true,
            only_files: true,
            ..Default::default()
        };

        let target = path_str(work.path());
        let mut console = scripted(&[&target]);
        delete(&mut console, Some(&criteria), &settings(work.path()));

        assert!(work.path().join("a.txt").exists());
        assert!(transcript(console).contains("Nothing to delete."));
    }

    #[test]
    fn test_delete_whole_directory() {
        let work = TempDir::new().unwrap();
        let victim = work.path().join("victim");
        fs::create_dir_all(victim.join("deep")).unwrap();
        fs::write(victim.join("deep").join("f.txt"), b"f").unwrap();

        let target = path_str(&victim);
        let mut console = scripted(&[&target, "yes"]);
        delete(&mut console, None, &settings(work.path()));

        assert!(!victim.exists());
    }

    #[test]
    fn test_delete_declined_keeps_file() {
        let work = TempDir::new().unwrap();
        let file = work.path().join("precious.txt");
        fs::write(&file, b"p").unwrap();

        let target = path_str(&file);
        let mut console = scripted(&[&target, "no"]);
        delete(&mut console, None, &settings(work.path()));

        assert!(file.exists());
        assert!(transcript(console).contains("Deletion cancelled."));
    }

    #[test]
    fn test_delete_padded_yes_keeps_directory() {
        let work = TempDir::new().unwrap();
        let victim = work.path().join("victim");
        fs::create_dir(&victim).unwrap();

        let target = path_str(&victim);
        let mut console = scripted(&[&target, " yes"]);
        delete(&mut console, None, &settings(work.path()));

        assert!(victim.is_dir());
        assert!(transcript(console).contains("Deletion cancelled."));
    }

    #[test]
    fn test_delete_single_file() {
        let work = TempDir::new().unwrap();
        let file = work.path().join("gone.txt");
        fs::write(&file, b"g").unwrap();

        let target = path_str(&file);
        let mut console = scripted(&[&target, "yes"]);
        // Filters do not matter for a file target.
        delete(
            &mut console,
            Some(&FilterCriteria::default()),
            &settings(work.path()),
        );

        assert!(!file.exists());
    }

    #[test]
    fn test_delete_missing_target() {
        let work = TempDir::new().unwrap();
        let target = path_str(&work.path().join("ghost"));
        let mut console = scripted(&[&target]);
        delete(&mut console, None, &settings(work.path()));

        assert!(transcript(console).contains("does not exist"));
    }
}
