use crate::error::{ArborError, Result};
use crate::types::{EntryRecord, NameRecord, StoreFormat};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DATA_STORE_DIR: &str = "Data_Store";
pub const DEFAULT_JSON_NAME: &str = "dataStore.json";

/// `Data_Store` next to the running executable, or under the working
/// directory when the executable path cannot be resolved.
#[must_use]
pub fn default_data_store() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_STORE_DIR)
}

/// Turns a user supplied name into a JSON file name: every `.json` and then
/// every remaining dot is stripped before a single extension is appended.
#[must_use]
pub fn json_file_name(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return DEFAULT_JSON_NAME.to_string();
    }
    let stem = trimmed.replace(".json", "").replace('.', "");
    format!("{stem}.json")
}

pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| ArborError::io(dir, e))
}

/// Writes `records` as a 4-space indented JSON array.
pub fn write_records(path: &Path, records: &[EntryRecord], format: StoreFormat) -> Result<()> {
    let file = File::create(path).map_err(|e| ArborError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    match format {
        StoreFormat::FullData => write_pretty(&mut writer, records)?,
        StoreFormat::NamesOnly => {
            let names: Vec<NameRecord> = records
                .iter()
                .map(|r| NameRecord {
                    name: r.name.clone(),
                })
                .collect();
            write_pretty(&mut writer, &names)?;
        }
    }

    writer.flush().map_err(|e| ArborError::io(path, e))
}

fn write_pretty<W: Write, T: Serialize + ?Sized>(writer: W, value: &T) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut ser)?;
    Ok(())
}
