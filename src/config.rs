use std::path::PathBuf;

/// Session-wide settings resolved from the command line.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Where JSON exports land when the user accepts the default location.
    pub data_store: PathBuf,
    /// List entries by name instead of platform order.
    pub sorted: bool,
}

impl Settings {
    #[must_use]
    pub fn new(data_store: Option<PathBuf>, sorted: bool) -> Self {
        Settings {
            data_store: data_store.unwrap_or_else(crate::store::default_data_store),
            sorted,
        }
    }
}
