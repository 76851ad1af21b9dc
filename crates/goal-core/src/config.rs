//! Board Configuration
//!
//! Names of the storage slot and of the exported file.

/// Storage slot holding the persisted snapshot
pub const DEFAULT_STORAGE_KEY: &str = "goals";
/// File name offered for downloads
pub const DEFAULT_EXPORT_FILE_NAME: &str = "goals.json";
/// Content type of exported files
pub const DEFAULT_EXPORT_MIME_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub storage_key: String,
    pub export_file_name: String,
    pub export_mime_type: String,
}

impl BoardConfig {
    /// Default configuration with a different storage slot.
    pub fn with_storage_key(key: impl Into<String>) -> Self {
        Self {
            storage_key: key.into(),
            ..Self::default()
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            export_mime_type: DEFAULT_EXPORT_MIME_TYPE.to_string(),
        }
    }
}
