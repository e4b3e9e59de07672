// ABOUTME: Shared CLI utilities for opening the store and formatting rows

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::AppConfig;
use crate::storage::JsonFileStore;

/// Open the JSON store in the configured data directory
pub fn open_store(config: &AppConfig) -> Result<JsonFileStore> {
    let dir = config.data_dir().context("Could not determine data directory")?;
    debug!("Using data directory {}", dir.display());
    Ok(JsonFileStore::new(dir))
}

/// Truncate a string to fit in the given width (character-aware for UTF-8)
pub fn truncate(s: &str, max_len: usize) -> String {
    if max_len <= 3 {
        return ".".repeat(max_len);
    }
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}
