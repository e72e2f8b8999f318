//! Persistent announcement state
//!
//! Tracks which events have already had their "soon" and "live"
//! announcements sent, so a restart never re-fires a committed
//! notification. Stored as a small JSON file:
//!
//! ```json
//! {"soon": ["<event id>", ...], "live": ["<event id>", ...]}
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Announcement keys that have already fired, per window kind.
///
/// Keys enter a set exactly once and are never removed; events do not recur.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementState {
    #[serde(default)]
    pub soon: BTreeSet<String>,
    #[serde(default)]
    pub live: BTreeSet<String>,
}

impl AnnouncementState {
    /// Load state from disk. A missing or unreadable file is treated as
    /// "nothing announced yet" rather than an error.
    pub fn load(path: &Path) -> Self {
        load_json_or_default(path)
    }

    /// Write state to disk atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_json_atomic(path, self)
    }
}

/// Read a JSON file. `None` means the file is missing, unreadable, or
/// corrupt; corruption is logged but not fatal.
pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            if path.exists() {
                warn!("Could not read {}: {e}", path.display());
            }
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring corrupt file {}: {e}", path.display());
            None
        }
    }
}

/// Read a JSON file, falling back to `T::default()` when [`load_json`]
/// cannot produce a value.
pub(crate) fn load_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    load_json(path).unwrap_or_default()
}

/// Serialize `value` to JSON and replace `path` via a temp file + rename,
/// so readers never observe a half-written file.
pub(crate) fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("renaming into {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("herald-state-{}-{name}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let state = AnnouncementState::load(&temp_path("missing.json"));
        assert!(state.soon.is_empty());
        assert!(state.live.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let path = temp_path("corrupt.json");
        fs::write(&path, "{not json").unwrap();
        let state = AnnouncementState::load(&path);
        assert_eq!(state, AnnouncementState::default());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_path("roundtrip.json");
        let mut state = AnnouncementState::default();
        state.soon.insert("a".to_string());
        state.live.insert("b".to_string());
        state.save(&path).unwrap();

        let loaded = AnnouncementState::load(&path);
        assert_eq!(loaded, state);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let path = temp_path("no-tmp.json");
        AnnouncementState::default().save(&path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_file_format_matches_expected_shape() {
        let path = temp_path("shape.json");
        let mut state = AnnouncementState::default();
        state.soon.insert("key-1".to_string());
        state.save(&path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["soon"], serde_json::json!(["key-1"]));
        assert_eq!(value["live"], serde_json::json!([]));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let state: AnnouncementState = serde_json::from_str("{}").unwrap();
        assert!(state.soon.is_empty());
        assert!(state.live.is_empty());
    }
}
