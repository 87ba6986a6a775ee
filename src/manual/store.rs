//! Manual store — ordered command → result map with snapshot persistence.
//!
//! Snapshot format: one JSON object keyed by the literal executed command
//! string, each value `{rc, out}` where `rc` is the numeric exit code or the
//! `"nok"` sentinel. Classification is not persisted; it is derived from
//! `rc` on reload. The snapshot is written atomically (temp file + rename),
//! wholesale per build run — a reader never sees a partially-written file.

use crate::exec::result::{ExecStatus, ExecutionResult, ReturnCode};
use crate::types::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

/// Persisted record for one command.
#[derive(Debug, Serialize, Deserialize)]
struct ManualEntry {
    rc: ReturnCode,
    out: String,
}

impl From<&ExecutionResult> for ManualEntry {
    fn from(result: &ExecutionResult) -> Self {
        Self {
            rc: result.returncode,
            out: result.output.clone(),
        }
    }
}

impl From<ManualEntry> for ExecutionResult {
    fn from(entry: ManualEntry) -> Self {
        let status = match entry.rc {
            ReturnCode::Incomplete => ExecStatus::Timeout,
            ReturnCode::Exit(0) => ExecStatus::Success,
            ReturnCode::Exit(_) => ExecStatus::Failed,
        };
        Self {
            returncode: entry.rc,
            output: entry.out,
            status,
        }
    }
}

/// Insertion-ordered map from invoked command string to its result.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ManualStore {
    entries: Vec<(String, ExecutionResult)>,
    index: HashMap<String, usize>,
}

impl ManualStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result. Re-recording a command replaces its result in place,
    /// keeping the original position.
    pub fn insert(&mut self, command: String, result: ExecutionResult) {
        match self.index.get(&command) {
            Some(&i) => self.entries[i].1 = result,
            None => {
                self.index.insert(command.clone(), self.entries.len());
                self.entries.push((command, result));
            }
        }
    }

    pub fn get(&self, command: &str) -> Option<&ExecutionResult> {
        self.index.get(command).map(|&i| &self.entries[i].1)
    }

    /// Recorded commands, in recording order.
    pub fn commands(&self) -> Vec<&str> {
        self.entries.iter().map(|(c, _)| c.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExecutionResult)> {
        self.entries.iter().map(|(c, r)| (c.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot as a JSON object in recording order.
    pub fn to_json(&self) -> Result<Value> {
        let mut map = Map::with_capacity(self.entries.len());
        for (command, result) in &self.entries {
            map.insert(command.clone(), serde_json::to_value(ManualEntry::from(result))?);
        }
        Ok(Value::Object(map))
    }

    /// Persist the snapshot atomically: write a sibling temp file, then
    /// rename over the target.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.to_json()?)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json.as_bytes()).map_err(|e| {
            Error::internal(format!("cannot write snapshot {}: {}", tmp.display(), e))
        })?;
        std::fs::rename(&tmp, path).map_err(|e| {
            Error::internal(format!("cannot move snapshot into place: {}", e))
        })?;
        Ok(())
    }

    /// Reload a snapshot. Key order and recorded fields survive the
    /// round-trip unchanged.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::internal(format!("cannot read snapshot {}: {}", path.display(), e))
        })?;
        let map: Map<String, Value> = serde_json::from_str(&raw)?;

        let mut store = Self::new();
        for (command, value) in map {
            let entry: ManualEntry = serde_json::from_value(value).map_err(|e| {
                Error::internal(format!("invalid snapshot entry for '{}': {}", command, e))
            })?;
            store.insert(command, entry.into());
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_store() -> ManualStore {
        let mut store = ManualStore::new();
        store.insert(
            "dslist -h".to_string(),
            ExecutionResult::success("usage: dslist".to_string()),
        );
        store.insert(
            "mfed -h".to_string(),
            ExecutionResult::timeout(),
        );
        store.insert(
            "mfcat -h".to_string(),
            ExecutionResult::failed(2, "unknown option".to_string()),
        );
        store
    }

    #[test]
    fn test_recording_order_preserved() {
        let store = sample_store();
        assert_eq!(store.commands(), vec!["dslist -h", "mfed -h", "mfcat -h"]);
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut store = sample_store();
        store.insert(
            "mfed -h".to_string(),
            ExecutionResult::success("recovered".to_string()),
        );
        assert_eq!(store.len(), 3);
        assert_eq!(store.commands()[1], "mfed -h");
        assert_eq!(store.get("mfed -h").unwrap().status, ExecStatus::Success);
    }

    #[test]
    fn test_snapshot_wire_format() {
        let store = sample_store();
        let json = store.to_json().unwrap();
        assert_eq!(json["dslist -h"]["rc"], 0);
        assert_eq!(json["dslist -h"]["out"], "usage: dslist");
        assert_eq!(json["mfed -h"]["rc"], "nok");
        assert_eq!(json["mfed -h"]["out"], "TIMEOUT");
        assert_eq!(json["mfcat -h"]["rc"], 2);
        // status is derived, never persisted
        assert!(json["dslist -h"].get("status").is_none());
    }

    #[test]
    fn test_save_load_round_trip_is_identical() {
        let store = sample_store();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("command_output.json");

        store.save(&path).unwrap();
        let reloaded = ManualStore::load(&path).unwrap();

        assert_eq!(store, reloaded);
        assert_eq!(reloaded.commands(), vec!["dslist -h", "mfed -h", "mfcat -h"]);
    }

    #[test]
    fn test_status_derived_on_reload() {
        let store = sample_store();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        store.save(&path).unwrap();

        let reloaded = ManualStore::load(&path).unwrap();
        assert_eq!(reloaded.get("dslist -h").unwrap().status, ExecStatus::Success);
        assert_eq!(reloaded.get("mfed -h").unwrap().status, ExecStatus::Timeout);
        assert_eq!(reloaded.get("mfcat -h").unwrap().status, ExecStatus::Failed);
    }

    #[test]
    fn test_save_replaces_previous_snapshot_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        sample_store().save(&path).unwrap();

        let mut smaller = ManualStore::new();
        smaller.insert(
            "sub -h".to_string(),
            ExecutionResult::success("ok".to_string()),
        );
        smaller.save(&path).unwrap();

        let reloaded = ManualStore::load(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.commands(), vec!["sub -h"]);
        // No stray temp file left behind
        assert!(!dir.path().join("out.json.tmp").exists());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = ManualStore::load(Path::new("/nonexistent/out.json")).unwrap_err();
        assert!(err.to_string().contains("cannot read snapshot"));
    }

    #[test]
    fn test_empty_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        let store = ManualStore::new();
        store.save(&path).unwrap();
        assert_eq!(ManualStore::load(&path).unwrap(), store);
    }
}
