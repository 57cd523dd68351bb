//! Immutable corpus snapshot and its one-time initialization cell.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::info;

use crate::errors::{CorpusError, ScoutResult};
use crate::models::EntityRecord;
use crate::traits::ICorpusProvider;

use super::matching::{fold, match_folded, MatchKind};

/// A roster entry matched by name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NameMatch {
    pub index: usize,
    pub kind: MatchKind,
    pub score: f64,
}

/// Read-only view over the loaded corpus. Cloning shares the records.
#[derive(Debug, Clone)]
pub struct CorpusSnapshot {
    records: Arc<[EntityRecord]>,
    folded_names: Arc<[String]>,
}

impl CorpusSnapshot {
    pub fn new(records: Vec<EntityRecord>) -> Self {
        let folded_names: Vec<String> = records.iter().map(|r| fold(&r.name)).collect();
        Self {
            records: records.into(),
            folded_names: folded_names.into(),
        }
    }

    pub fn records(&self) -> &[EntityRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&EntityRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Folded roster names, index-aligned with `records()`.
    pub fn folded_names(&self) -> &[String] {
        &self.folded_names
    }

    /// All roster entries matching `pattern`, best match first.
    pub fn search_names(&self, pattern: &str, fuzzy_threshold: f64) -> Vec<NameMatch> {
        let pattern = fold(pattern);
        let mut matches: Vec<NameMatch> = self
            .folded_names
            .iter()
            .enumerate()
            .filter_map(|(index, name)| {
                match_folded(&pattern, name, fuzzy_threshold)
                    .map(|(kind, score)| NameMatch { index, kind, score })
            })
            .collect();
        matches.sort_by(|a, b| {
            a.kind
                .cmp(&b.kind)
                .then_with(|| b.score.total_cmp(&a.score))
                .then_with(|| self.records[b.index].minutes.cmp(&self.records[a.index].minutes))
                .then_with(|| a.index.cmp(&b.index))
        });
        matches
    }

    /// Best single roster entry for a name, if any.
    pub fn resolve(&self, name: &str, fuzzy_threshold: f64) -> Option<&EntityRecord> {
        self.search_names(name, fuzzy_threshold)
            .first()
            .map(|m| &self.records[m.index])
    }

    pub fn teams(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.team.as_str()).collect()
    }
}

/// Holds the process-wide snapshot. The provider runs at most once.
pub struct SnapshotCell {
    cell: OnceLock<CorpusSnapshot>,
    init_lock: Mutex<()>,
}

impl Default for SnapshotCell {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotCell {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// Load the snapshot from `provider`. Fails if already initialized.
    pub fn initialize(&self, provider: &dyn ICorpusProvider) -> ScoutResult<&CorpusSnapshot> {
        let _guard = self
            .init_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if self.cell.get().is_some() {
            return Err(CorpusError::AlreadyInitialized.into());
        }
        self.load_locked(provider)
    }

    /// Return the snapshot, loading it from `provider` on first use.
    pub fn get_or_load(&self, provider: &dyn ICorpusProvider) -> ScoutResult<&CorpusSnapshot> {
        if let Some(snapshot) = self.cell.get() {
            return Ok(snapshot);
        }
        let _guard = self
            .init_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(snapshot) = self.cell.get() {
            return Ok(snapshot);
        }
        self.load_locked(provider)
    }

    pub fn get(&self) -> ScoutResult<&CorpusSnapshot> {
        self.cell
            .get()
            .ok_or_else(|| CorpusError::NotInitialized.into())
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    fn load_locked(&self, provider: &dyn ICorpusProvider) -> ScoutResult<&CorpusSnapshot> {
        let records = provider.load()?;
        info!(provider = provider.name(), records = records.len(), "corpus snapshot loaded");
        let _ = self.cell.set(CorpusSnapshot::new(records));
        self.get()
    }
}
