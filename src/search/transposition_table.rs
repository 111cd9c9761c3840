//! Fixed-size transposition table keyed by Zobrist hash.
//!
//! Direct indexing (`key % len`) with depth-preferred replacement. A table
//! built with zero bytes, or one whose allocation failed, is disabled:
//! probes miss and stores are dropped.

use tracing::{debug, warn};

use crate::errors::EngineError;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    pub key: u64,
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u8,
    pub bound: Bound,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TTStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
    pub used: usize,
    pub total: usize,
    pub utilization_percent: f64,
}

#[derive(Debug, Clone, Default)]
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    probes: u64,
    hits: u64,
    stores: u64,
}

impl TranspositionTable {
    pub fn with_megabytes(size_mb: usize) -> Self {
        Self::with_bytes(size_mb.saturating_mul(1024 * 1024))
    }

    pub fn with_bytes(bytes: usize) -> Self {
        if bytes == 0 {
            return Self::default();
        }
        let entry_size = std::mem::size_of::<Option<TTEntry>>().max(1);
        let count = (bytes / entry_size).max(1);

        let mut entries = Vec::new();
        if let Err(source) = entries.try_reserve_exact(count) {
            let err = EngineError::TableAllocation { entries: count };
            warn!(%err, %source, "transposition table disabled");
            return Self::default();
        }
        entries.resize(count, None);
        debug!(count, bytes, "transposition table allocated");
        Self {
            entries,
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        !self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    fn idx(&self, key: u64) -> usize {
        (key % self.entries.len() as u64) as usize
    }

    pub fn probe(&mut self, key: u64) -> Option<TTEntry> {
        if !self.is_enabled() {
            return None;
        }
        self.probes += 1;
        let idx = self.idx(key);
        let hit = self.entries[idx].filter(|e| e.key == key);
        if hit.is_some() {
            self.hits += 1;
        }
        hit
    }

    /// Replace when the slot is empty, holds another key, or is no deeper than `entry`.
    pub fn store(&mut self, entry: TTEntry) {
        if !self.is_enabled() {
            return;
        }
        self.stores += 1;
        let idx = self.idx(entry.key);
        let replace = match self.entries[idx] {
            None => true,
            Some(existing) => existing.key != entry.key || entry.depth >= existing.depth,
        };
        if replace {
            self.entries[idx] = Some(entry);
        }
    }

    /// Empty every slot and reset counters; capacity is kept.
    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.probes = 0;
        self.hits = 0;
        self.stores = 0;
    }

    /// Release the storage; the table is disabled afterwards.
    pub fn cleanup(&mut self) {
        self.entries = Vec::new();
        self.probes = 0;
        self.hits = 0;
        self.stores = 0;
    }

    pub fn stats(&self) -> TTStats {
        let used = self.entries.iter().filter(|e| e.is_some()).count();
        let total = self.entries.len();
        let utilization_percent = if total == 0 {
            0.0
        } else {
            used as f64 * 100.0 / total as f64
        };
        TTStats {
            probes: self.probes,
            hits: self.hits,
            stores: self.stores,
            used,
            total,
            utilization_percent,
        }
    }
}
