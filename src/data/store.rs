//! Last-known snapshot holder
//!
//! Updates swap the whole snapshot before a render pass reads it, so a render
//! never observes half of one snapshot and half of another.

use std::sync::Arc;

use super::source::SnapshotSource;
use super::types::DashboardSnapshot;

/// How the currently held snapshot was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// The last refresh succeeded
    Fresh,
    /// The last refresh failed; an older snapshot is being shown
    Stale,
    /// No refresh has ever succeeded
    Placeholder,
}

/// Holds the snapshot every render reads from
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    current: Arc<DashboardSnapshot>,
    freshness: Freshness,
    generation: u64,
}

impl SnapshotStore {
    /// Start with an empty placeholder snapshot
    pub fn new() -> Self {
        Self {
            current: Arc::new(DashboardSnapshot::empty()),
            freshness: Freshness::Placeholder,
            generation: 0,
        }
    }

    /// Snapshot for the next render pass
    pub fn current(&self) -> Arc<DashboardSnapshot> {
        Arc::clone(&self.current)
    }

    pub fn freshness(&self) -> Freshness {
        self.freshness
    }

    /// Number of snapshots accepted so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the held snapshot in one step
    pub fn replace(&mut self, snapshot: DashboardSnapshot) {
        self.current = Arc::new(snapshot);
        self.freshness = Freshness::Fresh;
        self.generation += 1;
    }

    /// Pull from `source`, keeping the previous snapshot if it fails
    pub fn refresh(&mut self, source: &dyn SnapshotSource) -> Freshness {
        match source.fetch() {
            Ok(snapshot) => {
                tracing::debug!(
                    source = source.name(),
                    cards = snapshot.summaries.len(),
                    points = snapshot.series.len(),
                    "Snapshot refreshed"
                );
                self.replace(snapshot);
            }
            Err(e) => {
                tracing::warn!(
                    source = source.name(),
                    error = %e,
                    "Snapshot refresh failed, keeping last known data"
                );
                if self.freshness != Freshness::Placeholder {
                    self.freshness = Freshness::Stale;
                }
            }
        }
        self.freshness
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}
