//! Mount readiness gate.
//!
//! Container dimensions are not trustworthy until every embedded media item
//! has finished loading, so the first centering waits for all of them. A
//! failed load resolves its wait exactly like a successful one; otherwise a
//! single broken image would keep the viewport unpositioned forever.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

/// Identifier the host assigns to an embedded media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaId(pub u64);

/// Load state of a media item at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaStatus {
    /// Already decoded (or already failed); does not block readiness.
    Complete,
    /// Still loading; readiness waits for its outcome.
    Pending(MediaId),
}

/// How a pending media item finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaOutcome {
    /// The item loaded.
    Loaded,
    /// The item failed to load.
    Failed,
}

/// Tracks outstanding media and whether the surface is ready to position.
#[derive(Debug, Clone, Default)]
pub struct ReadinessGate {
    mounted: bool,
    pending: FxHashSet<MediaId>,
}

impl ReadinessGate {
    /// Creates a gate for a widget that is not mounted yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the gate for a freshly mounted surface containing `media`.
    ///
    /// Returns true if readiness is immediate.
    pub fn mount(&mut self, media: impl IntoIterator<Item = MediaStatus>) -> bool {
        self.mounted = true;
        self.pending = media
            .into_iter()
            .filter_map(|status| match status {
                MediaStatus::Complete => None,
                MediaStatus::Pending(id) => Some(id),
            })
            .collect();

        if self.pending.is_empty() {
            debug!("mounted without pending media; ready");
        } else {
            debug!(pending = self.pending.len(), "waiting for media before positioning");
        }
        self.is_ready()
    }

    /// Records the outcome of a pending media item.
    ///
    /// Returns true if this outcome made the gate ready. Unknown or repeated
    /// ids are ignored.
    pub fn resolve(&mut self, id: MediaId, outcome: MediaOutcome) -> bool {
        if !self.mounted || !self.pending.remove(&id) {
            trace!(?id, "ignoring outcome for untracked media");
            return false;
        }
        trace!(?id, ?outcome, remaining = self.pending.len(), "media resolved");
        if self.pending.is_empty() {
            debug!("all media resolved; ready");
            return true;
        }
        false
    }

    /// True once mounted with no outstanding media.
    pub fn is_ready(&self) -> bool {
        self.mounted && self.pending.is_empty()
    }

    /// Number of media items still loading.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Closes the gate again, forgetting outstanding media.
    pub fn reset(&mut self) {
        self.mounted = false;
        self.pending.clear();
    }
}
