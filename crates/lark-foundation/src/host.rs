//! Runtime services a host toolkit exposes to attached controls.
//!
//! Controls never re-run layout or drawing themselves; they report which
//! pipeline stage their latest configuration change touched and the host
//! schedules the corresponding pass.

/// Identifies which part of the rendering pipeline should be re-run after
/// a control's configuration changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvalidationKind {
    Layout,
    Draw,
}

/// Runtime services exposed to controls while attached to a host.
pub trait HostContext {
    /// Requests that a particular pipeline stage be invalidated.
    fn invalidate(&mut self, _kind: InvalidationKind) {}
}

/// Lightweight [`HostContext`] implementation that records invalidation
/// requests.
///
/// Hosts without a real pipeline (tests, headless measurement) hand this
/// to controls and drain the recorded kinds between passes. Duplicate
/// requests for the same kind are coalesced.
#[derive(Default, Debug, Clone)]
pub struct BasicHostContext {
    invalidations: Vec<InvalidationKind>,
}

impl BasicHostContext {
    /// Creates a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ordered list of invalidation kinds requested since the
    /// last drain.
    pub fn invalidations(&self) -> &[InvalidationKind] {
        &self.invalidations
    }

    /// Drains the recorded invalidations and returns them to the caller.
    pub fn take_invalidations(&mut self) -> Vec<InvalidationKind> {
        std::mem::take(&mut self.invalidations)
    }
}

impl HostContext for BasicHostContext {
    fn invalidate(&mut self, kind: InvalidationKind) {
        if !self.invalidations.contains(&kind) {
            self.invalidations.push(kind);
        }
    }
}
