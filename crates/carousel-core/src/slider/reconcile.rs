use std::time::{Duration, Instant};

use tracing::debug;

use super::Carousel;
use crate::surface::Surface;

/// Trailing-edge debounce deadline
///
/// Every `schedule` pushes the deadline out by the quiet window, so a burst
/// of notifications fires once, `quiet` after the last of them.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl ResizeDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// (Re)start the quiet window from `now`, superseding any pending deadline
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the deadline if it has passed
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl<S: Surface> Carousel<S> {
    /// Note a viewport size change; reconciliation runs once things settle
    pub fn notify_resize(&mut self, now: Instant) {
        self.debouncer.schedule(now);
    }

    /// Run the pending reconciliation if its quiet window has elapsed
    pub fn poll_resize(&mut self, now: Instant) -> bool {
        if self.debouncer.fire(now) {
            self.reconcile();
            true
        } else {
            false
        }
    }

    /// Re-measure and snap the index to the slide nearest the current offset
    ///
    /// The offset itself only moves if the new bound forces it to, and the
    /// move never animates.
    pub fn reconcile(&mut self) {
        // Reconciling now makes any scheduled run redundant
        self.debouncer.cancel();
        if self.geometry.slide_count() == 0 {
            return;
        }

        self.refresh_geometry();
        let offset = self.snapshot.clamp(self.state.current_offset);
        let index = self.snapshot.closest_slide(offset).unwrap_or(0);

        debug!(
            from_offset = self.state.current_offset,
            to_offset = offset,
            from_index = self.state.current_index,
            to_index = index,
            "reconciling after resize"
        );

        self.state.current_index = index;
        self.apply(offset, false);
    }
}
