use tracing::debug;

use super::Carousel;
use crate::surface::Surface;

impl<S: Surface> Carousel<S> {
    /// Move the track to `offset`, clamped into `[0, max_offset]`
    ///
    /// This is the only place `current_offset` is written. Transitions are
    /// suppressed when `animate` is false or reduced motion is preferred.
    pub fn apply(&mut self, offset: f64, animate: bool) {
        let clamped = self.snapshot.clamp(offset);
        let suppressed = !animate || self.surface.prefers_reduced_motion();

        self.surface.set_transition_suppressed(suppressed);
        self.surface.translate(-clamped);

        self.state.current_offset = clamped;
        self.state.max_offset = self.snapshot.max_offset;
        self.state.animation_enabled = !suppressed;
        self.publish_controls();

        debug!(
            requested = offset,
            offset = clamped,
            max_offset = self.state.max_offset,
            index = self.state.current_index,
            animate = !suppressed,
            "offset applied"
        );
    }
}
