use std::time::Duration;

pub use carousel_core::TransitionConfig;

/// Extension trait for TransitionConfig with utility methods
pub trait TransitionConfigExt {
    /// Get transition duration as Duration
    fn duration(&self) -> Duration;

    /// Get tick duration while a transition is running
    fn frame_duration(&self) -> Duration;

    /// Check if transitions are effectively enabled
    fn is_smooth(&self) -> bool;
}

impl TransitionConfigExt for TransitionConfig {
    #[inline]
    fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[inline]
    fn frame_duration(&self) -> Duration {
        if self.fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / u64::from(self.fps)).max(Duration::from_millis(1))
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.enabled && self.duration_ms > 0
    }
}
