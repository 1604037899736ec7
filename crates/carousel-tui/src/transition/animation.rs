//! Transition animator for the carousel track
//!
//! Tracks the offset the track is *drawn* at, which trails the slider's
//! committed offset while a transition runs. Call `retarget()` whenever the
//! slider writes a new position, then `update()` each frame.

use std::time::{Duration, Instant};

use super::config::{TransitionConfig, TransitionConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone)]
struct ActiveTransition {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Interpolates the drawn track offset toward the committed one
#[derive(Debug, Clone)]
pub struct TransitionAnimator {
    transition: Option<ActiveTransition>,
    config: TransitionConfig,
    current: f64,
}

impl Default for TransitionAnimator {
    fn default() -> Self {
        Self::new(TransitionConfig::default())
    }
}

impl TransitionAnimator {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            transition: None,
            config,
            current: 0.0,
        }
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Offset the track is currently drawn at
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Final offset once the running transition completes
    pub fn target(&self) -> f64 {
        self.transition
            .as_ref()
            .map(|t| t.to)
            .unwrap_or(self.current)
    }

    /// Jump to `offset` immediately
    pub fn snap(&mut self, offset: f64) {
        self.transition = None;
        self.current = offset;
    }

    /// Head toward `offset`
    ///
    /// Jumps when `suppressed` is set or transitions are disabled. A new target
    /// mid-transition starts from the currently drawn position.
    pub fn retarget(&mut self, offset: f64, suppressed: bool, now: Instant) {
        if suppressed || !self.config.is_smooth() {
            self.snap(offset);
            return;
        }

        if (self.target() - offset).abs() < f64::EPSILON {
            return;
        }

        if (self.current - offset).abs() < f64::EPSILON {
            self.transition = None;
            return;
        }

        self.transition = Some(ActiveTransition {
            start: now,
            from: self.current,
            to: offset,
            duration: self.config.duration(),
            easing: self.config.easing,
        });
    }

    /// Advance to `now` and return the drawn offset
    pub fn update(&mut self, now: Instant) -> f64 {
        if let Some(ref transition) = self.transition {
            if is_complete(transition.start, transition.duration, now) {
                self.current = transition.to;
                self.transition = None;
            } else {
                let t = progress(transition.start, transition.duration, now);
                let eased = transition.easing.apply(t);
                self.current = lerp(transition.from, transition.to, eased);
            }
        }
        self.current
    }
}
