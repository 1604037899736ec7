//! Slider controller
//!
//! A [`Carousel`] owns one [`SliderState`] plus the surface it renders into.
//! Behaviour is split across submodules:
//!
//! - `offset` - the single write path for `current_offset`
//! - `navigation` - prev / next / go-to-index intents
//! - `reconcile` - debounced resize handling
//! - `input` - mapping host events onto the above
//!
//! [`Slider`] wraps a carousel together with the inert variant used when the
//! host could not provide the required structure.

mod input;
mod navigation;
mod offset;
mod reconcile;

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::SliderConfig;
use crate::error::MissingPart;
use crate::geometry::{GeometryModel, GeometrySnapshot};
use crate::surface::Surface;

pub use input::{Control, KeyOutcome, SliderKey};
pub use reconcile::ResizeDebouncer;

/// Tunables for a slider instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderOptions {
    /// Tolerance for sub-unit rounding at the end of the track
    pub next_epsilon: f64,
    /// Quiet window before resize reconciliation runs
    pub resize_debounce: Duration,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            next_epsilon: 1.0,
            resize_debounce: Duration::from_millis(120),
        }
    }
}

impl From<&SliderConfig> for SliderOptions {
    fn from(config: &SliderConfig) -> Self {
        Self {
            next_epsilon: config.next_epsilon.max(0.0),
            resize_debounce: Duration::from_millis(config.resize_debounce_ms),
        }
    }
}

/// Mutable per-widget state
#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    current_index: usize,
    current_offset: f64,
    max_offset: f64,
    animation_enabled: bool,
}

impl SliderState {
    fn new(max_offset: f64, animation_enabled: bool) -> Self {
        Self {
            current_index: 0,
            current_offset: 0.0,
            max_offset,
            animation_enabled,
        }
    }

    /// Slide that navigation treats as active
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Scroll distance currently applied to the track
    pub fn current_offset(&self) -> f64 {
        self.current_offset
    }

    /// Scrollable bound as of the last applied geometry
    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    /// Whether the last reposition was allowed to animate
    pub fn animation_enabled(&self) -> bool {
        self.animation_enabled
    }
}

/// Read-only projection for reflecting into disabled/aria state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlState {
    pub current_index: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl ControlState {
    /// Everything disabled; what an inert slider reports
    pub fn inert() -> Self {
        Self {
            current_index: 0,
            prev_disabled: true,
            next_disabled: true,
        }
    }

    fn derive(state: &SliderState, epsilon: f64) -> Self {
        Self {
            current_index: state.current_index,
            prev_disabled: state.current_offset <= 0.0,
            next_disabled: state.current_offset >= state.max_offset - epsilon,
        }
    }
}

/// An active carousel bound to a surface
#[derive(Debug)]
pub struct Carousel<S> {
    surface: S,
    geometry: GeometryModel,
    snapshot: GeometrySnapshot,
    state: SliderState,
    controls: ControlState,
    options: SliderOptions,
    debouncer: ResizeDebouncer,
    mount_pending: bool,
}

impl<S: Surface> Carousel<S> {
    fn new(mut surface: S, options: SliderOptions) -> Self {
        let geometry = GeometryModel::register(&surface);
        let snapshot = geometry.refresh(&surface);
        let reduced = surface.prefers_reduced_motion();
        if reduced {
            surface.set_transition_suppressed(true);
        }

        let state = SliderState::new(snapshot.max_offset, !reduced);
        let controls = ControlState::derive(&state, options.next_epsilon);
        debug!(
            slides = geometry.slide_count(),
            max_offset = snapshot.max_offset,
            reduced_motion = reduced,
            "slider mounted"
        );

        Self {
            surface,
            geometry,
            snapshot,
            state,
            controls,
            options,
            debouncer: ResizeDebouncer::new(options.resize_debounce),
            mount_pending: true,
        }
    }

    pub fn state(&self) -> &SliderState {
        &self.state
    }

    pub fn controls(&self) -> ControlState {
        self.controls
    }

    /// Geometry as of the last refresh
    pub fn snapshot(&self) -> &GeometrySnapshot {
        &self.snapshot
    }

    pub fn slide_count(&self) -> usize {
        self.geometry.slide_count()
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for hosts that update layout (e.g. viewport width)
    ///
    /// Layout changes take effect at the next refresh; call
    /// [`Carousel::notify_resize`] to schedule one.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// True until the first frame after mount has been handled
    pub fn is_mount_pending(&self) -> bool {
        self.mount_pending
    }

    pub fn debouncer(&self) -> &ResizeDebouncer {
        &self.debouncer
    }

    fn refresh_geometry(&mut self) {
        self.snapshot = self.geometry.refresh(&self.surface);
    }

    fn publish_controls(&mut self) {
        self.controls = ControlState::derive(&self.state, self.options.next_epsilon);
    }
}

/// A slider as seen by the host: active, or inert when structure was missing
#[derive(Debug)]
pub enum Slider<S> {
    Active(Carousel<S>),
    Inert { surface: S, missing: MissingPart },
}

impl<S: Surface> Slider<S> {
    /// Build a slider over `surface`
    ///
    /// A surface missing a required part yields [`Slider::Inert`] instead of
    /// an error: every call on it is a no-op.
    pub fn mount(surface: S, options: SliderOptions) -> Self {
        match surface.probe() {
            Ok(()) => Slider::Active(Carousel::new(surface, options)),
            Err(missing) => {
                warn!(part = %missing, "slider structure incomplete, mounting inert");
                Slider::Inert { surface, missing }
            }
        }
    }

    pub fn is_inert(&self) -> bool {
        matches!(self, Slider::Inert { .. })
    }

    pub fn carousel(&self) -> Option<&Carousel<S>> {
        match self {
            Slider::Active(carousel) => Some(carousel),
            Slider::Inert { .. } => None,
        }
    }

    pub fn carousel_mut(&mut self) -> Option<&mut Carousel<S>> {
        match self {
            Slider::Active(carousel) => Some(carousel),
            Slider::Inert { .. } => None,
        }
    }

    pub fn surface(&self) -> &S {
        match self {
            Slider::Active(carousel) => carousel.surface(),
            Slider::Inert { surface, .. } => surface,
        }
    }

    pub fn surface_mut(&mut self) -> &mut S {
        match self {
            Slider::Active(carousel) => carousel.surface_mut(),
            Slider::Inert { surface, .. } => surface,
        }
    }

    pub fn state(&self) -> Option<&SliderState> {
        self.carousel().map(Carousel::state)
    }

    pub fn controls(&self) -> ControlState {
        self.carousel()
            .map(Carousel::controls)
            .unwrap_or_else(ControlState::inert)
    }

    pub fn slide_count(&self) -> usize {
        self.carousel().map(Carousel::slide_count).unwrap_or(0)
    }

    pub fn apply(&mut self, offset: f64, animate: bool) {
        if let Some(carousel) = self.carousel_mut() {
            carousel.apply(offset, animate);
        }
    }

    pub fn go_to_index(&mut self, index: usize, animate: bool) {
        if let Some(carousel) = self.carousel_mut() {
            carousel.go_to_index(index, animate);
        }
    }

    pub fn prev(&mut self) {
        if let Some(carousel) = self.carousel_mut() {
            carousel.prev();
        }
    }

    pub fn next(&mut self) {
        if let Some(carousel) = self.carousel_mut() {
            carousel.next();
        }
    }

    pub fn reconcile(&mut self) {
        if let Some(carousel) = self.carousel_mut() {
            carousel.reconcile();
        }
    }

    pub fn notify_resize(&mut self, now: Instant) {
        if let Some(carousel) = self.carousel_mut() {
            carousel.notify_resize(now);
        }
    }

    /// Run a due reconciliation; returns whether one ran
    pub fn poll_resize(&mut self, now: Instant) -> bool {
        self.carousel_mut()
            .map(|carousel| carousel.poll_resize(now))
            .unwrap_or(false)
    }

    /// Deadline of the pending reconciliation, if any
    pub fn resize_deadline(&self) -> Option<Instant> {
        self.carousel().and_then(|c| c.debouncer().deadline())
    }

    /// Handle the first rendered frame; returns whether the initial snap ran
    pub fn on_frame(&mut self) -> bool {
        self.carousel_mut()
            .map(Carousel::on_frame)
            .unwrap_or(false)
    }

    pub fn activate(&mut self, control: Control) {
        if let Some(carousel) = self.carousel_mut() {
            carousel.activate(control);
        }
    }

    pub fn handle_key(&mut self, key: SliderKey, focused: bool) -> KeyOutcome {
        self.carousel_mut()
            .map(|carousel| carousel.handle_key(key, focused))
            .unwrap_or(KeyOutcome::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::FixedSurface;

    pub(super) fn four_slide_carousel() -> Carousel<FixedSurface> {
        let surface = FixedSurface::from_offsets(&[0.0, 100.0, 220.0, 340.0], 340.0, 150.0);
        Carousel::new(surface, SliderOptions::default())
    }

    #[test]
    fn test_mount_state() {
        let carousel = four_slide_carousel();
        assert!(carousel.is_mount_pending());
        assert_eq!(carousel.state().current_index(), 0);
        assert_eq!(carousel.state().current_offset(), 0.0);
        assert_eq!(carousel.state().max_offset(), 190.0);
        assert!(carousel.controls().prev_disabled);
        assert!(!carousel.controls().next_disabled);
        assert!(!carousel.surface().transition_suppressed());
    }

    #[test]
    fn test_reduced_motion_suppresses_from_mount() {
        let surface = FixedSurface::uniform(3, 10.0, 0.0, 15.0).with_reduced_motion(true);
        let carousel = Carousel::new(surface, SliderOptions::default());
        assert!(carousel.surface().transition_suppressed());
        assert!(!carousel.state().animation_enabled());
    }

    #[test]
    fn test_missing_structure_mounts_inert() {
        let surface = FixedSurface::uniform(3, 10.0, 0.0, 15.0).with_missing(MissingPart::Track);
        let mut slider = Slider::mount(surface, SliderOptions::default());
        assert!(slider.is_inert());

        slider.next();
        slider.go_to_index(2, true);
        slider.apply(5.0, true);
        slider.notify_resize(Instant::now());
        assert!(!slider.on_frame());
        assert_eq!(slider.handle_key(SliderKey::ArrowRight, true), KeyOutcome::Ignored);

        assert_eq!(slider.controls(), ControlState::inert());
        assert!(slider.state().is_none());
        assert_eq!(slider.surface().writes(), 0);
    }

    #[test]
    fn test_options_from_config() {
        let config = SliderConfig {
            resize_debounce_ms: 250,
            next_epsilon: -3.0,
            ..Default::default()
        };
        let options = SliderOptions::from(&config);
        assert_eq!(options.resize_debounce, Duration::from_millis(250));
        assert_eq!(options.next_epsilon, 0.0);
    }

    #[test]
    fn test_control_state_serializes() {
        let json = serde_json::to_string(&ControlState::inert()).unwrap();
        assert_eq!(
            json,
            r#"{"current_index":0,"prev_disabled":true,"next_disabled":true}"#
        );
    }
}
