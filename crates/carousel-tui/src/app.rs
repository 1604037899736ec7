use std::time::Instant;

use carousel_core::{
    AppConfig, CardConfig, Control, KeyOutcome, Slider, SliderKey, SliderOptions,
};
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use tracing::{debug, info};

use crate::input::Action;
use crate::surface::TerminalSurface;
use crate::theme::Theme;
use crate::transition::TransitionAnimator;

/// Rows inside the track panel used by a card
pub const CARD_HEIGHT: u16 = 7;

const PREV_LABEL_WIDTH: u16 = 8;
const NEXT_LABEL_WIDTH: u16 = 8;

/// Which part of the screen receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Page,
    Carousel,
}

/// Screen regions for the current terminal size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppLayout {
    /// Track panel including its border
    pub track: Rect,
    /// Visible window onto the track
    pub viewport: Rect,
    pub prev_button: Rect,
    pub next_button: Rect,
    pub pager: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect) -> Self {
        let [_, track_row, controls_row, _, status] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(CARD_HEIGHT + 2),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let track = track_row.inner(Margin::new(2, 0));
        let viewport = track.inner(Margin::new(1, 1));

        let controls = controls_row.inner(Margin::new(2, 0));
        let [prev_button, pager, next_button] = Layout::horizontal([
            Constraint::Length(PREV_LABEL_WIDTH),
            Constraint::Min(0),
            Constraint::Length(NEXT_LABEL_WIDTH),
        ])
        .areas(controls);

        Self {
            track,
            viewport,
            prev_button,
            next_button,
            pager,
            status,
        }
    }
}

/// Application state
pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    /// Cards on the track, in slide order
    pub cards: Vec<CardConfig>,
    pub slider: Slider<TerminalSurface>,
    /// Drawn track position, trailing the slider while a transition runs
    pub animator: TransitionAnimator,
    pub focus: Focus,
    pub layout: AppLayout,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let cards = config.cards();
        let surface = TerminalSurface::build(
            cards.len(),
            config.ui.card_width,
            config.ui.card_gap,
            config.ui.leading_divider,
            config.slider.reduced_motion,
        );
        let slider = Slider::mount(surface, SliderOptions::from(&config.slider));
        let status_message = slider
            .is_inert()
            .then(|| " Carousel unavailable: card width must be non-zero".to_string());
        let focus = if config.slider.focus_on_start {
            Focus::Carousel
        } else {
            Focus::Page
        };

        info!(
            cards = cards.len(),
            reduced_motion = config.slider.reduced_motion,
            inert = slider.is_inert(),
            "carousel app created"
        );

        Self {
            animator: TransitionAnimator::new(config.ui.transition.clone()),
            theme: Theme::default(),
            config,
            cards,
            slider,
            focus,
            layout: AppLayout::default(),
            should_quit: false,
            status_message,
        }
    }

    /// Recompute layout for a new terminal size
    ///
    /// A changed viewport width schedules a debounced reconciliation; before
    /// the first frame the initial snap measures it instead.
    pub fn resize(&mut self, area: Rect, now: Instant) {
        self.layout = AppLayout::compute(area);
        let changed = self
            .slider
            .surface_mut()
            .set_viewport_width(self.layout.viewport.width);

        let mount_pending = self
            .slider
            .carousel()
            .is_some_and(|c| c.is_mount_pending());
        if changed && !mount_pending {
            debug!(width = self.layout.viewport.width, "viewport resized");
            self.slider.notify_resize(now);
        }
    }

    /// Called after a frame has been drawn
    pub fn after_frame(&mut self, now: Instant) {
        if self.slider.on_frame() {
            self.sync_transition(now);
        }
    }

    /// Periodic work: due reconciliation and transition progress
    pub fn tick(&mut self, now: Instant) {
        if self.slider.poll_resize(now) {
            self.sync_transition(now);
        }
        self.animator.update(now);
    }

    pub fn dispatch(&mut self, action: Action, now: Instant) {
        let focused = self.focus == Focus::Carousel;
        match action {
            Action::Quit => self.should_quit = true,
            Action::Prev => {
                if self.slider.handle_key(SliderKey::ArrowLeft, focused) == KeyOutcome::Ignored {
                    return;
                }
            }
            Action::Next => {
                if self.slider.handle_key(SliderKey::ArrowRight, focused) == KeyOutcome::Ignored {
                    return;
                }
            }
            Action::PrevButton => self.slider.activate(Control::Prev),
            Action::NextButton => self.slider.activate(Control::Next),
            Action::First => self.slider.go_to_index(0, true),
            Action::Last => {
                let last = self.slider.slide_count().saturating_sub(1);
                self.slider.go_to_index(last, true);
            }
            Action::GoTo(index) => {
                if index < self.slider.slide_count() {
                    self.slider.go_to_index(index, true);
                }
            }
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Page => Focus::Carousel,
                    Focus::Carousel => Focus::Page,
                };
                return;
            }
            Action::None => return,
        }
        self.sync_transition(now);
    }

    /// Offset the track should be drawn at this frame
    pub fn drawn_offset(&self) -> f64 {
        self.animator.current()
    }

    /// Whether the event loop should poll at frame rate
    pub fn needs_fast_tick(&self) -> bool {
        self.animator.is_animating() || self.slider.resize_deadline().is_some()
    }

    /// Card title for a slide, if any
    pub fn card(&self, slide: usize) -> Option<&CardConfig> {
        self.cards.get(slide)
    }

    fn sync_transition(&mut self, now: Instant) {
        let surface = self.slider.surface();
        let target = -surface.translation();
        let suppressed = surface.transition_suppressed();
        self.animator.retarget(target, suppressed, now);
    }
}
