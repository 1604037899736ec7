use tracing::trace;

use super::Carousel;
use crate::surface::Surface;

/// Visible prev/next controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Prev,
    Next,
}

/// Keys the slider reacts to while focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderKey {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Whether the host should suppress the key's default behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
}

impl<S: Surface> Carousel<S> {
    /// A prev/next control was clicked
    pub fn activate(&mut self, control: Control) {
        trace!(?control, "control activated");
        match control {
            Control::Prev => self.prev(),
            Control::Next => self.next(),
        }
    }

    /// Route a key press; arrows only count while the slider has focus
    pub fn handle_key(&mut self, key: SliderKey, focused: bool) -> KeyOutcome {
        if !focused {
            return KeyOutcome::Ignored;
        }
        match key {
            SliderKey::ArrowLeft => {
                self.prev();
                KeyOutcome::Handled
            }
            SliderKey::ArrowRight => {
                self.next();
                KeyOutcome::Handled
            }
            SliderKey::Other => KeyOutcome::Ignored,
        }
    }

    /// First frame after mount: layout has settled, snap to slide 0
    pub fn on_frame(&mut self) -> bool {
        if !self.mount_pending {
            return false;
        }
        self.mount_pending = false;
        self.go_to_index(0, false);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::four_slide_carousel;
    use super::*;

    #[test]
    fn test_initial_snap_runs_once_without_animation() {
        let mut carousel = four_slide_carousel();
        assert_eq!(carousel.surface().writes(), 0);

        assert!(carousel.on_frame());
        assert_eq!(carousel.surface().writes(), 1);
        assert!(carousel.surface().transition_suppressed());
        assert_eq!(carousel.state().current_index(), 0);

        assert!(!carousel.on_frame());
        assert_eq!(carousel.surface().writes(), 1);
    }

    #[test]
    fn test_controls_navigate() {
        let mut carousel = four_slide_carousel();
        carousel.on_frame();

        carousel.activate(Control::Next);
        assert_eq!(carousel.state().current_index(), 1);
        assert!(carousel.state().animation_enabled());

        carousel.activate(Control::Prev);
        assert_eq!(carousel.state().current_index(), 0);
    }

    #[test]
    fn test_arrow_keys_need_focus() {
        let mut carousel = four_slide_carousel();
        carousel.on_frame();

        assert_eq!(
            carousel.handle_key(SliderKey::ArrowRight, false),
            KeyOutcome::Ignored
        );
        assert_eq!(carousel.state().current_index(), 0);

        assert_eq!(
            carousel.handle_key(SliderKey::ArrowRight, true),
            KeyOutcome::Handled
        );
        assert_eq!(carousel.state().current_index(), 1);

        assert_eq!(
            carousel.handle_key(SliderKey::ArrowLeft, true),
            KeyOutcome::Handled
        );
        assert_eq!(carousel.state().current_index(), 0);

        assert_eq!(
            carousel.handle_key(SliderKey::Other, true),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn test_arrow_at_bound_still_suppresses_default() {
        let mut carousel = four_slide_carousel();
        carousel.on_frame();
        assert_eq!(
            carousel.handle_key(SliderKey::ArrowLeft, true),
            KeyOutcome::Handled
        );
        assert_eq!(carousel.state().current_offset(), 0.0);
    }
}
