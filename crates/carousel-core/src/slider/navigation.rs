use super::Carousel;
use crate::surface::Surface;

impl<S: Surface> Carousel<S> {
    /// Make slide `index` (clamped to the last slide) the target and move to it
    pub fn go_to_index(&mut self, index: usize, animate: bool) {
        let count = self.geometry.slide_count();
        if count == 0 {
            return;
        }

        self.refresh_geometry();
        let index = index.min(count - 1);
        let desired = self
            .snapshot
            .slide(index)
            .map(|slide| slide.start_offset)
            .unwrap_or(0.0);

        self.state.current_index = index;
        self.apply(desired, animate);
    }

    /// Step back one slide
    ///
    /// At slide 0 with the track still scrolled (an imprecise resize snap),
    /// this returns the track to offset 0 and keeps the index at 0.
    pub fn prev(&mut self) {
        if self.geometry.slide_count() == 0 {
            return;
        }

        self.refresh_geometry();
        if self.state.current_offset <= 0.0 {
            return;
        }

        if self.state.current_index == 0 {
            self.apply(0.0, true);
            self.state.current_index = 0;
            return;
        }

        self.go_to_index(self.state.current_index - 1, true);
    }

    /// Step forward one slide; a no-op once the end of the track is shown
    pub fn next(&mut self) {
        if self.geometry.slide_count() == 0 {
            return;
        }

        self.refresh_geometry();
        let end = self.snapshot.max_offset - self.options.next_epsilon;
        if self.state.current_offset >= end {
            return;
        }

        self.go_to_index(self.state.current_index.saturating_add(1), true);
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::four_slide_carousel;
    use super::super::{Carousel, ControlState, SliderOptions};
    use crate::surface::{FixedChild, FixedSurface};

    fn assert_controls_consistent(carousel: &Carousel<FixedSurface>) {
        let state = carousel.state();
        let controls: ControlState = carousel.controls();
        assert_eq!(controls.prev_disabled, state.current_offset() <= 0.0);
        assert_eq!(
            controls.next_disabled,
            state.current_offset() >= state.max_offset() - 1.0
        );
        assert_eq!(controls.current_index, state.current_index());
    }

    #[test]
    fn test_go_to_index_clamps() {
        let mut carousel = four_slide_carousel();
        for (requested, expected_index, expected_offset) in [
            (0, 0, 0.0),
            (1, 1, 100.0),
            (2, 2, 190.0),
            (3, 3, 190.0),
            (99, 3, 190.0),
            (usize::MAX, 3, 190.0),
        ] {
            carousel.go_to_index(requested, true);
            assert_eq!(carousel.state().current_index(), expected_index);
            assert_eq!(carousel.state().current_offset(), expected_offset);
            assert_controls_consistent(&carousel);
        }
    }

    #[test]
    fn test_next_walks_then_stops() {
        let mut carousel = four_slide_carousel();
        carousel.go_to_index(0, false);

        carousel.next();
        assert_eq!(carousel.state().current_index(), 1);
        assert_eq!(carousel.state().current_offset(), 100.0);

        carousel.next();
        assert_eq!(carousel.state().current_index(), 2);
        assert_eq!(carousel.state().current_offset(), 190.0);

        let reached = carousel.state().clone();
        let writes = carousel.surface().writes();
        for _ in 0..5 {
            carousel.next();
            assert_eq!(carousel.state(), &reached);
            assert_controls_consistent(&carousel);
        }
        assert_eq!(carousel.surface().writes(), writes);
    }

    #[test]
    fn test_prev_at_start_is_idempotent() {
        let mut carousel = four_slide_carousel();
        carousel.go_to_index(0, false);
        let start = carousel.state().clone();

        for _ in 0..3 {
            carousel.prev();
            assert_eq!(carousel.state(), &start);
            assert_controls_consistent(&carousel);
        }
    }

    #[test]
    fn test_prev_steps_back() {
        let mut carousel = four_slide_carousel();
        carousel.go_to_index(2, true);
        carousel.prev();
        assert_eq!(carousel.state().current_index(), 1);
        assert_eq!(carousel.state().current_offset(), 100.0);
        assert!(carousel.state().animation_enabled());
        carousel.prev();
        assert_eq!(carousel.state().current_index(), 0);
        assert_eq!(carousel.state().current_offset(), 0.0);
        assert_controls_consistent(&carousel);
    }

    #[test]
    fn test_prev_snaps_overscrolled_first_slide() {
        let mut carousel = four_slide_carousel();
        carousel.go_to_index(0, false);
        carousel.apply(40.0, false);
        assert_eq!(carousel.state().current_index(), 0);

        carousel.prev();
        assert_eq!(carousel.state().current_index(), 0);
        assert_eq!(carousel.state().current_offset(), 0.0);
        assert!(carousel.controls().prev_disabled);
    }

    #[test]
    fn test_leading_inert_child_does_not_oscillate() {
        let mut surface = FixedSurface::default();
        surface.children = vec![
            FixedChild::inert(0.0, 6.0),
            FixedChild::card(6.0, 40.0),
            FixedChild::card(46.0, 40.0),
        ];
        surface.total_width = Some(86.0);
        surface.viewport_width = Some(50.0);
        let mut carousel = Carousel::new(surface, SliderOptions::default());

        carousel.go_to_index(0, false);
        assert_eq!(carousel.state().current_offset(), 6.0);

        carousel.prev();
        assert_eq!(carousel.state().current_offset(), 0.0);
        carousel.prev();
        assert_eq!(carousel.state().current_offset(), 0.0);
        assert_eq!(carousel.state().current_index(), 0);
    }

    #[test]
    fn test_zero_slides_are_noops() {
        let mut surface = FixedSurface::default();
        surface.children = vec![FixedChild::inert(0.0, 500.0)];
        surface.total_width = Some(500.0);
        surface.viewport_width = Some(100.0);
        let mut carousel = Carousel::new(surface, SliderOptions::default());

        carousel.prev();
        carousel.next();
        carousel.go_to_index(3, true);
        carousel.go_to_index(0, false);
        carousel.reconcile();

        assert_eq!(carousel.state().current_offset(), 0.0);
        assert_eq!(carousel.state().current_index(), 0);
        assert_eq!(carousel.surface().writes(), 0);
    }

    #[test]
    fn test_degenerate_geometry_disables_both() {
        let mut surface = FixedSurface::uniform(4, 10.0, 0.0, 0.0);
        surface.total_width = Some(0.0);
        let mut carousel = Carousel::new(surface, SliderOptions::default());

        carousel.go_to_index(2, true);
        assert_eq!(carousel.state().current_offset(), 0.0);
        assert!(carousel.controls().prev_disabled);
        assert!(carousel.controls().next_disabled);

        let before = carousel.state().clone();
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.state(), &before);
        assert!(carousel.state().current_offset().is_finite());
    }

    #[test]
    fn test_mixed_sequence_keeps_controls_consistent() {
        let mut carousel = four_slide_carousel();
        carousel.go_to_index(0, false);
        let ops: [fn(&mut Carousel<FixedSurface>); 6] = [
            |c| c.next(),
            |c| c.go_to_index(3, true),
            |c| c.prev(),
            |c| {
                c.surface_mut().set_viewport_width(300.0);
                c.reconcile();
            },
            |c| c.next(),
            |c| c.prev(),
        ];
        for op in ops {
            op(&mut carousel);
            assert_controls_consistent(&carousel);
            let state = carousel.state();
            assert!(state.current_offset() >= 0.0);
            assert!(state.current_offset() <= state.max_offset());
            assert!(state.current_index() < carousel.slide_count());
        }
    }
}
