//! Terminal implementation of the slider's render/measurement boundary
//!
//! The track is laid out in whole terminal columns: children back to back
//! with a fixed gap. The viewport is the inner width of the track panel,
//! known only once a frame has been laid out.

use carousel_core::{ChildRole, MissingPart, Surface};

/// Columns taken by an inert divider
pub const DIVIDER_WIDTH: u16 = 2;

/// One laid-out child of the track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackChild {
    pub role: ChildRole,
    pub width: u16,
    /// Index into the card list for `Card` children
    pub card: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct TerminalSurface {
    children: Vec<TrackChild>,
    gap: u16,
    viewport_width: u16,
    reduced_motion: bool,
    translation: f64,
    transition_suppressed: bool,
}

impl TerminalSurface {
    /// Lay out `card_count` cards, optionally preceded by an inert divider
    pub fn build(
        card_count: usize,
        card_width: u16,
        gap: u16,
        leading_divider: bool,
        reduced_motion: bool,
    ) -> Self {
        let mut children = Vec::with_capacity(card_count + 1);
        if leading_divider {
            children.push(TrackChild {
                role: ChildRole::Inert,
                width: DIVIDER_WIDTH,
                card: None,
            });
        }
        children.extend((0..card_count).map(|i| TrackChild {
            role: ChildRole::Card,
            width: card_width,
            card: Some(i),
        }));

        Self {
            children,
            gap,
            viewport_width: 0,
            reduced_motion,
            translation: 0.0,
            transition_suppressed: reduced_motion,
        }
    }

    pub fn children(&self) -> &[TrackChild] {
        &self.children
    }

    /// Leading column of a child
    pub fn child_start(&self, child: usize) -> Option<u16> {
        if child >= self.children.len() {
            return None;
        }
        let start = self.children[..child]
            .iter()
            .fold(0u32, |acc, c| acc + u32::from(c.width) + u32::from(self.gap));
        Some(start.min(u32::from(u16::MAX)) as u16)
    }

    /// Total columns spanned by all children
    pub fn content_width(&self) -> u16 {
        let widths: u32 = self.children.iter().map(|c| u32::from(c.width)).sum();
        let gaps = u32::from(self.gap) * self.children.len().saturating_sub(1) as u32;
        (widths + gaps).min(u32::from(u16::MAX)) as u16
    }

    /// Record the viewport width; returns whether it changed
    pub fn set_viewport_width(&mut self, width: u16) -> bool {
        let changed = self.viewport_width != width;
        self.viewport_width = width;
        changed
    }

    pub fn viewport_columns(&self) -> u16 {
        self.viewport_width
    }

    /// Translation last requested by the slider
    pub fn translation(&self) -> f64 {
        self.translation
    }

    pub fn transition_suppressed(&self) -> bool {
        self.transition_suppressed
    }
}

impl Surface for TerminalSurface {
    fn probe(&self) -> Result<(), MissingPart> {
        // Zero-width cards cannot be drawn or navigated to
        if self
            .children
            .iter()
            .any(|c| c.role == ChildRole::Card && c.width == 0)
        {
            return Err(MissingPart::Track);
        }
        Ok(())
    }

    fn child_roles(&self) -> Vec<ChildRole> {
        self.children.iter().map(|c| c.role).collect()
    }

    fn track_width(&self) -> Option<f64> {
        Some(f64::from(self.content_width()))
    }

    fn viewport_width(&self) -> Option<f64> {
        (self.viewport_width > 0).then(|| f64::from(self.viewport_width))
    }

    fn child_offset(&self, child: usize) -> Option<f64> {
        self.child_start(child).map(f64::from)
    }

    fn child_width(&self, child: usize) -> Option<f64> {
        self.children.get(child).map(|c| f64::from(c.width))
    }

    fn translate(&mut self, x: f64) {
        self.translation = x;
    }

    fn set_transition_suppressed(&mut self, suppressed: bool) {
        self.transition_suppressed = suppressed;
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::{Slider, SliderOptions};

    #[test]
    fn test_layout_columns() {
        let surface = TerminalSurface::build(3, 20, 2, true, false);
        assert_eq!(surface.children().len(), 4);
        assert_eq!(surface.child_start(0), Some(0));
        assert_eq!(surface.child_start(1), Some(4));
        assert_eq!(surface.child_start(3), Some(48));
        assert_eq!(surface.child_start(4), None);
        assert_eq!(surface.content_width(), 68);
    }

    #[test]
    fn test_unlaid_viewport_is_unmeasured() {
        let mut surface = TerminalSurface::build(3, 20, 2, false, false);
        assert_eq!(surface.viewport_width(), None);
        assert!(surface.set_viewport_width(30));
        assert!(!surface.set_viewport_width(30));
        assert_eq!(surface.viewport_width(), Some(30.0));
    }

    #[test]
    fn test_zero_width_cards_mount_inert() {
        let surface = TerminalSurface::build(3, 0, 2, false, false);
        let slider = Slider::mount(surface, SliderOptions::default());
        assert!(slider.is_inert());
    }

    #[test]
    fn test_slider_drives_translation() {
        let mut surface = TerminalSurface::build(4, 20, 2, false, false);
        surface.set_viewport_width(30);
        let mut slider = Slider::mount(surface, SliderOptions::default());
        slider.on_frame();

        slider.next();
        assert_eq!(slider.surface().translation(), -22.0);
        assert!(!slider.surface().transition_suppressed());

        slider.go_to_index(3, true);
        // content 86 columns, viewport 30
        assert_eq!(slider.surface().translation(), -56.0);
        assert!(slider.controls().next_disabled);
    }
}
