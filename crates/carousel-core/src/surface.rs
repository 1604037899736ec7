//! Render/measurement boundary between the slider and its host
//!
//! The slider only ever talks to the surrounding UI through [`Surface`].
//! Measurements are pure reads; `translate` and `set_transition_suppressed`
//! are write-only visual effects that never feed back into slider state.

use serde::{Deserialize, Serialize};

use crate::error::MissingPart;

/// Role a child of the track plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildRole {
    /// A navigable card; becomes a slide at registration
    Card,
    /// Decoration that takes up track space but is never navigated to
    Inert,
}

/// Host-side measurement and rendering hooks
pub trait Surface {
    /// Check that every part the slider needs is present
    fn probe(&self) -> Result<(), MissingPart>;

    /// Roles of the track's children in layout order
    fn child_roles(&self) -> Vec<ChildRole>;

    /// Total content width of the track, `None` when it cannot be measured
    fn track_width(&self) -> Option<f64>;

    /// Visible width of the viewport, `None` when it cannot be measured
    fn viewport_width(&self) -> Option<f64>;

    /// Leading edge of a child in track-local coordinates
    fn child_offset(&self, child: usize) -> Option<f64>;

    /// Width of a child
    fn child_width(&self, child: usize) -> Option<f64>;

    /// Shift the track horizontally by `x` (negative moves content left)
    fn translate(&mut self, x: f64);

    /// Toggle the "no transition" presentation flag
    fn set_transition_suppressed(&mut self, suppressed: bool);

    /// Global reduced-motion preference
    fn prefers_reduced_motion(&self) -> bool;
}

/// One child of a [`FixedSurface`] track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedChild {
    pub role: ChildRole,
    pub offset: f64,
    pub width: f64,
}

impl FixedChild {
    pub fn card(offset: f64, width: f64) -> Self {
        Self {
            role: ChildRole::Card,
            offset,
            width,
        }
    }

    pub fn inert(offset: f64, width: f64) -> Self {
        Self {
            role: ChildRole::Inert,
            offset,
            width,
        }
    }
}

/// In-memory surface with explicit geometry
///
/// Used for headless simulation and tests. Every write is recorded so callers
/// can inspect what a real host would have rendered.
#[derive(Debug, Clone, Default)]
pub struct FixedSurface {
    pub children: Vec<FixedChild>,
    pub total_width: Option<f64>,
    pub viewport_width: Option<f64>,
    pub reduced_motion: bool,
    pub missing: Option<MissingPart>,
    translation: f64,
    transition_suppressed: bool,
    writes: usize,
}

impl FixedSurface {
    /// Cards at the given leading edges, each running up to the next one
    ///
    /// The last card extends to `total_width`.
    pub fn from_offsets(offsets: &[f64], total_width: f64, viewport_width: f64) -> Self {
        let children = offsets
            .iter()
            .enumerate()
            .map(|(i, &offset)| {
                let end = offsets.get(i + 1).copied().unwrap_or(total_width);
                FixedChild::card(offset, (end - offset).max(0.0))
            })
            .collect();

        Self {
            children,
            total_width: Some(total_width),
            viewport_width: Some(viewport_width),
            ..Default::default()
        }
    }

    pub fn from_children(children: Vec<FixedChild>, total_width: f64, viewport_width: f64) -> Self {
        Self {
            children,
            total_width: Some(total_width),
            viewport_width: Some(viewport_width),
            ..Default::default()
        }
    }

    /// Evenly sized cards laid out back to back with a gap between them
    pub fn uniform(count: usize, width: f64, gap: f64, viewport_width: f64) -> Self {
        let children: Vec<FixedChild> = (0..count)
            .map(|i| FixedChild::card(i as f64 * (width + gap), width))
            .collect();
        let total_width = if count == 0 {
            0.0
        } else {
            count as f64 * width + (count - 1) as f64 * gap
        };

        Self {
            children,
            total_width: Some(total_width),
            viewport_width: Some(viewport_width),
            ..Default::default()
        }
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    pub fn with_missing(mut self, part: MissingPart) -> Self {
        self.missing = Some(part);
        self
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = Some(width);
    }

    /// Last translation written by the slider
    pub fn translation(&self) -> f64 {
        self.translation
    }

    /// Current state of the "no transition" flag
    pub fn transition_suppressed(&self) -> bool {
        self.transition_suppressed
    }

    /// Number of translations written so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Surface for FixedSurface {
    fn probe(&self) -> Result<(), MissingPart> {
        match self.missing {
            Some(part) => Err(part),
            None => Ok(()),
        }
    }

    fn child_roles(&self) -> Vec<ChildRole> {
        self.children.iter().map(|c| c.role).collect()
    }

    fn track_width(&self) -> Option<f64> {
        self.total_width
    }

    fn viewport_width(&self) -> Option<f64> {
        self.viewport_width
    }

    fn child_offset(&self, child: usize) -> Option<f64> {
        self.children.get(child).map(|c| c.offset)
    }

    fn child_width(&self, child: usize) -> Option<f64> {
        self.children.get(child).map(|c| c.width)
    }

    fn translate(&mut self, x: f64) {
        self.translation = x;
        self.writes += 1;
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

    #[test]
    fn test_from_offsets_widths() {
        let surface = FixedSurface::from_offsets(&[0.0, 100.0, 220.0, 340.0], 340.0, 150.0);
        let widths: Vec<f64> = surface.children.iter().map(|c| c.width).collect();
        assert_eq!(widths, vec![100.0, 120.0, 120.0, 0.0]);
    }

    #[test]
    fn test_uniform_layout() {
        let surface = FixedSurface::uniform(3, 10.0, 2.0, 15.0);
        assert_eq!(surface.track_width(), Some(34.0));
        assert_eq!(surface.child_offset(2), Some(24.0));
        assert_eq!(surface.child_offset(3), None);
    }

    #[test]
    fn test_probe_reports_missing_part() {
        let surface = FixedSurface::default().with_missing(MissingPart::NextControl);
        assert_eq!(surface.probe(), Err(MissingPart::NextControl));
    }
}
