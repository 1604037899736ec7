//! Geometry model: slide positions and the scrollable bound

use tracing::debug;

use crate::surface::{ChildRole, Surface};

/// One navigable card, positioned in track-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    pub index: usize,
    pub start_offset: f64,
    pub width: f64,
}

/// Immutable measurement of the track and viewport
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometrySnapshot {
    pub slides: Vec<Slide>,
    pub total_width: f64,
    pub visible_width: f64,
    pub max_offset: f64,
}

impl GeometrySnapshot {
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Clamp an offset into `[0, max_offset]`; NaN lands on 0
    pub fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset)
    }

    /// Index of the slide whose leading edge is closest to `offset`
    ///
    /// Ties go to the lowest index.
    pub fn closest_slide(&self, offset: f64) -> Option<usize> {
        let mut closest = None;
        let mut smallest = f64::INFINITY;
        for slide in &self.slides {
            let delta = (slide.start_offset - offset).abs();
            if delta < smallest {
                smallest = delta;
                closest = Some(slide.index);
            }
        }
        closest.or_else(|| self.slides.first().map(|s| s.index))
    }
}

/// Registered slides, fixed for the lifetime of a slider
#[derive(Debug, Clone, Default)]
pub struct GeometryModel {
    /// Track child index of each slide
    children: Vec<usize>,
}

impl GeometryModel {
    /// Register the card children of the surface's track as slides
    pub fn register<S: Surface + ?Sized>(surface: &S) -> Self {
        let children = surface
            .child_roles()
            .iter()
            .enumerate()
            .filter(|(_, role)| **role == ChildRole::Card)
            .map(|(i, _)| i)
            .collect();
        Self { children }
    }

    pub fn slide_count(&self) -> usize {
        self.children.len()
    }

    /// Re-measure the surface
    ///
    /// Never fails: if either the track or the viewport cannot be measured,
    /// both widths read as 0 and nothing is scrollable.
    pub fn refresh<S: Surface + ?Sized>(&self, surface: &S) -> GeometrySnapshot {
        let (total_width, visible_width) =
            match (measured(surface.track_width()), measured(surface.viewport_width())) {
                (Some(total), Some(visible)) => (total, visible),
                _ => (0.0, 0.0),
            };
        let max_offset = (total_width - visible_width).max(0.0);

        let slides = self
            .children
            .iter()
            .enumerate()
            .map(|(index, &child)| Slide {
                index,
                start_offset: measured(surface.child_offset(child)).unwrap_or(0.0),
                width: measured(surface.child_width(child)).unwrap_or(0.0),
            })
            .collect();

        debug!(total_width, visible_width, max_offset, "geometry refreshed");

        GeometrySnapshot {
            slides,
            total_width,
            visible_width,
            max_offset,
        }
    }
}

/// Accept only finite, non-negative measurements
fn measured(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}
