use crate::{Length, Surface};

/// Slide geometry derived from the container width.
///
/// Every slide is exactly as wide as the container, so the track is `slide_count` containers
/// wide and the rest offset of slide `i` is `-i * slide_width`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub slide_count: usize,
    pub slide_width: f32,
}

impl Layout {
    /// Computes the layout for a container of `container_width` pixels.
    ///
    /// A zero (hidden container), negative or non-finite width yields a degenerate layout where
    /// every offset is `0`. This is not an error.
    pub fn compute(container_width: f32, slide_count: usize) -> Self {
        let slide_width = if container_width.is_finite() && container_width > 0.0 {
            container_width
        } else {
            0.0
        };
        Self {
            slide_count,
            slide_width,
        }
    }

    pub fn track_width(&self) -> f32 {
        self.slide_count as f32 * self.slide_width
    }

    pub fn last_index(&self) -> usize {
        self.slide_count.saturating_sub(1)
    }

    /// The most negative offset the track may rest at (the last slide).
    pub fn maximum_offset(&self) -> f32 {
        self.rest_offset(self.last_index())
    }

    pub fn rest_offset(&self, index: usize) -> f32 {
        if index == 0 || self.slide_width == 0.0 {
            return 0.0;
        }
        -(index as f32) * self.slide_width
    }

    /// Writes explicit pixel dimensions for the track and every slide.
    pub fn apply(&self, surface: &mut impl Surface) {
        surface.set_track_size(Length::Px(self.track_width()), Length::FULL);
        for index in 0..self.slide_count {
            surface.set_slide_size(index, Length::Px(self.slide_width), Length::FULL);
        }
    }
}
