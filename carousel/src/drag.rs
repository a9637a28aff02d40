use crate::SlideDirection;

/// Default fraction of the drag delta kept once the track would overshoot its bounds.
pub const DEFAULT_RUBBER_BAND_DIVISOR: f32 = 5.0;

/// How pointer movement maps onto the track offset during a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragEasing {
    /// The track follows the pointer one-to-one, with no resistance at the bounds.
    Linear,
    /// Past either bound the track only moves `delta / divisor`.
    RubberBand { divisor: f32 },
}

impl Default for DragEasing {
    fn default() -> Self {
        Self::RubberBand {
            divisor: DEFAULT_RUBBER_BAND_DIVISOR,
        }
    }
}

impl DragEasing {
    /// Computes the track offset for a drag that started at `start_offset` and has moved
    /// `delta` pixels. `maximum_offset` is the (non-positive) rest offset of the last slide.
    ///
    /// The rubber band is `max(min(start + delta, eased), maximum_offset + eased)`: the result
    /// always lies in `[maximum_offset + eased, eased]`.
    pub fn offset(self, start_offset: f32, delta: f32, maximum_offset: f32) -> f32 {
        let raw = start_offset + delta;
        match self {
            Self::Linear => raw,
            Self::RubberBand { divisor } => {
                // A divisor below 1 would amplify instead of damp; NaN also lands on 1.
                let eased = delta / divisor.max(1.0);
                raw.min(eased).max(maximum_offset + eased)
            }
        }
    }
}

/// Decides whether a drag of `delta` pixels commits to a neighbouring slide.
///
/// The comparison is strict and symmetric: right past `threshold` goes back one slide, left past
/// `-threshold` goes forward one, and nothing happens at a bound.
pub fn commit_direction(
    delta: f32,
    threshold: f32,
    index: usize,
    last_index: usize,
) -> Option<SlideDirection> {
    if delta > threshold && index > 0 {
        return Some(SlideDirection::Previous);
    }
    if delta < -threshold && index < last_index {
        return Some(SlideDirection::Next);
    }
    None
}

/// Bookkeeping for one pointer gesture, from pointer-down to pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragSession {
    /// Pointer X at pointer-down.
    pub anchor_x: f32,
    /// Track offset at pointer-down.
    pub start_offset: f32,
    /// Set once this gesture has changed the slide index.
    pub committed: bool,
}

impl DragSession {
    pub fn new(anchor_x: f32, start_offset: f32) -> Self {
        Self {
            anchor_x,
            start_offset,
            committed: false,
        }
    }

    pub fn delta(&self, x: f32) -> f32 {
        x - self.anchor_x
    }
}
