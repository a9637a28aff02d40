use alloc::string::String;
use core::fmt;

/// Direction of a committed slide change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideDirection {
    /// Towards index 0 (the pointer moved right).
    Previous,
    /// Towards the last slide (the pointer moved left).
    Next,
}

/// Interaction phase of a [`crate::Carousel`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
    /// Released; the snap transition towards the rest offset is still running.
    Settling,
}

/// A CSS-style length as written into inline styles.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Length {
    Px(f32),
    Percent(f32),
}

impl Length {
    pub const FULL: Self = Self::Percent(100.0);
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Px(v) => write!(f, "{}px", normalize_zero(v)),
            Self::Percent(v) => write!(f, "{}%", normalize_zero(v)),
        }
    }
}

/// Class names used when the carousel scaffolding is mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassNames {
    /// Added to the container element.
    pub container: String,
    /// Class of the generated track element holding all slides.
    pub track: String,
    /// Class of the element wrapping each original child.
    pub slide: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            container: String::from("wrap"),
            track: String::from("app-line"),
            slide: String::from("app-slide"),
        }
    }
}

// `-0` renders as "-0px", which hosts treat as noise in style diffs.
pub(crate) fn normalize_zero(v: f32) -> f32 {
    if v == 0.0 { 0.0 } else { v }
}
