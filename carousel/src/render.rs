use core::fmt;

use crate::types::normalize_zero;
use crate::{ClassNames, Length, Transition};

/// The rendering seam between the carousel and a real (or fake) UI surface.
///
/// Implementations translate these calls into whatever the host provides: inline styles on DOM
/// nodes, widget properties, or a recording buffer in tests. The carousel never reads anything
/// back; geometry comes in through [`crate::Carousel::resize`].
pub trait Surface {
    /// Builds the scaffolding: adds `classes.container` to the container, wraps its children in
    /// a track element with `classes.track`, and wraps each child in a `classes.slide` element.
    fn mount(&mut self, classes: &ClassNames, slide_count: usize);

    fn set_track_size(&mut self, width: Length, height: Length);

    fn set_slide_size(&mut self, index: usize, width: Length, height: Length);

    fn set_transform(&mut self, transform: Transform);

    fn set_transition(&mut self, transition: Transition);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn mount(&mut self, classes: &ClassNames, slide_count: usize) {
        (**self).mount(classes, slide_count);
    }

    fn set_track_size(&mut self, width: Length, height: Length) {
        (**self).set_track_size(width, height);
    }

    fn set_slide_size(&mut self, index: usize, width: Length, height: Length) {
        (**self).set_slide_size(index, width, height);
    }

    fn set_transform(&mut self, transform: Transform) {
        (**self).set_transform(transform);
    }

    fn set_transition(&mut self, transition: Transition) {
        (**self).set_transition(transition);
    }
}

/// Discards all output. Useful when only the carousel state matters.
impl Surface for () {
    fn mount(&mut self, _classes: &ClassNames, _slide_count: usize) {}

    fn set_track_size(&mut self, _width: Length, _height: Length) {}

    fn set_slide_size(&mut self, _index: usize, _width: Length, _height: Length) {}

    fn set_transform(&mut self, _transform: Transform) {}

    fn set_transition(&mut self, _transition: Transition) {}
}

/// How a horizontal translation is written out.
///
/// Both encodings move only the X position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransformEncoding {
    /// `translateX(<x>px)`
    TranslateX,
    /// `translate3d(<x>px, 0, 0)`
    #[default]
    Translate3d,
}

/// A horizontal translation of the track.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub x: f32,
    pub encoding: TransformEncoding,
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = normalize_zero(self.x);
        match self.encoding {
            TransformEncoding::TranslateX => write!(f, "translateX({x}px)"),
            TransformEncoding::Translate3d => write!(f, "translate3d({x}px, 0, 0)"),
        }
    }
}

/// Applies offsets and transitions to a [`Surface`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransformRenderer {
    encoding: TransformEncoding,
}

impl TransformRenderer {
    pub fn new(encoding: TransformEncoding) -> Self {
        Self { encoding }
    }

    pub fn encoding(&self) -> TransformEncoding {
        self.encoding
    }

    pub fn transform(&self, offset: f32) -> Transform {
        Transform {
            x: offset,
            encoding: self.encoding,
        }
    }

    pub fn render(&self, surface: &mut impl Surface, offset: f32) {
        ctrace!(offset, "TransformRenderer::render");
        surface.set_transform(self.transform(offset));
    }

    pub fn set_transition(&self, surface: &mut impl Surface, transition: Transition) {
        surface.set_transition(transition);
    }
}
