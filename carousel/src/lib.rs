//! A headless drag-to-slide carousel engine.
//!
//! For adapter-level utilities (debounced resize, listener bindings, the popup step toggle), see
//! the `carousel-adapter` crate.
//!
//! This crate focuses on the one piece of real logic in a carousel: translating pointer movement
//! into a track offset, rubber-band easing at the bounds, committing to the next/previous slide
//! once a drag crosses the threshold, and snapping back with a timed transition.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - the container width (and updates on resize)
//! - pointer positions with a millisecond timestamp
//! - a [`Surface`] implementation that applies sizes, transforms and transitions
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod drag;
mod error;
mod layout;
mod options;
mod render;
mod state;
mod transition;
mod types;


pub use carousel::Carousel;
pub use drag::{DEFAULT_RUBBER_BAND_DIVISOR, DragEasing, DragSession, commit_direction};
pub use error::CarouselError;
pub use layout::Layout;
pub use options::{
    CarouselOptions, DEFAULT_RESIZE_DEBOUNCE_MS, DEFAULT_SNAP_DURATION_MS, DEFAULT_THRESHOLD,
    OnIndexChangeCallback,
};
pub use render::{Surface, Transform, TransformEncoding, TransformRenderer};
pub use state::CarouselState;
pub use transition::{Easing, Transition, Tween};
pub use types::{ClassNames, Length, Phase, SlideDirection};
