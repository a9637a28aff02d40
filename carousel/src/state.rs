use crate::Phase;

/// A lightweight, serializable snapshot of the carousel state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. It is meant for
/// debugging and for keeping a host in sync, not for restoring position across sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub index: usize,
    pub slide_count: usize,
    pub slide_width: f32,
    pub offset: f32,
    pub phase: Phase,
}
