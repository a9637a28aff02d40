use alloc::sync::Arc;

use crate::{ClassNames, DragEasing, SlideDirection, TransformEncoding, Transition};

/// Drag distance (px) after which a gesture commits to the neighbouring slide.
pub const DEFAULT_THRESHOLD: f32 = 100.0;
/// Duration of the snap back to the rest offset after release.
pub const DEFAULT_SNAP_DURATION_MS: u64 = 500;
/// Idle period that coalesces a burst of resize events.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 100;

/// A callback fired when a drag commits to a new slide.
///
/// The first argument is the new index.
pub type OnIndexChangeCallback = Arc<dyn Fn(usize, SlideDirection) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Construct with [`CarouselOptions::new`] and adjust with the `with_*` builders. Callbacks are
/// stored in `Arc`s, so cloning is cheap.
#[derive(Clone)]
pub struct CarouselOptions {
    /// Commit threshold in pixels. Negative values are treated as `0`.
    pub threshold: f32,
    pub easing: DragEasing,
    /// Transition enabled on release so the snap animates.
    pub snap_transition: Transition,
    pub encoding: TransformEncoding,
    /// Used by adapters that debounce resize events.
    pub resize_debounce_ms: u64,
    pub initial_index: usize,
    /// When `false`, pointer-down is ignored until the snap transition has finished.
    pub allow_drag_while_settling: bool,
    pub class_names: ClassNames,
    pub on_index_change: Option<OnIndexChangeCallback>,
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            easing: DragEasing::default(),
            snap_transition: Transition::linear(DEFAULT_SNAP_DURATION_MS),
            encoding: TransformEncoding::default(),
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            initial_index: 0,
            allow_drag_while_settling: false,
            class_names: ClassNames::default(),
            on_index_change: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_easing(mut self, easing: DragEasing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_snap_transition(mut self, transition: Transition) -> Self {
        self.snap_transition = transition;
        self
    }

    /// Shorthand for a linear snap transition of `duration_ms`.
    pub fn with_snap_duration_ms(mut self, duration_ms: u64) -> Self {
        self.snap_transition = Transition::linear(duration_ms);
        self
    }

    pub fn with_encoding(mut self, encoding: TransformEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_resize_debounce_ms(mut self, delay_ms: u64) -> Self {
        self.resize_debounce_ms = delay_ms;
        self
    }

    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    pub fn with_allow_drag_while_settling(mut self, allow: bool) -> Self {
        self.allow_drag_while_settling = allow;
        self
    }

    pub fn with_class_names(mut self, class_names: ClassNames) -> Self {
        self.class_names = class_names;
        self
    }

    pub fn with_on_index_change(
        mut self,
        on_index_change: Option<impl Fn(usize, SlideDirection) + Send + Sync + 'static>,
    ) -> Self {
        self.on_index_change = on_index_change.map(|f| Arc::new(f) as _);
        self
    }

    pub(crate) fn effective_threshold(&self) -> f32 {
        self.threshold.max(0.0)
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("threshold", &self.threshold)
            .field("easing", &self.easing)
            .field("snap_transition", &self.snap_transition)
            .field("encoding", &self.encoding)
            .field("resize_debounce_ms", &self.resize_debounce_ms)
            .field("initial_index", &self.initial_index)
            .field("allow_drag_while_settling", &self.allow_drag_while_settling)
            .field("class_names", &self.class_names)
            .finish_non_exhaustive()
    }
}
