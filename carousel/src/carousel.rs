use crate::drag::{DragSession, commit_direction};
use crate::{
    CarouselError, CarouselOptions, CarouselState, Layout, Phase, SlideDirection, Surface,
    TransformRenderer, Transition, Tween,
};

/// A headless drag-to-slide carousel.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter feeds it container geometry and pointer positions.
/// - Output goes through a [`Surface`] passed into each call that renders.
///
/// At rest (not dragging) the offset always equals `-index * slide_width`. The index only
/// changes during a drag, at most once per gesture.
///
/// For debounced resize handling and listener bookkeeping, see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    layout: Layout,
    renderer: TransformRenderer,
    index: usize,
    offset: f32,
    drag: Option<DragSession>,
    settle: Option<Tween>,
}

impl Carousel {
    /// Creates a carousel over `slide_count` slides inside a container `container_width` pixels
    /// wide.
    ///
    /// Nothing is rendered until [`Carousel::mount`] is called.
    pub fn new(
        slide_count: usize,
        container_width: f32,
        options: CarouselOptions,
    ) -> Result<Self, CarouselError> {
        if slide_count == 0 {
            cwarn!("Carousel::new: container has no slides");
            return Err(CarouselError::NoSlides);
        }
        if options.initial_index >= slide_count {
            return Err(CarouselError::InvalidIndex {
                index: options.initial_index,
                count: slide_count,
            });
        }

        let layout = Layout::compute(container_width, slide_count);
        let index = options.initial_index;
        cdebug!(
            slide_count,
            slide_width = layout.slide_width,
            index,
            "Carousel::new"
        );
        Ok(Self {
            renderer: TransformRenderer::new(options.encoding),
            offset: layout.rest_offset(index),
            layout,
            index,
            drag: None,
            settle: None,
            options,
        })
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// The slide index and geometry are kept. Class names only take effect on the next mount.
    pub fn set_options(&mut self, options: CarouselOptions) {
        self.renderer = TransformRenderer::new(options.encoding);
        self.options = options;
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Builds the scaffolding on `surface` and writes the initial layout and position.
    pub fn mount(&self, surface: &mut impl Surface) {
        surface.mount(&self.options.class_names, self.layout.slide_count);
        self.apply_layout(surface);
    }

    fn apply_layout(&self, surface: &mut impl Surface) {
        self.renderer.set_transition(surface, Transition::NONE);
        self.layout.apply(surface);
        self.renderer.render(surface, self.offset);
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn slide_count(&self) -> usize {
        self.layout.slide_count
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The logical track offset: the drag position while dragging, otherwise the rest offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// The rest offset of the current index.
    pub fn rest_offset(&self) -> f32 {
        self.layout.rest_offset(self.index)
    }

    pub fn phase(&self) -> Phase {
        if self.drag.is_some() {
            Phase::Dragging
        } else if self.settle.is_some() {
            Phase::Settling
        } else {
            Phase::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            index: self.index,
            slide_count: self.layout.slide_count,
            slide_width: self.layout.slide_width,
            offset: self.offset,
            phase: self.phase(),
        }
    }

    /// Starts a drag at pointer position `x`.
    ///
    /// Returns `false` (and changes nothing) when a drag is already active, or when the previous
    /// snap is still running and `allow_drag_while_settling` is off.
    pub fn pointer_down(&mut self, x: f32, now_ms: u64, surface: &mut impl Surface) -> bool {
        if self.drag.is_some() {
            ctrace!(x, "pointer_down ignored: already dragging");
            return false;
        }
        if let Some(settle) = self.settle {
            if !settle.is_done(now_ms) && !self.options.allow_drag_while_settling {
                ctrace!(x, now_ms, "pointer_down ignored: settling");
                return false;
            }
            self.settle = None;
        }

        ctrace!(x, now_ms, index = self.index, "pointer_down");
        self.drag = Some(DragSession::new(x, self.offset));
        self.renderer.set_transition(surface, Transition::NONE);
        true
    }

    /// Moves the active drag to pointer position `x`.
    ///
    /// Always re-renders while dragging. Returns the direction when this move committed the
    /// gesture to a neighbouring slide; outside a drag this is a no-op.
    pub fn pointer_move(&mut self, x: f32, surface: &mut impl Surface) -> Option<SlideDirection> {
        let drag = self.drag.as_mut()?;
        let delta = drag.delta(x);
        self.offset =
            self.options
                .easing
                .offset(drag.start_offset, delta, self.layout.maximum_offset());
        self.renderer.render(surface, self.offset);

        if drag.committed {
            return None;
        }
        let direction = commit_direction(
            delta,
            self.options.effective_threshold(),
            self.index,
            self.layout.last_index(),
        )?;
        drag.committed = true;
        self.index = match direction {
            SlideDirection::Previous => self.index - 1,
            SlideDirection::Next => self.index + 1,
        };
        debug_assert!(
            self.index < self.layout.slide_count,
            "commit moved index out of range (index={}, count={})",
            self.index,
            self.layout.slide_count
        );
        cdebug!(index = self.index, ?direction, delta, "slide committed");

        if let Some(cb) = &self.options.on_index_change {
            cb(self.index, direction);
        }
        Some(direction)
    }

    /// Ends the active drag: snaps to the rest offset of the (possibly new) index and enables
    /// the snap transition.
    ///
    /// Returns `false` when no drag was active.
    pub fn pointer_up(&mut self, now_ms: u64, surface: &mut impl Surface) -> bool {
        if self.drag.take().is_none() {
            return false;
        }

        let from = self.offset;
        self.offset = self.rest_offset();
        self.renderer.render(surface, self.offset);

        let transition = self.options.snap_transition;
        self.renderer.set_transition(surface, transition);
        self.settle = if transition.is_instant() {
            None
        } else {
            Some(Tween::from_transition(from, self.offset, now_ms, transition))
        };
        ctrace!(from, to = self.offset, index = self.index, "pointer_up");
        true
    }

    /// Pointer cancellation ends a drag exactly like a release.
    pub fn pointer_cancel(&mut self, now_ms: u64, surface: &mut impl Surface) -> bool {
        self.pointer_up(now_ms, surface)
    }

    /// Advances the snap transition. Returns `true` when it finished on this call.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.settle {
            Some(settle) if settle.is_done(now_ms) => {
                self.settle = None;
                true
            }
            _ => false,
        }
    }

    /// When the running snap transition ends, for hosts that arm a timer to call
    /// [`Carousel::tick`] instead of ticking every frame.
    pub fn settle_deadline_ms(&self) -> Option<u64> {
        self.settle.map(|settle| settle.end_ms())
    }

    /// The offset a host without CSS transitions should draw at `now_ms`.
    ///
    /// During the snap this samples the transition; otherwise it equals [`Carousel::offset`].
    pub fn visual_offset(&self, now_ms: u64) -> f32 {
        match self.settle {
            Some(settle) => settle.sample(now_ms),
            None => self.offset,
        }
    }

    /// Recomputes geometry for a new container width and re-renders at the rest offset.
    ///
    /// Calling this twice with the same width produces the same layout and output. A running
    /// snap is cut short; an active drag continues from the new rest offset.
    pub fn resize(&mut self, container_width: f32, surface: &mut impl Surface) {
        self.layout = Layout::compute(container_width, self.layout.slide_count);
        self.settle = None;
        self.offset = self.rest_offset();
        if let Some(drag) = self.drag.as_mut() {
            drag.start_offset = self.offset;
        }
        cdebug!(
            slide_width = self.layout.slide_width,
            offset = self.offset,
            "Carousel::resize"
        );
        self.apply_layout(surface);
    }
}
