use carousel::{Carousel, CarouselError, CarouselOptions, Surface};

use crate::{Bindings, EventHost, EventKind, EventTarget, LIFETIME_LISTENERS, ResizeAdapter};

/// An input event forwarded by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    PointerDown { x: f32 },
    PointerMove { x: f32 },
    PointerUp,
    PointerCancel,
    /// The viewport changed; `width` is the container's new rendered width.
    Resize { width: f32 },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::PointerDown { .. } => EventKind::PointerDown,
            Self::PointerMove { .. } => EventKind::PointerMove,
            Self::PointerUp => EventKind::PointerUp,
            Self::PointerCancel => EventKind::PointerCancel,
            Self::Resize { .. } => EventKind::Resize,
        }
    }
}

/// A framework-neutral controller that owns a [`Carousel`] together with its rendering surface,
/// listener bindings and resize debouncing.
///
/// Adapters drive it by calling:
/// - `handle(event, now_ms)` for every pointer/resize event the host delivers
/// - `tick(now_ms)` each frame/timer tick (for the snap transition and debounced resize)
/// - `detach()` when the widget is discarded
///
/// Events whose listener is not currently registered are dropped, which mirrors how a DOM host
/// would never deliver them: pointer-move outside a drag, or anything after `detach`.
#[derive(Debug)]
pub struct Controller<S, H> {
    carousel: Carousel,
    surface: S,
    host: H,
    resize: ResizeAdapter,
    bindings: Bindings,
}

impl<S: Surface, H: EventHost> Controller<S, H> {
    /// Builds the carousel, mounts it on `surface` and registers its lifetime listeners.
    pub fn new(
        slide_count: usize,
        container_width: f32,
        options: CarouselOptions,
        mut surface: S,
        mut host: H,
    ) -> Result<Self, CarouselError> {
        let resize = ResizeAdapter::from_options(&options);
        let carousel = Carousel::new(slide_count, container_width, options)?;
        carousel.mount(&mut surface);

        let mut bindings = Bindings::new();
        bindings.attach_all(&mut host, &LIFETIME_LISTENERS);
        adebug!(slide_count, container_width, "Controller::new");

        Ok(Self {
            carousel,
            surface,
            host,
            resize,
            bindings,
        })
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    /// Replaces the carousel options and applies `resize_debounce_ms` to the resize debouncer.
    pub fn set_options(&mut self, options: CarouselOptions) {
        self.resize.set_delay_ms(options.resize_debounce_ms);
        self.carousel.set_options(options);
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) {
        let mut next = self.carousel.options().clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn into_parts(self) -> (Carousel, S, H) {
        (self.carousel, self.surface, self.host)
    }

    /// `true` once [`Controller::detach`] has removed every listener.
    pub fn is_detached(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Delivers one host event. Returns `false` when the event was dropped because its listener
    /// is not registered.
    pub fn handle(&mut self, event: Event, now_ms: u64) -> bool {
        if !self.bindings.is_attached(event.kind()) {
            atrace!(?event, "event dropped: no listener");
            return false;
        }

        match event {
            Event::PointerDown { x } => {
                if self.carousel.pointer_down(x, now_ms, &mut self.surface) {
                    self.bindings.attach(
                        &mut self.host,
                        EventTarget::Window,
                        EventKind::PointerMove,
                    );
                }
            }
            Event::PointerMove { x } => {
                self.carousel.pointer_move(x, &mut self.surface);
            }
            Event::PointerUp | Event::PointerCancel => {
                self.bindings.detach(&mut self.host, EventKind::PointerMove);
                self.carousel.pointer_up(now_ms, &mut self.surface);
            }
            Event::Resize { width } => {
                // Options may have been changed through `carousel_mut`.
                self.resize.set_delay_ms(self.carousel.options().resize_debounce_ms);
                self.resize.on_resize(width, now_ms);
            }
        }
        true
    }

    /// Advances the controller.
    ///
    /// - Applies a debounced resize once its idle period has elapsed.
    /// - If the snap transition is running, returns the sampled offset for hosts that draw
    ///   frames themselves; otherwise returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        self.resize.poll(now_ms, &mut self.carousel, &mut self.surface);

        if !self.carousel.is_settling() {
            return None;
        }
        let offset = self.carousel.visual_offset(now_ms);
        self.carousel.tick(now_ms);
        Some(offset)
    }

    /// The next time `tick` has work to do (a debounced resize or the end of the snap), for
    /// hosts that arm timers instead of ticking every frame.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        match (self.resize.deadline_ms(), self.carousel.settle_deadline_ms()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Removes every registered listener and drops any pending resize.
    ///
    /// Afterwards `handle` ignores all events. Calling this again does nothing. Returns how many
    /// listeners were removed.
    pub fn detach(&mut self) -> usize {
        let removed = self.bindings.detach_all(&mut self.host);
        self.resize.cancel();
        adebug!(removed, "Controller::detach");
        removed
    }
}
