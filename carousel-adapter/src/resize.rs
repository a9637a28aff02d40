use carousel::{Carousel, CarouselOptions, Surface};

use crate::Debouncer;

/// Coalesces viewport resize bursts into a single layout recomputation.
#[derive(Clone, Debug)]
pub struct ResizeAdapter {
    debouncer: Debouncer<f32>,
}

impl ResizeAdapter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            debouncer: Debouncer::new(delay_ms),
        }
    }

    pub fn from_options(options: &CarouselOptions) -> Self {
        Self::new(options.resize_debounce_ms)
    }

    pub fn delay_ms(&self) -> u64 {
        self.debouncer.delay_ms()
    }

    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.debouncer.set_delay_ms(delay_ms);
    }

    /// Call on every resize event with the container's new width.
    pub fn on_resize(&mut self, container_width: f32, now_ms: u64) {
        atrace!(container_width, now_ms, "ResizeAdapter::on_resize");
        self.debouncer.call(container_width, now_ms);
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.debouncer.deadline_ms()
    }

    /// Applies the last reported width to `carousel` once the burst has gone quiet.
    ///
    /// Returns `true` when a recomputation happened.
    pub fn poll(
        &mut self,
        now_ms: u64,
        carousel: &mut Carousel,
        surface: &mut impl Surface,
    ) -> bool {
        let Some(width) = self.debouncer.poll(now_ms) else {
            return false;
        };
        adebug!(width, now_ms, "ResizeAdapter: recomputing layout");
        carousel.resize(width, surface);
        true
    }

    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }
}
