/// A trailing debounce driven by adapter timestamps.
///
/// Each [`Debouncer::call`] replaces the pending value and restarts the idle period, so a burst
/// of calls yields exactly one value (the last one) once the burst has been quiet for
/// `delay_ms`. The debouncer never schedules anything itself: hosts either poll it from a frame
/// loop or arm a timer for [`Debouncer::deadline_ms`].
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay_ms: u64,
    pending: Option<Pending<T>>,
}

#[derive(Clone, Debug)]
struct Pending<T> {
    value: T,
    deadline_ms: u64,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Changes the idle period for subsequent calls. A value already pending keeps its deadline.
    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due, if any.
    pub fn deadline_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.deadline_ms)
    }

    /// Records `value`, cancelling any earlier pending value.
    pub fn call(&mut self, value: T, now_ms: u64) {
        self.pending = Some(Pending {
            value,
            deadline_ms: now_ms.saturating_add(self.delay_ms),
        });
    }

    /// Returns the pending value once its idle period has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let due = self.pending.as_ref()?.deadline_ms <= now_ms;
        if !due {
            return None;
        }
        self.pending.take().map(|p| p.value)
    }

    /// Drops the pending value without firing. Returns it, if there was one.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }
}
