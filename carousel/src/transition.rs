use core::fmt;

/// Timing function shared by CSS transitions and the sampled [`Tween`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    #[default]
    Linear,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }

    /// The CSS `transition-timing-function` for this easing.
    ///
    /// `SmoothStep` is exact: with control points at x = 1/3 and 2/3 the bezier's x is linear
    /// in its parameter and y is `3t² - 2t³`. `EaseInOutCubic` is the usual bezier
    /// approximation, so a sampled [`Tween`] and the CSS transition differ slightly.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::SmoothStep => "cubic-bezier(0.33333, 0, 0.66667, 1)",
            Self::EaseInOutCubic => "cubic-bezier(0.65, 0, 0.35, 1)",
        }
    }
}

/// A transition applied to the track's transform.
///
/// Formats as a CSS shorthand, e.g. `all 0.5s linear 0s`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub duration_ms: u64,
    pub easing: Easing,
    pub delay_ms: u64,
}

impl Transition {
    /// Movement follows the pointer with no animation latency.
    pub const NONE: Self = Self::linear(0);

    pub const fn linear(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            easing: Easing::Linear,
            delay_ms: 0,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn is_instant(&self) -> bool {
        self.duration_ms == 0 && self.delay_ms == 0
    }

    /// Total time from start until the transition has settled.
    pub fn total_ms(&self) -> u64 {
        self.duration_ms.saturating_add(self.delay_ms)
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "all {}s {} {}s",
            self.duration_ms as f32 / 1000.0,
            self.easing.css_name(),
            self.delay_ms as f32 / 1000.0
        )
    }
}

/// A sampled offset animation.
///
/// Hosts that cannot rely on CSS transitions use this to draw intermediate frames of the snap
/// back to the rest offset.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// Builds a tween that plays `transition` starting at `start_ms`.
    pub fn from_transition(from: f32, to: f32, start_ms: u64, transition: Transition) -> Self {
        Self::new(
            from,
            to,
            start_ms.saturating_add(transition.delay_ms),
            transition.duration_ms,
            transition.easing,
        )
    }

    /// When the tween reaches `to`.
    pub fn end_ms(&self) -> u64 {
        self.start_ms.saturating_add(self.duration_ms)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        if t >= 1.0 {
            return self.to;
        }
        let eased = self.easing.sample(t);
        self.from + (self.to - self.from) * eased
    }
}
