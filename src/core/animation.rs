//! Declarative keyframe timelines
//!
//! A [`Timeline`] describes how a handful of transform properties and opacity
//! move over
//! one loop: each property is a list of evenly spaced keyframe values, and the
//! whole timeline shares a duration, an easing curve (applied per segment) and
//! a repeat policy. [`Timeline::sample`] turns elapsed time into a [`Frame`],
//! which the UI layer writes to an element once per animation frame.
//!
//! # Example
//! ```
//! # use alborvia::core::animation::{Easing, Repeat, Timeline};
//! let bounce = Timeline::new(2.0)
//!     .y(&[0.0, 10.0, 0.0])
//!     .easing(Easing::Linear)
//!     .repeat(Repeat::Forever);
//!
//! assert_eq!(bounce.sample(1.0).y, 10.0);
//! assert_eq!(bounce.sample(3.0).y, 10.0);
//! ```

/// Easing curves
///
/// The curved variants are the usual CSS cubic beziers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`
    EaseInOut,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
        }
    }
}

/// Evaluate a CSS-style cubic bezier (endpoints fixed at 0,0 and 1,1) at `x`.
///
/// Solves for the curve parameter by bisection; x(t) is monotonic for all
/// curves used here.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    fn coord(a: f64, b: f64, t: f64) -> f64 {
        let mt = 1.0 - t;
        3.0 * mt * mt * t * a + 3.0 * mt * t * t * b + t * t * t
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    let mut t = x;
    for _ in 0..48 {
        let current = coord(x1, x2, t);
        if (current - x).abs() < 1e-7 {
            break;
        }
        if current < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    coord(y1, y2, t)
}

/// What happens once a loop finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Hold the last keyframe
    #[default]
    Once,
    /// Start over, indefinitely
    Forever,
}

/// Sampled property values for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Horizontal offset in px
    pub x: f64,
    /// Vertical offset in px
    pub y: f64,
    /// Rotation in degrees
    pub rotate: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotate: 0.0,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

impl Frame {
    /// Value for the CSS `transform` property
    pub fn to_transform(&self) -> String {
        format!(
            "translate3d({:.3}px, {:.3}px, 0) rotate({:.3}deg) scale({:.4})",
            self.x, self.y, self.rotate, self.scale
        )
    }

    /// Value for the CSS `opacity` property
    pub fn to_opacity(&self) -> String {
        format!("{:.3}", self.opacity.clamp(0.0, 1.0))
    }
}

/// Keyframe description for a set of transform properties
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    duration: f64,
    easing: Easing,
    repeat: Repeat,
    x: Option<&'static [f64]>,
    y: Option<&'static [f64]>,
    rotate: Option<&'static [f64]>,
    scale: Option<&'static [f64]>,
    opacity: Option<&'static [f64]>,
}

impl Timeline {
    /// Create an empty timeline lasting `duration` seconds per loop
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    pub fn x(mut self, keyframes: &'static [f64]) -> Self {
        self.x = Some(keyframes);
        self
    }

    pub fn y(mut self, keyframes: &'static [f64]) -> Self {
        self.y = Some(keyframes);
        self
    }

    pub fn rotate(mut self, keyframes: &'static [f64]) -> Self {
        self.rotate = Some(keyframes);
        self
    }

    pub fn scale(mut self, keyframes: &'static [f64]) -> Self {
        self.scale = Some(keyframes);
        self
    }

    pub fn opacity(mut self, keyframes: &'static [f64]) -> Self {
        self.opacity = Some(keyframes);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Whether the timeline drives opacity as well as the transform
    pub fn animates_opacity(&self) -> bool {
        self.opacity.is_some_and(|keyframes| !keyframes.is_empty())
    }

    /// Whether sampling past `elapsed` would still change the frame
    pub fn is_finished(&self, elapsed: f64) -> bool {
        self.repeat == Repeat::Once && elapsed >= self.duration
    }

    /// Linear progress through the current loop, in `[0, 1]`
    pub fn progress(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let elapsed = elapsed.max(0.0);
        match self.repeat {
            Repeat::Once => (elapsed / self.duration).min(1.0),
            Repeat::Forever => (elapsed % self.duration) / self.duration,
        }
    }

    /// Property values `elapsed` seconds after the timeline started
    pub fn sample(&self, elapsed: f64) -> Frame {
        let progress = self.progress(elapsed);
        let defaults = Frame::default();
        let value = |track: Option<&'static [f64]>, fallback: f64| {
            track.map_or(fallback, |keyframes| {
                interpolate(keyframes, progress, self.easing).unwrap_or(fallback)
            })
        };

        Frame {
            x: value(self.x, defaults.x),
            y: value(self.y, defaults.y),
            rotate: value(self.rotate, defaults.rotate),
            scale: value(self.scale, defaults.scale),
            opacity: value(self.opacity, defaults.opacity),
        }
    }
}

/// Value at `progress` along evenly spaced keyframes, easing each segment
fn interpolate(keyframes: &[f64], progress: f64, easing: Easing) -> Option<f64> {
    match keyframes {
        [] => None,
        [only] => Some(*only),
        _ => {
            let segments = keyframes.len() - 1;
            let position = progress.clamp(0.0, 1.0) * segments as f64;
            let index = (position.floor() as usize).min(segments - 1);
            let local = easing.apply(position - index as f64);
            let (from, to) = (keyframes[index], keyframes[index + 1]);
            Some(from + (to - from) * local)
        }
    }
}

/// Continuous drift used by every backdrop shape
pub fn backdrop_drift(duration: f64) -> Timeline {
    Timeline::new(duration)
        .y(&[0.0, -25.0, 0.0])
        .x(&[0.0, 15.0, 0.0])
        .rotate(&[0.0, 360.0])
        .scale(&[1.0, 1.08, 1.0])
        .easing(Easing::Linear)
        .repeat(Repeat::Forever)
}

/// Vertical bounce of the hero scroll indicator
pub fn scroll_bounce() -> Timeline {
    Timeline::new(2.0)
        .y(&[0.0, 10.0, 0.0])
        .easing(Easing::EaseInOut)
        .repeat(Repeat::Forever)
}
