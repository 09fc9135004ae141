// SPDX-License-Identifier: MPL-2.0
//! Time-related domain types for the toast: display time, fade time, easing
//! and the dismissal timer handle.

use crate::config::{
    DEFAULT_DISPLAY_DURATION_MS, DEFAULT_FADE_DURATION_MS, MAX_FADE_DURATION_MS,
};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// How long a toast stays fully visible before it dismisses itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DisplayDuration(Duration);

impl DisplayDuration {
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self::from_millis(DEFAULT_DISPLAY_DURATION_MS)
    }
}

impl From<Duration> for DisplayDuration {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

/// Length of a single fade animation, clamped to `0..=MAX_FADE_DURATION_MS`.
///
/// # Example
///
/// ```
/// use fade_toast::ui::toast::FadeDuration;
///
/// assert_eq!(FadeDuration::from_millis(150).as_millis(), 150);
/// assert_eq!(FadeDuration::from_millis(60_000).as_millis(), 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeDuration(u64);

impl FadeDuration {
    /// Creates a fade duration, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.min(MAX_FADE_DURATION_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for FadeDuration {
    fn default() -> Self {
        Self(DEFAULT_FADE_DURATION_MS)
    }
}

/// Interpolation curve applied to fade progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    /// Cubic ease-in-out.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` (clamped to `0..=1`) onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// A running opacity animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub from: f32,
    pub to: f32,
    pub started_at: Instant,
    pub duration: Duration,
}

impl Fade {
    /// Instant at which the fade reaches its target.
    #[must_use]
    pub fn ends_at(&self) -> Instant {
        self.started_at + self.duration
    }

    /// Opacity at `now` under the given easing.
    #[must_use]
    pub fn value_at(&self, now: Instant, easing: Easing) -> f32 {
        if self.duration.is_zero() || now >= self.ends_at() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * easing.apply(t)
    }
}

/// The single pending dismissal timer.
///
/// It is a plain deadline: cancelling it means dropping it, firing it means
/// the owner observed `now >= fires_at` on a tick. A duration too long to
/// represent as an `Instant` never fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTimer {
    fires_at: Option<Instant>,
}

impl DismissTimer {
    #[must_use]
    pub fn arm(from: Instant, duration: DisplayDuration) -> Self {
        Self {
            fires_at: from.checked_add(duration.as_duration()),
        }
    }

    /// Deadline of the timer, or `None` when it never fires.
    #[must_use]
    pub fn fires_at(&self) -> Option<Instant> {
        self.fires_at
    }
}
