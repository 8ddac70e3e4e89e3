use std::ops::RangeInclusive;

use rand::Rng;

use crate::foundation::error::{KenBurnsError, KenBurnsResult};

pub use kurbo::{Affine, Point, Size, Vec2};

/// A timestamp on the host's monotonic timeline, in seconds.
///
/// The origin is arbitrary; only differences between two `MediaTime`s carry
/// meaning. Wall-clock time must never be used here.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct MediaTime(pub f64);

impl MediaTime {
    /// Timeline origin.
    pub const ZERO: Self = Self(0.0);

    /// Construct from seconds.
    pub fn from_secs(secs: f64) -> Self {
        Self(secs)
    }

    /// Raw seconds value.
    pub fn secs(self) -> f64 {
        self.0
    }

    /// Seconds elapsed from `earlier` to `self` (negative if `earlier` is later).
    pub fn since(self, earlier: MediaTime) -> f64 {
        self.0 - earlier.0
    }

    /// This timestamp moved by `secs` seconds.
    pub fn offset(self, secs: f64) -> Self {
        Self(self.0 + secs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Frame rate expressed as a rational `num / den` frames per second.
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a validated frame rate.
    pub fn new(num: u32, den: u32) -> KenBurnsResult<Self> {
        if den == 0 {
            return Err(KenBurnsError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(KenBurnsError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of a single frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Timestamp of frame `frames` counted from `origin`.
    pub fn frame_time(self, origin: MediaTime, frames: u64) -> MediaTime {
        origin.offset(self.frames_to_secs(frames))
    }

    /// Convert a frame count into seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Convert seconds into a whole frame count, rounding down.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// Inclusive range of animation lifetimes, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DurationRange {
    /// Shortest lifetime.
    pub min: f64,
    /// Longest lifetime.
    pub max: f64,
}

impl Default for DurationRange {
    fn default() -> Self {
        Self {
            min: 10.0,
            max: 20.0,
        }
    }
}

impl DurationRange {
    /// Build a validated range.
    pub fn new(min: f64, max: f64) -> KenBurnsResult<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// A range that always yields `secs`.
    pub fn fixed(secs: f64) -> KenBurnsResult<Self> {
        Self::new(secs, secs)
    }

    /// Check that both bounds are finite, non-negative and ordered.
    pub fn validate(&self) -> KenBurnsResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(KenBurnsError::validation(
                "duration range bounds must be finite",
            ));
        }
        if self.min < 0.0 {
            return Err(KenBurnsError::validation(
                "duration range min must be >= 0",
            ));
        }
        if self.min > self.max {
            return Err(KenBurnsError::validation(format!(
                "duration range min ({}) must be <= max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Draw a lifetime uniformly from the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        uniform(rng, self.min, self.max)
    }
}

/// Uniform sample from the closed interval spanned by `a` and `b`, in either order.
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    let range: RangeInclusive<f64> = if a <= b { a..=b } else { b..=a };
    if range.start() == range.end() {
        return *range.start();
    }
    rng.random_range(range)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
