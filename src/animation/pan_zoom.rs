//! One in-flight Ken Burns cycle: a slow zoom and pan that fades out at the end.

use rand::Rng;

use crate::{
    animation::ease::Ease,
    foundation::core::{Affine, DurationRange, MediaTime, Point, Size, Vec2, uniform},
    slideshow::slot::{Pose, Slot, SlotId},
};

/// Length of the closing fade, in seconds.
pub const FADE_OUT_DURATION: f64 = 1.0;

/// Fraction of `zoom_intensity` added to the smallest sampled zoom.
const ZOOM_MIN_FACTOR: f64 = 0.3;
/// Fraction of `zoom_intensity` added to the largest sampled zoom.
const ZOOM_MAX_FACTOR: f64 = 1.4;
/// Vertical drift window for pan-across, as fractions of the available travel.
const PAN_ACROSS_DRIFT: (f64, f64) = (0.3, 0.7);

/// A notification that fires at most once per animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OneShot {
    Pending,
    Fired,
}

impl OneShot {
    /// Returns true the first time it is called with `ready`, false forever after.
    fn fire_if(&mut self, ready: bool) -> bool {
        if ready && *self == Self::Pending {
            *self = Self::Fired;
            return true;
        }
        false
    }
}

/// Notifications produced by a single [`PanZoom::update`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanZoomEvents {
    /// The closing fade window was entered.
    pub will_fade_out: bool,
    /// The animation ran out.
    pub completed: bool,
}

/// Construction parameters shared by every animation a controller starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanZoomParams {
    /// Zoom strength, `>= 0`. `0` disables zoom and pan.
    pub zoom_intensity: f64,
    /// Lifetime range; `None` builds an already-finished animation.
    pub duration: Option<DurationRange>,
    /// Pan the full horizontal travel with a randomized vertical drift.
    pub pans_across: bool,
    /// Timing curve for zoom and pan.
    pub ease: Ease,
}

/// Time-parameterized pan/zoom/fade bound to one slot.
///
/// Every query is a pure function of the time passed in. Equality is not
/// structural: the controller tracks animations by handle.
#[derive(Debug)]
pub struct PanZoom {
    slot: SlotId,
    start_time: MediaTime,
    duration: f64,
    zoom: f64,
    offset: Vec2,
    ease: Ease,
    will_fade_out: OneShot,
    completed: OneShot,
}

impl PanZoom {
    /// Sample a new animation for `slot`, starting at `now`.
    pub fn new<R: Rng + ?Sized>(
        slot: SlotId,
        params: &PanZoomParams,
        now: MediaTime,
        rng: &mut R,
    ) -> Self {
        let duration = params.duration.map_or(0.0, |r| r.sample(rng));

        let intensity = params.zoom_intensity.max(0.0);
        let zoom = uniform(
            rng,
            1.0 + ZOOM_MIN_FACTOR * intensity,
            1.0 + ZOOM_MAX_FACTOR * intensity,
        );

        // Offsets are fractions of the unscaled size; 1 - zoom is the most the
        // scaled image can move before an edge shows.
        let travel = 1.0 - zoom;
        let offset = if params.pans_across {
            Vec2::new(
                travel,
                uniform(
                    rng,
                    PAN_ACROSS_DRIFT.0 * travel,
                    PAN_ACROSS_DRIFT.1 * travel,
                ),
            )
        } else {
            Vec2::new(uniform(rng, travel, 0.0), uniform(rng, travel, 0.0))
        };

        Self {
            slot,
            start_time: now,
            duration,
            zoom,
            offset,
            ease: params.ease,
            will_fade_out: OneShot::Pending,
            completed: OneShot::Pending,
        }
    }

    /// Slot this animation drives.
    pub fn slot(&self) -> SlotId {
        self.slot
    }

    /// When the animation (re)started, after pause adjustments.
    pub fn start_time(&self) -> MediaTime {
        self.start_time
    }

    /// Total lifetime in seconds; `0` means already complete.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Final scale multiplier, `>= 1`.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Final pan offset as fractions of the unscaled size, each in `[1 - zoom, 0]`.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: MediaTime) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (now.since(self.start_time) / self.duration).clamp(0.0, 1.0)
    }

    /// Progress after the timing curve.
    pub fn eased_progress(&self, now: MediaTime) -> f64 {
        self.ease.apply(self.progress(now))
    }

    /// Scale at `now`, from `1` up to [`zoom`](Self::zoom).
    pub fn current_zoom(&self, now: MediaTime) -> f64 {
        self.eased_progress(now) * (self.zoom - 1.0) + 1.0
    }

    /// Seconds left before the animation completes.
    pub fn time_remaining(&self, now: MediaTime) -> f64 {
        (1.0 - self.progress(now)) * self.duration.max(0.0)
    }

    /// Opacity at `now`: opaque until the last [`FADE_OUT_DURATION`] seconds, then linear to 0.
    pub fn current_alpha(&self, now: MediaTime) -> f64 {
        let remaining = self.time_remaining(now);
        if remaining > FADE_OUT_DURATION {
            return 1.0;
        }
        (remaining / FADE_OUT_DURATION).clamp(0.0, 1.0)
    }

    /// Pan position at `now` for a surface of `size`.
    pub fn current_position(&self, now: MediaTime, size: Size) -> Point {
        let eased = self.eased_progress(now);
        Point::new(
            size.width * eased * self.offset.x,
            size.height * eased * self.offset.y,
        )
    }

    /// Complete pose at `now`.
    pub fn pose(&self, now: MediaTime, size: Size) -> Pose {
        Pose {
            opacity: self.current_alpha(now),
            position: self.current_position(now, size),
            transform: Affine::scale(self.current_zoom(now)),
        }
    }

    /// Write the pose for `now` into `slot` and report which one-shot
    /// notifications became due. Each flag is reported at most once over the
    /// animation's lifetime, no matter how often this is called.
    pub fn update<I>(
        &mut self,
        now: MediaTime,
        bounds: Size,
        slot: &mut Slot<I>,
    ) -> PanZoomEvents {
        slot.apply(self.pose(now, bounds));

        let remaining = self.time_remaining(now);
        PanZoomEvents {
            will_fade_out: self.will_fade_out.fire_if(remaining <= FADE_OUT_DURATION),
            completed: self.completed.fire_if(remaining <= 0.0),
        }
    }

    /// Cut the remaining lifetime to exactly [`FADE_OUT_DURATION`] from `now`.
    pub fn force_fade_out(&mut self, now: MediaTime) {
        self.duration = now.since(self.start_time) + FADE_OUT_DURATION;
    }

    /// Move the start forward by `secs`, used to skip over a pause.
    pub(crate) fn shift_start(&mut self, secs: f64) {
        self.start_time = self.start_time.offset(secs);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pan_zoom.rs"]
mod tests;
