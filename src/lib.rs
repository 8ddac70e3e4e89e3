//! kenburns drives a continuous "Ken Burns" slideshow: every image slowly
//! zooms and pans while the next one cross-fades in underneath it.
//!
//! The crate is only the animation engine. It computes, for any time the host
//! asks about, the opacity, position and scale of two image slots. Decoding,
//! caching and painting belong to the host, which plugs in through
//! [`ImageLoader`] and [`FrameDriver`] and calls [`SlideshowController::tick`]
//! once per display refresh.
//!
//! # Pieces
//!
//! - [`PanZoom`]: one cycle's zoom, pan and closing fade as pure functions of time.
//! - [`SlideshowController`]: two slots, a prefetch [`RingBuffer`], and the
//!   swap/prefetch sequencing that loops over an image list.
//! - [`SlideshowConfig`]: the tunables, loadable from JSON.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Explicit time**: nothing reads a clock; every call takes a [`MediaTime`].
//! - **Deterministic when seeded**: with `SlideshowConfig::seed` set, a run is reproducible.
//!
//! See [`crate::guide`] for a walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod slideshow;

/// Standalone walkthrough of the engine's concepts and host integration.
pub mod guide;

pub use animation::ease::Ease;
pub use animation::pan_zoom::{FADE_OUT_DURATION, PanZoom, PanZoomEvents, PanZoomParams};
pub use foundation::clock::{Clock, ManualClock, MonotonicClock};
pub use foundation::core::{Affine, DurationRange, Fps, MediaTime, Point, Size, Vec2};
pub use foundation::error::{KenBurnsError, KenBurnsResult};
pub use slideshow::config::SlideshowConfig;
pub use slideshow::controller::{AnimationId, SlideshowController, SlideshowEvent, SlideshowFrame};
pub use slideshow::ring::RingBuffer;
pub use slideshow::slot::{Pose, Slot, SlotFrame, SlotId};
pub use slideshow::source::{FrameDriver, ImageKey, ImageLoader, LoadTicket, ManualDriver};
