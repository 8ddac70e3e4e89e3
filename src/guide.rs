//! # kenburns guide
//!
//! This module is a standalone walkthrough of how the engine is put together
//! and how a host wires it into a UI. It contains no code.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`PanZoom`](crate::PanZoom): one *cycle*. It samples a final zoom and pan
//!   offset once, then answers "what does the slot look like at time `t`?"
//! - [`Slot`](crate::Slot): one of two image surfaces. It holds an image and the
//!   [`Pose`](crate::Pose) (opacity, position, scale) a renderer applies.
//! - [`SlideshowController`](crate::SlideshowController): owns both slots, the
//!   active cycles, and the prefetch [`RingBuffer`](crate::RingBuffer).
//! - [`MediaTime`](crate::MediaTime): seconds on the host's monotonic timeline.
//!
//! ---
//!
//! ## One cycle
//!
//! A cycle with lifetime `d` and final zoom `z` evaluates, at time `t`:
//!
//! - `progress = (t - start) / d`, clamped to `[0, 1]` (a zero `d` is already complete)
//! - `eased = ease(progress)`, by default the `cubic-bezier(0, 0, 0.58, 1)` ease-out
//! - `zoom(t) = 1 + eased * (z - 1)`
//! - `position(t) = (width * eased * offset.x, height * eased * offset.y)`
//! - `alpha(t) = 1` until the last [`FADE_OUT_DURATION`](crate::FADE_OUT_DURATION)
//!   seconds, then linear down to `0`
//!
//! Offsets lie in `[1 - z, 0]`, so the zoomed image always covers the bounds.
//!
//! Each [`PanZoom::update`](crate::PanZoom::update) reports two one-shot
//! notifications: *will fade out* (the closing fade began) and *completed*.
//! Each is reported at most once.
//!
//! ---
//!
//! ## The slideshow loop
//!
//! ```text
//! IDLE --start_animating--> ANIMATING --fade window--> swap slots + start next cycle
//!                               ^                                  |
//!                               |                                  v
//!                               +---- prefetch + report <--- old cycle completes
//! ```
//!
//! 1. [`start_animating`](crate::SlideshowController::start_animating) attaches the
//!    [`FrameDriver`](crate::FrameDriver) and starts a zero-length *seed* cycle.
//! 2. The first [`tick`](crate::SlideshowController::tick) sees the seed enter its
//!    fade: the slots swap and a full cycle starts on the new current slot.
//! 3. The seed completes in the same tick: the next image is prefetched into the
//!    slot underneath and an
//!    [`AnimationFinished`](crate::SlideshowEvent::AnimationFinished) event is
//!    returned.
//! 4. From then on each cycle's fade starts the following one, and its completion
//!    prefetches the image after that.
//!
//! During a swap the outgoing slot is painted on top so it fades out over the
//! incoming image. [`paint_order`](crate::SlideshowController::paint_order) and
//! [`frame`](crate::SlideshowController::frame) report the order bottom-first.
//!
//! ---
//!
//! ## Image sources
//!
//! - [`set_image_queue`](crate::SlideshowController::set_image_queue): identifiers
//!   resolved by the host's [`ImageLoader`](crate::ImageLoader). Requests carry a
//!   [`LoadTicket`](crate::LoadTicket); the host returns the decoded image through
//!   [`deliver`](crate::SlideshowController::deliver). Stale tickets are ignored.
//! - [`set_images`](crate::SlideshowController::set_images): images the host has
//!   already decoded.
//! - [`set_image`](crate::SlideshowController::set_image): one image, shown forever.
//!
//! With `loops` enabled every image read from the ring is written back, so the
//! sequence repeats. With `loops` disabled the show holds the last image, emits
//! [`Finished`](crate::SlideshowEvent::Finished) and stops.
//!
//! ---
//!
//! ## Host integration sketch
//!
//! ```text
//! on display refresh:   events = controller.tick(clock.now())
//!                       paint controller.frame() bottom-to-top
//! on loader callback:   controller.deliver(ticket, image)
//! on app background:    controller.pause(clock.now())
//! on app foreground:    controller.resume(clock.now())
//! ```
//!
//! Everything runs on one serial context. Pausing shifts every cycle's start
//! forward on resume, so a cycle paused at 40% resumes at exactly 40%.
