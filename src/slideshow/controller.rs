//! Double-buffered slideshow sequencing on top of [`PanZoom`].
//!
//! Two slots alternate: the "current" slot runs a pan/zoom cycle while the
//! "next" slot holds the prefetched upcoming image underneath it. When the
//! current cycle enters its closing fade the slots swap and a fresh cycle
//! starts; when the old cycle completes the following image is prefetched.

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    animation::{ease::Ease, pan_zoom::PanZoom},
    foundation::core::{DurationRange, MediaTime, Size},
    foundation::error::KenBurnsResult,
    slideshow::{
        config::{SlideshowConfig, validate_zoom_intensity},
        ring::RingBuffer,
        slot::{Slot, SlotFrame, SlotId},
        source::{FrameDriver, ImageKey, ImageLoader, LoadTicket},
    },
};

/// Handle of an animation owned by a controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

/// Notifications produced by [`SlideshowController::tick`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SlideshowEvent {
    /// A cycle finished.
    AnimationFinished {
        /// Sequence position of the image that just finished (0 without a sequence).
        completed_index: usize,
        /// Lifetime of the cycle now running, 0 if none.
        next_duration: f64,
    },
    /// A non-looping sequence has shown its last image; the controller stopped.
    Finished,
}

/// Serializable snapshot of both slots for a renderer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SlideshowFrame {
    /// Slots in paint order, bottom first.
    pub slots: [SlotFrame; 2],
    /// Slot running the newest cycle.
    pub current: SlotId,
    /// Sequence position of the last reported image, `None` without a sequence.
    pub sequence_index: Option<usize>,
}

enum Source<I> {
    /// Static mode: `next` mirrors `current`.
    None,
    Keys {
        ring: RingBuffer<ImageKey>,
        keys: Vec<ImageKey>,
    },
    Images {
        ring: RingBuffer<I>,
        len: usize,
    },
}

impl<I> Source<I> {
    fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Keys { keys, .. } => keys.len(),
            Self::Images { len, .. } => *len,
        }
    }
}

/// Drives the Ken Burns slideshow from host ticks.
///
/// All mutation happens synchronously inside the calls below, which the host
/// makes from one serial context (its display-refresh callback and UI events).
pub struct SlideshowController<L: ImageLoader, D: FrameDriver> {
    config: SlideshowConfig,
    loader: L,
    driver: D,
    rng: StdRng,
    bounds: Size,
    slots: [Slot<L::Image>; 2],
    current: SlotId,
    paint_order: [SlotId; 2],
    animations: Vec<(AnimationId, PanZoom)>,
    next_animation_id: u64,
    source: Source<L::Image>,
    /// Sequence positions consumed, including the image loaded into `current`.
    cursor: u64,
    exhausted: bool,
    index: Option<usize>,
    paused_at: Option<MediaTime>,
    placeholder: Option<L::Image>,
    load_serial: u64,
    pending_loads: [u64; 2],
}

impl<L: ImageLoader, D: FrameDriver> SlideshowController<L, D> {
    /// Build an idle controller. Fails if `config` does not validate.
    pub fn new(config: SlideshowConfig, loader: L, driver: D) -> KenBurnsResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            config,
            loader,
            driver,
            rng,
            bounds: Size::ZERO,
            slots: [Slot::default(), Slot::default()],
            current: SlotId::First,
            paint_order: [SlotId::Second, SlotId::First],
            animations: Vec::new(),
            next_animation_id: 0,
            source: Source::None,
            cursor: 0,
            exhausted: false,
            index: None,
            paused_at: None,
            placeholder: None,
            load_serial: 0,
            pending_loads: [0; 2],
        })
    }

    /// Replace the random source used for new animations.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Active settings.
    pub fn config(&self) -> &SlideshowConfig {
        &self.config
    }

    /// The host's loader.
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Mutable access to the host's loader.
    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }

    /// The host's frame driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Size of the host view the slots fill.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Resize the host view. Takes effect on the next tick.
    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    /// Lifetime range for cycles started from now on.
    pub fn set_duration(&mut self, min: f64, max: f64) -> KenBurnsResult<()> {
        self.config.duration_range = DurationRange::new(min, max)?;
        Ok(())
    }

    /// Zoom strength for cycles started from now on.
    pub fn set_zoom_intensity(&mut self, zoom_intensity: f64) -> KenBurnsResult<()> {
        validate_zoom_intensity(zoom_intensity)?;
        self.config.zoom_intensity = zoom_intensity;
        Ok(())
    }

    /// Pan mode for cycles started from now on.
    pub fn set_pans_across(&mut self, pans_across: bool) {
        self.config.pans_across = pans_across;
    }

    /// Timing curve for cycles started from now on.
    pub fn set_ease(&mut self, ease: Ease) {
        self.config.ease = ease;
    }

    /// Whether sequences repeat. Applies to images read from now on.
    pub fn set_loops(&mut self, loops: bool) {
        self.config.loops = loops;
    }

    /// Image shown in a slot while its load is in flight.
    pub fn set_placeholder(&mut self, placeholder: Option<L::Image>) {
        self.placeholder = placeholder;
    }

    /// True while at least one cycle is active.
    pub fn is_animating(&self) -> bool {
        !self.animations.is_empty()
    }

    /// True between [`pause`](Self::pause) and [`resume`](Self::resume).
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Sequence position of the last reported image; `None` in static mode.
    pub fn sequence_index(&self) -> Option<usize> {
        self.index
    }

    /// Sequence positions consumed so far.
    pub fn read_cursor(&self) -> u64 {
        self.cursor
    }

    /// Slot running the newest cycle.
    pub fn current_slot(&self) -> SlotId {
        self.current
    }

    /// Slot holding the upcoming image.
    pub fn next_slot(&self) -> SlotId {
        self.current.other()
    }

    /// Read access to a slot.
    pub fn slot(&self, id: SlotId) -> &Slot<L::Image> {
        &self.slots[id.index()]
    }

    /// Slots bottom to top.
    pub fn paint_order(&self) -> [SlotId; 2] {
        self.paint_order
    }

    /// Active cycles in start order.
    pub fn animations(&self) -> impl Iterator<Item = (AnimationId, &PanZoom)> {
        self.animations.iter().map(|(id, a)| (*id, a))
    }

    /// Snapshot of both slots in paint order.
    pub fn frame(&self) -> SlideshowFrame {
        SlideshowFrame {
            slots: self
                .paint_order
                .map(|id| self.slots[id.index()].snapshot(id)),
            current: self.current,
            sequence_index: self.index,
        }
    }

    /// Show one image forever (static mode). Clears any sequence.
    pub fn set_image(&mut self, image: L::Image) {
        tracing::debug!("static image mode");
        self.source = Source::None;
        self.index = None;
        self.cursor = 0;
        self.exhausted = false;
        self.cancel_load(SlotId::First);
        self.cancel_load(SlotId::Second);
        self.slots[self.next_slot().index()].set_image(Some(image.clone()));
        self.slots[self.current.index()].set_image(Some(image));
    }

    /// Play a sequence of loader identifiers.
    ///
    /// Passing the list already being played is a no-op, so an in-progress
    /// show is never restarted. A single pass that has finished is reloaded
    /// from the start. An empty list clears the sequence.
    #[tracing::instrument(skip(self, keys), fields(count = keys.len()))]
    pub fn set_image_queue(&mut self, keys: Vec<ImageKey>) {
        if let Source::Keys { keys: buffered, .. } = &self.source
            && *buffered == keys
            && !self.pass_complete()
        {
            tracing::trace!("image queue unchanged");
            return;
        }
        if keys.is_empty() {
            self.clear_sequence();
            return;
        }

        let mut ring: RingBuffer<ImageKey> = keys.iter().cloned().collect();
        if let Some(first) = ring.read() {
            if self.config.loops {
                ring.write(first.clone());
            }
            self.request_load(self.current, &first);
        }
        self.source = Source::Keys { ring, keys };
        self.begin_sequence();
    }

    /// Play a sequence of already-decoded images. An empty list clears the sequence.
    #[tracing::instrument(skip(self, images), fields(count = images.len()))]
    pub fn set_images(&mut self, images: Vec<L::Image>) {
        if images.is_empty() {
            self.clear_sequence();
            return;
        }

        let len = images.len();
        let mut ring: RingBuffer<L::Image> = images.into_iter().collect();
        let first = ring.read();
        if self.config.loops
            && let Some(first) = &first
        {
            ring.write(first.clone());
        }
        self.cancel_load(self.current);
        self.slots[self.current.index()].set_image(first);
        self.source = Source::Images { ring, len };
        self.begin_sequence();
    }

    /// Hand a decoded image to the slot named by `ticket`.
    ///
    /// Returns false, leaving the slot alone, when a newer request for the same
    /// slot has been issued since.
    pub fn deliver(&mut self, ticket: LoadTicket, image: L::Image) -> bool {
        let slot = ticket.slot.index();
        if self.pending_loads[slot] != ticket.serial {
            tracing::trace!(slot = ?ticket.slot, "dropping stale image delivery");
            return false;
        }
        self.slots[slot].set_image(Some(image));
        true
    }

    /// Attach the frame driver and start the seed cycle. No-op while animating.
    ///
    /// The seed cycle has zero length, so the first tick immediately swaps to
    /// the next image and starts a full-length cycle.
    #[tracing::instrument(skip(self))]
    pub fn start_animating(&mut self, now: MediaTime) {
        if self.is_animating() {
            return;
        }
        self.clear_pause();
        self.driver.attach();
        self.start_new_animation(now, None);
    }

    /// Reset both slots to identity and, if animating, drop every cycle and detach the driver.
    #[tracing::instrument(skip(self))]
    pub fn stop_animating(&mut self) {
        for slot in &mut self.slots {
            slot.reset(self.bounds);
        }
        self.clear_pause();
        if !self.is_animating() {
            return;
        }
        self.animations.clear();
        self.driver.detach();
    }

    /// Freeze the driver and remember when.
    #[tracing::instrument(skip(self))]
    pub fn pause(&mut self, now: MediaTime) {
        if self.paused_at.is_some() {
            return;
        }
        self.driver.set_paused(true);
        self.paused_at = Some(now);
    }

    /// Unfreeze the driver, moving every cycle's start forward by the time spent paused.
    #[tracing::instrument(skip(self))]
    pub fn resume(&mut self, now: MediaTime) {
        let Some(paused_at) = self.paused_at.take() else {
            return;
        };
        let paused_for = now.since(paused_at).max(0.0);
        for (_, animation) in &mut self.animations {
            animation.shift_start(paused_for);
        }
        tracing::debug!(paused_for, "resumed");
        self.driver.set_paused(false);
    }

    /// Skip ahead: the oldest cycle starts its closing fade now.
    pub fn advance(&mut self, now: MediaTime) -> bool {
        match self.animations.first_mut() {
            Some((_, animation)) => {
                animation.force_fade_out(now);
                true
            }
            None => false,
        }
    }

    /// Per-frame entry point. Applies every cycle to its slot and advances the show.
    pub fn tick(&mut self, now: MediaTime) -> Vec<SlideshowEvent> {
        let mut events = Vec::new();
        if self.paused_at.is_some() {
            return events;
        }

        // Cycles started during this tick are first applied on the next one.
        let ids: Vec<AnimationId> = self.animations.iter().map(|(id, _)| *id).collect();
        for id in ids {
            let Some((_, animation)) = self.animations.iter_mut().find(|(a, _)| *a == id) else {
                continue;
            };
            let slot = &mut self.slots[animation.slot().index()];
            let fired = animation.update(now, self.bounds, slot);

            if fired.will_fade_out {
                self.will_fade_out(now);
            }
            if fired.completed {
                self.did_finish(id, &mut events);
            }
        }
        events
    }

    /// Drop a pending pause and unfreeze the driver if it was frozen.
    fn clear_pause(&mut self) {
        if self.paused_at.take().is_some() {
            self.driver.set_paused(false);
        }
    }

    fn start_new_animation(&mut self, now: MediaTime, duration: Option<DurationRange>) {
        self.slots[self.current.index()].reset_geometry(self.bounds);
        let params = self.config.pan_zoom_params(duration);
        let animation = PanZoom::new(self.current, &params, now, &mut self.rng);

        let id = AnimationId(self.next_animation_id);
        self.next_animation_id += 1;
        tracing::debug!(
            id = id.0,
            slot = ?self.current,
            duration = animation.duration(),
            zoom = animation.zoom(),
            "started cycle"
        );
        self.animations.push((id, animation));
    }

    fn will_fade_out(&mut self, now: MediaTime) {
        if self.exhausted {
            tracing::debug!("sequence exhausted, holding last image");
            return;
        }
        self.swap_current_and_next();
        self.start_new_animation(now, Some(self.config.duration_range));
    }

    fn did_finish(&mut self, id: AnimationId, events: &mut Vec<SlideshowEvent>) {
        self.animations.retain(|(a, _)| *a != id);

        let len = self.source.len();
        let completed_index = if len > 0 {
            (self.cursor.saturating_sub(2) % len as u64) as usize
        } else {
            0
        };
        self.queue_next_image();
        if len > 0 {
            self.index = Some(completed_index);
        }

        let next_duration = self.animations.first().map_or(0.0, |(_, a)| a.duration());
        tracing::debug!(id = id.0, completed_index, next_duration, "finished cycle");
        events.push(SlideshowEvent::AnimationFinished {
            completed_index,
            next_duration,
        });

        if self.animations.is_empty() {
            tracing::debug!("slideshow finished");
            self.paint_order = [self.next_slot(), self.current];
            self.stop_animating();
            events.push(SlideshowEvent::Finished);
        }
    }

    fn queue_next_image(&mut self) {
        let next = self.next_slot();
        let loops = self.config.loops;
        match &mut self.source {
            Source::Keys { ring, .. } => {
                self.cursor += 1;
                match ring.read() {
                    Some(key) => {
                        if loops {
                            ring.write(key.clone());
                        }
                        self.request_load(next, &key);
                    }
                    None => self.exhausted = true,
                }
            }
            Source::Images { ring, .. } => {
                self.cursor += 1;
                match ring.read() {
                    Some(image) => {
                        if loops {
                            ring.write(image.clone());
                        }
                        self.cancel_load(next);
                        self.slots[next.index()].set_image(Some(image));
                    }
                    None => self.exhausted = true,
                }
            }
            Source::None => {
                let image = self.slots[self.current.index()].image().cloned();
                self.slots[next.index()].set_image(image);
            }
        }
    }

    /// The outgoing slot is raised to the top so it fades out over the incoming one.
    fn swap_current_and_next(&mut self) {
        let outgoing = self.current;
        let incoming = outgoing.other();
        self.paint_order = [incoming, outgoing];
        self.current = incoming;
        tracing::trace!(current = ?incoming, "swapped slots");
    }

    /// A non-looping sequence has run out and its last cycle is over.
    fn pass_complete(&self) -> bool {
        self.exhausted && self.animations.is_empty()
    }

    fn begin_sequence(&mut self) {
        self.index = Some(0);
        self.cursor = 1;
        self.exhausted = false;
        self.queue_next_image();
    }

    fn clear_sequence(&mut self) {
        self.source = Source::None;
        self.index = None;
        self.cursor = 0;
        self.exhausted = false;
    }

    fn request_load(&mut self, slot: SlotId, key: &ImageKey) {
        self.load_serial += 1;
        self.pending_loads[slot.index()] = self.load_serial;
        if let Some(placeholder) = &self.placeholder {
            self.slots[slot.index()].set_image(Some(placeholder.clone()));
        }
        tracing::trace!(%key, ?slot, "requesting image");
        self.loader.request(
            LoadTicket {
                slot,
                serial: self.load_serial,
            },
            key,
        );
    }

    /// Invalidate any in-flight load for `slot`.
    fn cancel_load(&mut self, slot: SlotId) {
        self.load_serial += 1;
        self.pending_loads[slot.index()] = self.load_serial;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slideshow/controller.rs"]
mod tests;
