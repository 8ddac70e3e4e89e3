//! Seams to the host: image loading and the per-frame driver.

use std::fmt;

use crate::slideshow::slot::SlotId;

/// Identifier the host's loader knows how to resolve (a URL, a path, a cache key).
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ImageKey(String);

impl ImageKey {
    /// Wrap an identifier.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ImageKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Receipt for one load request. Hand it back with the decoded image.
///
/// Only the newest ticket issued for a slot is honored; results for older
/// tickets are discarded on delivery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    pub(crate) slot: SlotId,
    pub(crate) serial: u64,
}

impl LoadTicket {
    /// Slot the image is destined for.
    pub fn slot(&self) -> SlotId {
        self.slot
    }
}

/// Asynchronous image resolver owned by the host.
///
/// Requests are fire-and-forget: the loader applies its own caching, retry and
/// fallback policy, then calls
/// [`SlideshowController::deliver`](crate::SlideshowController::deliver) with the
/// ticket. A load that never completes simply leaves the slot unchanged.
pub trait ImageLoader {
    /// Decoded image type stored in slots.
    type Image: Clone;

    /// Start resolving `key` for the slot named by `ticket`.
    fn request(&mut self, ticket: LoadTicket, key: &ImageKey);
}

/// Display-refresh callback registration owned by the host.
///
/// Once attached, the host calls
/// [`SlideshowController::tick`](crate::SlideshowController::tick) once per
/// refresh until detached. While paused, no ticks should be delivered.
pub trait FrameDriver {
    /// Register the per-frame callback.
    fn attach(&mut self);

    /// Remove the per-frame callback.
    fn detach(&mut self);

    /// Freeze or unfreeze tick delivery without dropping the registration.
    fn set_paused(&mut self, paused: bool);
}

/// Driver for hosts that call `tick` from their own loop and need no registration.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualDriver {
    attached: bool,
    paused: bool,
}

impl ManualDriver {
    /// Whether ticks are currently expected.
    pub fn is_running(&self) -> bool {
        self.attached && !self.paused
    }
}

impl FrameDriver for ManualDriver {
    fn attach(&mut self) {
        self.attached = true;
    }

    fn detach(&mut self) {
        self.attached = false;
        self.paused = false;
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slideshow/source.rs"]
mod tests;
