use crate::foundation::core::{Affine, Point, Size};

/// Which of the two image surfaces a value refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SlotId {
    /// The surface that starts out as "current".
    First,
    /// The surface that starts out as "next".
    Second,
}

impl SlotId {
    /// Position of this slot in a two-element array.
    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// The other slot.
    pub fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Geometry and opacity applied to a slot for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Top-left offset of the surface inside the host bounds.
    pub position: Point,
    /// Uniform scale transform about the surface origin.
    pub transform: Affine,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    /// Fully opaque, unmoved, unscaled.
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        position: Point::ZERO,
        transform: Affine::IDENTITY,
    };
}

/// A renderable surface: one image plus the pose the renderer should paint it with.
///
/// The controller owns both slots and mutates them every frame; the host's view
/// reads them back through [`SlideshowController::slot`](crate::SlideshowController::slot)
/// or a [`SlideshowFrame`](crate::SlideshowFrame) snapshot.
#[derive(Clone, Debug)]
pub struct Slot<I> {
    image: Option<I>,
    pose: Pose,
    size: Size,
}

impl<I> Default for Slot<I> {
    fn default() -> Self {
        Self {
            image: None,
            pose: Pose::IDENTITY,
            size: Size::ZERO,
        }
    }
}

impl<I> Slot<I> {
    /// Image currently assigned, if any.
    pub fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }

    /// Current pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Opacity in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.pose.opacity
    }

    /// Offset inside the host bounds.
    pub fn position(&self) -> Point {
        self.pose.position
    }

    /// Scale transform.
    pub fn transform(&self) -> Affine {
        self.pose.transform
    }

    /// Unscaled surface size (tracks the host bounds).
    pub fn size(&self) -> Size {
        self.size
    }

    pub(crate) fn set_image(&mut self, image: Option<I>) {
        self.image = image;
    }

    pub(crate) fn apply(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Identity transform at the origin, sized to `bounds`. Opacity is kept.
    pub(crate) fn reset_geometry(&mut self, bounds: Size) {
        self.pose.transform = Affine::IDENTITY;
        self.pose.position = Point::ZERO;
        self.size = bounds;
    }

    /// Full visual reset: identity pose, opaque, sized to `bounds`.
    pub(crate) fn reset(&mut self, bounds: Size) {
        self.pose = Pose::IDENTITY;
        self.size = bounds;
    }

    pub(crate) fn snapshot(&self, id: SlotId) -> SlotFrame {
        SlotFrame {
            slot: id,
            has_image: self.image.is_some(),
            opacity: self.pose.opacity,
            position: self.pose.position,
            transform: self.pose.transform,
            size: self.size,
        }
    }
}

/// Serializable view of one slot, without the image payload.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SlotFrame {
    /// Which slot this is.
    pub slot: SlotId,
    /// Whether an image (or placeholder) is assigned.
    pub has_image: bool,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Offset inside the host bounds.
    pub position: Point,
    /// Scale transform.
    pub transform: Affine,
    /// Unscaled surface size.
    pub size: Size,
}

#[cfg(test)]
#[path = "../../tests/unit/slideshow/slot.rs"]
mod tests;
