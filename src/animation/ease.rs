use kurbo::{CubicBez, ParamCurve, Point};

/// Timing curve mapping linear progress in `[0, 1]` onto eased progress.
///
/// Every variant is monotonic and maps `0 -> 0` and `1 -> 1` exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// No easing.
    Linear,
    /// Quadratic deceleration.
    OutQuad,
    /// Cubic deceleration.
    OutCubic,
    /// The platform "ease-out" curve, `cubic-bezier(0, 0, 0.58, 1)`.
    #[default]
    AppleOut,
}

const APPLE_OUT: (Point, Point) = (Point::new(0.0, 0.0), Point::new(0.58, 1.0));

/// Bisection steps when inverting a bezier's x(s); 2^-40 is far below f64 display noise.
const BEZIER_STEPS: usize = 40;

impl Ease {
    /// Apply the curve. Input is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::AppleOut => cubic_bezier(APPLE_OUT.0, APPLE_OUT.1, t),
        }
    }
}

/// CSS-style timing function through `(0,0)`, `p1`, `p2`, `(1,1)` evaluated at x = `t`.
fn cubic_bezier(p1: Point, p2: Point, t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let curve = CubicBez::new(Point::ZERO, p1, p2, Point::new(1.0, 1.0));

    // x(s) is monotonic for control x in [0, 1].
    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..BEZIER_STEPS {
        let mid = 0.5 * (lo + hi);
        if curve.eval(mid).x < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    curve.eval(0.5 * (lo + hi)).y.clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
