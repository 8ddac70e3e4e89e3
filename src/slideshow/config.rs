use crate::{
    animation::{ease::Ease, pan_zoom::PanZoomParams},
    foundation::core::DurationRange,
    foundation::error::{KenBurnsError, KenBurnsResult},
};

/// Host-tunable slideshow settings.
///
/// Missing JSON fields take their defaults, so `{}` is a valid configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlideshowConfig {
    /// Repeat the image sequence forever. When false the show stops after one pass.
    pub loops: bool,
    /// Pan the full horizontal travel instead of a random drift.
    pub pans_across: bool,
    /// Zoom strength, finite and `>= 0`.
    pub zoom_intensity: f64,
    /// Lifetime range for every animation after the first.
    pub duration_range: DurationRange,
    /// Timing curve for zoom and pan.
    pub ease: Ease,
    /// Seed for the animation random source. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            loops: true,
            pans_across: false,
            zoom_intensity: 1.0,
            duration_range: DurationRange::default(),
            ease: Ease::default(),
            seed: None,
        }
    }
}

impl SlideshowConfig {
    /// Check every field.
    pub fn validate(&self) -> KenBurnsResult<()> {
        validate_zoom_intensity(self.zoom_intensity)?;
        self.duration_range.validate()
    }

    /// Parse JSON and validate.
    pub fn from_json_str(s: &str) -> KenBurnsResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub(crate) fn pan_zoom_params(&self, duration: Option<DurationRange>) -> PanZoomParams {
        PanZoomParams {
            zoom_intensity: self.zoom_intensity,
            duration,
            pans_across: self.pans_across,
            ease: self.ease,
        }
    }
}

pub(crate) fn validate_zoom_intensity(v: f64) -> KenBurnsResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(KenBurnsError::validation(
            "zoom_intensity must be finite and >= 0",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/slideshow/config.rs"]
mod tests;
