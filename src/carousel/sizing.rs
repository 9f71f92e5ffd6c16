use crate::{
    carousel::track::Track,
    foundation::core::TargetId,
    foundation::error::{ShowreelError, ShowreelResult},
};

/// Upper bound on duplication passes; guards viewports the track can never fill.
pub const MAX_CLONE_PASSES: u32 = 20;
/// Largest configurable clone cap. Each pass copies every original, so the cap
/// bounds track memory even when items have no width.
pub const CLONE_PASSES_LIMIT: u32 = 64;
/// Default marquee speed.
pub const DEFAULT_SPEED_PX_PER_SEC: f64 = 150.0;
/// Shortest loop period, so small carousels stay readable.
pub const DEFAULT_MIN_DURATION_SECS: f64 = 10.0;

/// Loop sizing and speed knobs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Pixels per second used to derive the loop period.
    pub speed_px_per_sec: f64,
    /// Floor applied to the loop period.
    pub min_duration_secs: f64,
    /// Cap on clone passes.
    pub max_clone_passes: u32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            speed_px_per_sec: DEFAULT_SPEED_PX_PER_SEC,
            min_duration_secs: DEFAULT_MIN_DURATION_SECS,
            max_clone_passes: MAX_CLONE_PASSES,
        }
    }
}

impl CarouselSettings {
    /// Reject speeds and floors that would make the loop period meaningless, and clone
    /// caps outside `1..=CLONE_PASSES_LIMIT`.
    pub fn validate(&self) -> ShowreelResult<()> {
        if !self.speed_px_per_sec.is_finite() || self.speed_px_per_sec <= 0.0 {
            return Err(ShowreelError::config(
                "carousel.speed_px_per_sec must be finite and > 0",
            ));
        }
        if !self.min_duration_secs.is_finite() || self.min_duration_secs <= 0.0 {
            return Err(ShowreelError::config(
                "carousel.min_duration_secs must be finite and > 0",
            ));
        }
        if self.max_clone_passes == 0 || self.max_clone_passes > CLONE_PASSES_LIMIT {
            return Err(ShowreelError::config(format!(
                "carousel.max_clone_passes must be in 1..={CLONE_PASSES_LIMIT}, got {}",
                self.max_clone_passes
            )));
        }
        Ok(())
    }

    /// Loop period for a track of `total_width` pixels.
    pub fn duration_for(&self, total_width: f64) -> f64 {
        (total_width / self.speed_px_per_sec).max(self.min_duration_secs)
    }
}

/// Outcome of the clone-sizing loop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CloneReport {
    /// Full copies of the originals appended.
    pub passes: u32,
    /// Track width after the last pass.
    pub total_width: f64,
    /// Whether `total_width >= 2 * viewport_width` was met before the cap.
    pub reached_target: bool,
}

/// Append clone passes until the track is at least twice the viewport or the cap hits.
///
/// `max_passes` is clamped to [`CLONE_PASSES_LIMIT`].
pub fn fill_viewport(track: &mut Track, viewport_width: f64, max_passes: u32) -> CloneReport {
    let max_passes = max_passes.min(CLONE_PASSES_LIMIT);
    let target = viewport_width * 2.0;
    let mut total_width = track.scroll_width();
    let mut passes = 0u32;
    while total_width < target && passes < max_passes {
        track.append_clone_pass();
        total_width = track.scroll_width();
        passes += 1;
    }
    CloneReport {
        passes,
        total_width,
        reached_target: total_width >= target,
    }
}

/// Everything the marquee needs to start its loop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LoopGeometry {
    /// Final track width, clones included.
    pub total_width: f64,
    /// Distance of one seamless unit; always `total_width / 2`.
    pub translation_distance: f64,
    /// Loop period in seconds.
    pub duration_secs: f64,
    /// Clone passes performed.
    pub passes: u32,
    /// See [`CloneReport::reached_target`].
    pub reached_target: bool,
}

impl LoopGeometry {
    /// Grow `track` to fill the viewport and derive the loop from its final width.
    pub fn plan(track: &mut Track, viewport_width: f64, settings: &CarouselSettings) -> Self {
        let report = fill_viewport(track, viewport_width, settings.max_clone_passes);
        Self::from_report(report, settings)
    }

    /// Plan over a throwaway track built from `widths`.
    pub fn for_widths(widths: &[f64], viewport_width: f64, settings: &CarouselSettings) -> Self {
        let mut track = Track::new(TargetId(0), widths.iter().copied());
        Self::plan(&mut track, viewport_width, settings)
    }

    fn from_report(report: CloneReport, settings: &CarouselSettings) -> Self {
        Self {
            total_width: report.total_width,
            translation_distance: report.total_width / 2.0,
            duration_secs: settings.duration_for(report.total_width),
            passes: report.passes,
            reached_target: report.reached_target,
        }
    }

    /// A loop only makes sense over a track with positive width.
    pub fn is_animatable(&self) -> bool {
        self.translation_distance.is_finite() && self.translation_distance > 0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/sizing.rs"]
mod tests;
