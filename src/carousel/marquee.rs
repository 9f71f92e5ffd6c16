use crate::{
    animation::{
        timeline::Timeline,
        tween::{Repeat, Tween},
    },
    carousel::{
        sizing::{CarouselSettings, LoopGeometry},
        track::Track,
    },
    foundation::core::{Affine, TargetId, TweenId, measured_width, snap_px, translate_x},
};

/// Infinite horizontal marquee over a finite item sequence.
///
/// `init` grows the track with clone passes until it covers twice the viewport, then
/// drives a linear, endlessly repeating translation by half the track width. Hover
/// pauses the loop in place; leaving resumes it.
///
/// Every (re)initialization tears the previous loop down first, and dropping the
/// carousel tears it down as well, so at most one tween ever drives the track.
#[derive(Debug)]
pub struct Carousel {
    settings: CarouselSettings,
    target: TargetId,
    timeline: Timeline,
    track: Option<Track>,
    tween: Option<TweenId>,
    geometry: Option<LoopGeometry>,
    hover_bound: bool,
}

impl Carousel {
    /// Idle carousel; nothing animates until [`Carousel::init`].
    pub fn new(settings: CarouselSettings) -> Self {
        Self {
            settings,
            target: TargetId(0),
            timeline: Timeline::new(),
            track: None,
            tween: None,
            geometry: None,
            hover_bound: false,
        }
    }

    /// (Re)build the loop over cards of the given measured widths.
    ///
    /// Returns `None` when there is nothing to lay out: no items, or a viewport that
    /// is not measurable yet. A zero-width track is planned but left unanimated.
    #[tracing::instrument(skip(self, widths), fields(items = widths.len()))]
    pub fn init(&mut self, widths: &[f64], viewport_width: Option<f64>) -> Option<LoopGeometry> {
        self.teardown();
        self.track = None;

        if widths.is_empty() {
            tracing::debug!("no items; carousel stays idle");
            return None;
        }
        let Some(viewport_width) = measured_width(viewport_width) else {
            tracing::debug!("viewport not measurable; carousel stays idle");
            return None;
        };

        let mut track = Track::new(self.target, widths.iter().copied());
        let geometry = LoopGeometry::plan(&mut track, viewport_width, &self.settings);
        if !geometry.reached_target {
            tracing::debug!(
                passes = geometry.passes,
                total_width = geometry.total_width,
                viewport_width,
                "clone cap reached before track covered twice the viewport"
            );
        }
        self.track = Some(track);
        self.geometry = Some(geometry);

        if !geometry.is_animatable() {
            tracing::debug!("track has no width; skipping animation");
            return Some(geometry);
        }

        let tween = match Tween::new(
            0.0,
            -geometry.translation_distance,
            geometry.duration_secs,
            Repeat::Infinite,
        ) {
            Ok(t) => t,
            Err(err) => {
                tracing::warn!(%err, "could not build marquee tween; skipping animation");
                return Some(geometry);
            }
        };

        // Cancel before create: never two tweens on one track.
        self.timeline.kill_tweens_of(self.target);
        self.tween = Some(self.timeline.add(self.target, tween));
        self.hover_bound = true;

        tracing::debug!(
            total_width = geometry.total_width,
            distance = geometry.translation_distance,
            duration_secs = geometry.duration_secs,
            "marquee started"
        );
        Some(geometry)
    }

    /// Unbind hover, kill the loop, and drop clones. Safe to call at any time.
    pub fn teardown(&mut self) {
        self.hover_bound = false;
        self.timeline.kill_tweens_of(self.target);
        self.tween = None;
        self.geometry = None;
        if let Some(track) = &mut self.track {
            track.remove_clones();
        }
        // Each init drives a fresh target so stale handles can never alias it.
        self.target = TargetId(self.target.0 + 1);
    }

    /// Pointer entered the viewport. Returns `true` when this paused the loop.
    pub fn pointer_enter(&mut self) -> bool {
        if !self.hover_bound {
            return false;
        }
        self.live_tween_mut().is_some_and(Tween::pause)
    }

    /// Pointer left the viewport. Returns `true` when this resumed the loop.
    pub fn pointer_leave(&mut self) -> bool {
        if !self.hover_bound {
            return false;
        }
        self.live_tween_mut().is_some_and(Tween::play)
    }

    /// Advance the animation clock by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        self.timeline.tick(dt);
    }

    /// Current horizontal offset of the track, in whole pixels.
    pub fn offset_x(&self) -> f64 {
        self.live_tween().map_or(0.0, |t| snap_px(t.value()))
    }

    /// Current track transform.
    pub fn transform(&self) -> Affine {
        translate_x(self.offset_x())
    }

    pub fn is_animating(&self) -> bool {
        self.live_tween().is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.live_tween().is_some_and(Tween::is_paused)
    }

    pub fn geometry(&self) -> Option<&LoopGeometry> {
        self.geometry.as_ref()
    }

    pub fn track(&self) -> Option<&Track> {
        self.track.as_ref()
    }

    /// The live loop tween, if any.
    pub fn live_tween(&self) -> Option<&Tween> {
        self.tween.and_then(|id| self.timeline.get(id))
    }

    /// Tweens currently driving this carousel's track.
    pub fn live_tween_count(&self) -> usize {
        self.timeline.tweens_of(self.target)
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    fn live_tween_mut(&mut self) -> Option<&mut Tween> {
        self.tween.and_then(|id| self.timeline.get_mut(id))
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(CarouselSettings::default())
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/marquee.rs"]
mod tests;
