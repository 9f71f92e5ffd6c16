//! Showreel renders a "recent projects" showcase as a seamless, infinite marquee.
//!
//! # Pipeline overview
//!
//! 1. **Load**: one `GET <base>/get-recent-projects` through a [`ProjectSource`]; the
//!    result settles into a [`LoadState`] (loading, failed, or ready).
//! 2. **Size**: the ready items become a [`Track`] that is grown with clone passes
//!    until it covers twice the viewport ([`LoopGeometry`]).
//! 3. **Animate**: a linear, infinitely repeating [`Tween`] on a [`Timeline`] slides the
//!    track by half its width, so the wrap is invisible. Hover pauses it in place.
//! 4. **Render**: [`RecentProjects::view`] produces a [`View`]; [`StripRenderer`] turns
//!    it into text.
//!
//! The animation clock is driven explicitly through `tick(dt)`; nothing here spawns
//! threads or timers.
#![forbid(unsafe_code)]

mod animation;
mod carousel;
mod component;
mod foundation;
mod projects;
mod render;

pub use animation::timeline::Timeline;
pub use animation::tween::{PlayState, Repeat, Tween};
pub use carousel::marquee::Carousel;
pub use carousel::sizing::{
    CLONE_PASSES_LIMIT, CarouselSettings, CloneReport, DEFAULT_MIN_DURATION_SECS,
    DEFAULT_SPEED_PX_PER_SEC, LoopGeometry, MAX_CLONE_PASSES, fill_viewport,
};
pub use carousel::track::{Track, TrackNode};
pub use component::recent_projects::RecentProjects;
pub use component::view::{
    Card, CardSpan, EMPTY_TEXT, HEADING, LOADING_TEXT, LinkOpener, VIEW_PROJECT_LABEL, View,
    ViewBody,
};
pub use foundation::config::ShowreelConfig;
pub use foundation::core::{
    Affine, CardMetrics, Rect, TargetId, TweenId, Vec2, measured_width, snap_px, translate_x,
};
pub use foundation::error::{ShowreelError, ShowreelResult};
pub use projects::loader::{
    FETCH_FAILED_MESSAGE, FetchOutcome, FetchTicket, LoadState, SERVER_FALLBACK_MESSAGE,
    run_fetch, user_message,
};
pub use projects::model::{ErrorBody, ProjectRecord, RECENT_PROJECTS_ENDPOINT, RecentProjectsBody};
pub use projects::source::{HttpProjectSource, ProjectSource, StaticProjectSource};
pub use render::strip::StripRenderer;
