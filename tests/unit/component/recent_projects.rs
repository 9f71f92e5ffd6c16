use super::*;
use crate::{
    carousel::sizing::CarouselSettings,
    foundation::core::CardMetrics,
    foundation::error::{ShowreelError, ShowreelResult},
    projects::source::StaticProjectSource,
};

struct FailingSource(u16, Option<&'static str>);

impl ProjectSource for FailingSource {
    async fn fetch_recent(&self) -> ShowreelResult<Vec<ProjectRecord>> {
        Err(ShowreelError::server(self.0, self.1.map(str::to_owned)))
    }
}

fn record(id: &str) -> ProjectRecord {
    ProjectRecord {
        id: id.to_owned(),
        title: format!("Project {id}"),
        description: format!("About {id}"),
        image_url: format!("https://cdn.example/{id}.png"),
        link: None,
    }
}

/// Cards 100px wide with no gap, viewport 250px.
fn small_config() -> ShowreelConfig {
    ShowreelConfig {
        api_base: None,
        viewport_width: 250.0,
        card: CardMetrics {
            width: 100.0,
            gap: 0.0,
        },
        carousel: CarouselSettings::default(),
    }
}

fn block_on<F: std::future::Future>(f: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(f)
}

#[test]
fn starts_loading() {
    let c = RecentProjects::new(small_config());
    assert!(c.is_loading());
    let v = c.view();
    assert_eq!(v.heading, "Recent Projects");
    assert_eq!(
        v.body,
        ViewBody::Loading {
            text: "Loading projects..."
        }
    );
}

#[test]
fn three_items_in_250px_viewport() {
    let mut c = RecentProjects::new(small_config());
    let src = StaticProjectSource::new(vec![record("a"), record("b"), record("c")]);
    block_on(c.load(&src));

    assert!(!c.is_loading());
    let geo = c.geometry().unwrap();
    assert_eq!(geo.total_width, 600.0);
    assert_eq!(geo.translation_distance, 300.0);
    assert_eq!(geo.duration_secs, 10.0);
    assert!(c.carousel().is_animating());

    let ViewBody::Carousel { cards, spans, .. } = c.view().body else {
        panic!("expected carousel body");
    };
    assert_eq!(cards.len(), 3);
    assert_eq!(spans.len(), 6);
    assert_eq!(spans.iter().filter(|s| s.clone).count(), 3);
    assert_eq!(spans[3].card, 0);
}

#[test]
fn empty_list_shows_empty_text_and_no_animation() {
    let mut c = RecentProjects::new(small_config());
    block_on(c.load(&StaticProjectSource::default()));

    assert_eq!(
        c.view().body,
        ViewBody::Empty {
            text: "No projects available."
        }
    );
    assert!(c.carousel().track().is_none());
    assert!(!c.carousel().is_animating());
}

#[test]
fn server_error_message_is_shown() {
    let mut c = RecentProjects::new(small_config());
    block_on(c.load(&FailingSource(500, Some("DB down"))));

    assert!(!c.is_loading());
    assert_eq!(
        c.view().body,
        ViewBody::Error {
            text: "DB down".to_owned()
        }
    );
}

#[test]
fn server_error_without_message_uses_fallback() {
    let mut c = RecentProjects::new(small_config());
    block_on(c.load(&FailingSource(502, None)));
    assert_eq!(c.state().error(), Some("Failed to fetch projects"));
}

#[test]
fn completion_after_dispose_is_discarded() {
    let mut c = RecentProjects::new(small_config());
    let ticket = c.activate();
    c.dispose();

    let src = StaticProjectSource::new(vec![record("a")]);
    let outcome = block_on(run_fetch(ticket, &src));
    assert!(!c.complete(outcome));
    assert!(c.is_loading());
    assert!(!c.carousel().is_animating());
}

#[test]
fn superseded_ticket_is_discarded() {
    let mut c = RecentProjects::new(small_config());
    let first = c.activate();
    let second = c.activate();

    let stale = block_on(run_fetch(first, &StaticProjectSource::new(vec![record("old")])));
    assert!(!c.complete(stale));
    assert!(c.is_loading());

    let fresh = block_on(run_fetch(second, &StaticProjectSource::new(vec![record("new")])));
    assert!(c.complete(fresh));
    assert_eq!(c.state().items()[0].id, "new");
}

#[test]
fn set_projects_reinitializes_with_one_tween() {
    let mut c = RecentProjects::new(small_config());
    c.set_projects(vec![record("a"), record("b"), record("c")]);
    c.tick(2.0);
    c.set_projects(vec![record("x"), record("y")]);

    let track = c.carousel().track().unwrap();
    assert_eq!(track.original_count(), 2);
    assert!(track.nodes().iter().all(|n| n.item < 2));
    assert_eq!(c.carousel().live_tween_count(), 1);
    assert_eq!(c.carousel().offset_x(), 0.0);
}

#[test]
fn hover_is_reflected_in_view() {
    let mut c = RecentProjects::new(small_config());
    c.set_projects(vec![record("a"), record("b"), record("c")]);
    c.tick(1.0);
    assert!(c.pointer_enter());
    c.tick(3.0);

    let ViewBody::Carousel {
        offset_px, paused, ..
    } = c.view().body
    else {
        panic!("expected carousel body");
    };
    assert!(paused);
    assert_eq!(offset_px, -30.0);
    assert!(c.pointer_leave());
}

#[test]
fn unmeasured_viewport_renders_cards_without_spans() {
    let mut cfg = small_config();
    cfg.viewport_width = 0.0;
    let mut c = RecentProjects::new(cfg);
    c.set_projects(vec![record("a")]);

    let ViewBody::Carousel { cards, spans, .. } = c.view().body else {
        panic!("expected carousel body");
    };
    assert_eq!(cards.len(), 1);
    assert!(spans.is_empty());
    assert!(!c.carousel().is_animating());

    c.set_viewport_width(250.0);
    assert!(c.carousel().is_animating());
}

#[test]
fn dispose_tears_down_marquee() {
    let mut c = RecentProjects::new(small_config());
    c.set_projects(vec![record("a"), record("b")]);
    c.dispose();
    assert!(c.is_disposed());
    assert!(!c.carousel().is_animating());
    assert_eq!(c.carousel().track().unwrap().clone_count(), 0);
}
