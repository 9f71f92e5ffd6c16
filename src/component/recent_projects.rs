use crate::{
    carousel::{marquee::Carousel, sizing::LoopGeometry},
    component::view::{Card, CardSpan, EMPTY_TEXT, HEADING, LOADING_TEXT, View, ViewBody},
    foundation::config::ShowreelConfig,
    foundation::core::measured_width,
    projects::{
        loader::{FetchOutcome, FetchTicket, LoadState, run_fetch},
        model::ProjectRecord,
        source::ProjectSource,
    },
};

/// Card height used for span layout; only the horizontal axis matters.
const SPAN_HEIGHT: f64 = 1.0;

/// The "recent projects" showcase: loader state plus the marquee over its items.
///
/// Lifecycle: [`activate`](Self::activate) hands out a [`FetchTicket`], the fetch
/// runs elsewhere via [`run_fetch`], and [`complete`](Self::complete) applies the
/// outcome. Completions for a disposed component, or from a superseded activation,
/// are dropped.
#[derive(Debug)]
pub struct RecentProjects {
    config: ShowreelConfig,
    state: LoadState,
    carousel: Carousel,
    generation: u64,
    disposed: bool,
}

impl RecentProjects {
    pub fn new(config: ShowreelConfig) -> Self {
        let carousel = Carousel::new(config.carousel);
        Self {
            config,
            state: LoadState::Loading,
            carousel,
            generation: 0,
            disposed: false,
        }
    }

    /// Enter `Loading` and issue a ticket for the one fetch this activation makes.
    pub fn activate(&mut self) -> FetchTicket {
        self.generation += 1;
        self.carousel.teardown();
        self.state = LoadState::Loading;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Apply a finished fetch. Returns `false` when the outcome was discarded.
    pub fn complete(&mut self, outcome: FetchOutcome) -> bool {
        if self.disposed {
            tracing::debug!("component disposed; dropping fetch result");
            return false;
        }
        if outcome.ticket.generation != self.generation || !self.state.is_loading() {
            tracing::debug!(
                ticket = outcome.ticket.generation,
                current = self.generation,
                "stale fetch result dropped"
            );
            return false;
        }

        self.state = LoadState::settle(outcome.result);
        self.rebuild_carousel();
        true
    }

    /// Activate, fetch from `source`, and apply the result.
    pub async fn load<S: ProjectSource>(&mut self, source: &S) -> &LoadState {
        let ticket = self.activate();
        let outcome = run_fetch(ticket, source).await;
        self.complete(outcome);
        &self.state
    }

    /// Replace the item sequence directly and rebuild the marquee.
    pub fn set_projects(&mut self, projects: Vec<ProjectRecord>) {
        if self.disposed {
            return;
        }
        self.generation += 1;
        self.state = LoadState::Ready(projects);
        self.rebuild_carousel();
    }

    /// Viewport resized; the loop is re-planned for the new width.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.config.viewport_width = width;
        if !self.disposed {
            self.rebuild_carousel();
        }
    }

    pub fn pointer_enter(&mut self) -> bool {
        self.carousel.pointer_enter()
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.carousel.pointer_leave()
    }

    pub fn tick(&mut self, dt: f64) {
        self.carousel.tick(dt);
    }

    /// Tear down the marquee and ignore any fetch still in flight.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.carousel.teardown();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn config(&self) -> &ShowreelConfig {
        &self.config
    }

    pub fn geometry(&self) -> Option<&LoopGeometry> {
        self.carousel.geometry()
    }

    /// Render the current state.
    pub fn view(&self) -> View {
        let body = match &self.state {
            LoadState::Loading => ViewBody::Loading { text: LOADING_TEXT },
            LoadState::Failed(msg) => ViewBody::Error { text: msg.clone() },
            LoadState::Ready(items) if items.is_empty() => ViewBody::Empty { text: EMPTY_TEXT },
            LoadState::Ready(items) => self.carousel_body(items),
        };
        View {
            heading: HEADING,
            body,
        }
    }

    fn carousel_body(&self, items: &[ProjectRecord]) -> ViewBody {
        let offset_px = self.carousel.offset_x();
        let spans = self
            .carousel
            .track()
            .map(|t| {
                t.layout(offset_px, SPAN_HEIGHT)
                    .into_iter()
                    .map(|(node, rect)| CardSpan {
                        card: node.item,
                        clone: node.clone,
                        rect,
                    })
                    .collect()
            })
            .unwrap_or_default();

        ViewBody::Carousel {
            cards: items.iter().map(Card::from_record).collect(),
            spans,
            viewport_width: self.config.viewport_width,
            offset_px,
            paused: self.carousel.is_paused(),
        }
    }

    fn rebuild_carousel(&mut self) {
        let count = self.state.items().len();
        if count == 0 {
            self.carousel.teardown();
            return;
        }
        let widths = vec![self.config.card.extent(); count];
        self.carousel
            .init(&widths, measured_width(Some(self.config.viewport_width)));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/component/recent_projects.rs"]
mod tests;
