use crate::{foundation::core::Rect, projects::model::ProjectRecord};

pub const HEADING: &str = "Recent Projects";
pub const LOADING_TEXT: &str = "Loading projects...";
pub const EMPTY_TEXT: &str = "No projects available.";
pub const VIEW_PROJECT_LABEL: &str = "View Project";

/// Opens a URL in a new browsing context (tab, window, external browser).
pub trait LinkOpener {
    fn open_new_context(&mut self, url: &str);
}

/// One project card as rendered.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Card {
    pub id: String,
    pub image_url: String,
    /// Alt text for the image; the project title.
    pub image_alt: String,
    pub title: String,
    pub description: String,
    pub action_label: &'static str,
    pub link: Option<String>,
}

impl Card {
    pub fn from_record(p: &ProjectRecord) -> Self {
        Self {
            id: p.id.clone(),
            image_url: p.image_url.clone(),
            image_alt: p.title.clone(),
            title: p.title.clone(),
            description: p.description.clone(),
            action_label: VIEW_PROJECT_LABEL,
            link: p.link.clone(),
        }
    }

    /// "View Project" pressed. Without a link this does nothing and returns `false`.
    pub fn activate(&self, opener: &mut dyn LinkOpener) -> bool {
        match &self.link {
            Some(url) => {
                opener.open_new_context(url);
                true
            }
            None => false,
        }
    }
}

/// Where one track node lands on screen at the current offset.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CardSpan {
    /// Index into the carousel body's `cards`.
    pub card: usize,
    pub clone: bool,
    pub rect: Rect,
}

/// Body under the heading.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewBody {
    Loading { text: &'static str },
    Error { text: String },
    Empty { text: &'static str },
    Carousel {
        cards: Vec<Card>,
        /// Every track node, originals then clones, already shifted by `offset_px`.
        spans: Vec<CardSpan>,
        viewport_width: f64,
        offset_px: f64,
        paused: bool,
    },
}

/// Full render output of the showcase.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct View {
    pub heading: &'static str,
    pub body: ViewBody,
}

#[cfg(test)]
#[path = "../../tests/unit/component/view.rs"]
mod tests;
