use crate::{
    component::view::{Card, CardSpan, View, ViewBody},
    foundation::core::Rect,
};

/// Draws the marquee as a single line of text, one column per `viewport_width / columns` px.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StripRenderer {
    pub columns: usize,
}

impl Default for StripRenderer {
    fn default() -> Self {
        Self { columns: 80 }
    }
}

impl StripRenderer {
    pub fn new(columns: usize) -> Self {
        Self { columns }
    }

    /// Materialize the visible part of the track. Each card renders as `[title   ]`
    /// across the columns its box covers; anything outside the viewport is clipped.
    pub fn render_strip(&self, cards: &[Card], spans: &[CardSpan], viewport_width: f64) -> String {
        let mut buf = vec![' '; self.columns];
        if self.columns == 0 || !viewport_width.is_finite() || viewport_width <= 0.0 {
            return buf.into_iter().collect();
        }

        let px_per_col = viewport_width / self.columns as f64;
        let viewport = Rect::new(0.0, 0.0, viewport_width, f64::INFINITY);
        let cols = self.columns as i64;

        for span in spans {
            let visible = span.rect.intersect(viewport);
            if visible.width() <= 0.0 {
                continue;
            }
            let start = (span.rect.x0 / px_per_col).round() as i64;
            let end = (span.rect.x1 / px_per_col).round() as i64;
            if end <= start {
                continue;
            }
            let title = cards.get(span.card).map_or("", |c| c.title.as_str());
            let cell = card_cell(title, (end - start) as usize);
            for col in start.max(0)..end.min(cols) {
                buf[col as usize] = cell[(col - start) as usize];
            }
        }
        buf.into_iter().collect()
    }

    /// Heading line followed by the body.
    pub fn render_view(&self, view: &View) -> String {
        let body = match &view.body {
            ViewBody::Loading { text } | ViewBody::Empty { text } => (*text).to_owned(),
            ViewBody::Error { text } => format!("error: {text}"),
            ViewBody::Carousel {
                cards,
                spans,
                viewport_width,
                ..
            } => self.render_strip(cards, spans, *viewport_width),
        };
        format!("{}\n{body}", view.heading)
    }
}

fn card_cell(title: &str, width: usize) -> Vec<char> {
    let mut cell = vec![' '; width];
    if width == 0 {
        return cell;
    }
    cell[0] = '[';
    if width > 1 {
        cell[width - 1] = ']';
    }
    for (slot, ch) in cell
        .iter_mut()
        .skip(1)
        .take(width.saturating_sub(2))
        .zip(title.chars())
    {
        *slot = ch;
    }
    cell
}

#[cfg(test)]
#[path = "../../tests/unit/render/strip.rs"]
mod tests;
