use crate::foundation::core::{Rect, TargetId};

/// One rendered card on the track.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrackNode {
    /// Index into the original item sequence this node renders.
    pub item: usize,
    /// Measured width in pixels (never negative).
    pub width: f64,
    /// `true` for nodes appended by the clone-sizing loop.
    pub clone: bool,
}

/// Ordered card nodes: the originals first, then any clone passes.
///
/// Only the carousel appends or removes clones; originals never change for the
/// lifetime of a track.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    target: TargetId,
    nodes: Vec<TrackNode>,
    originals: usize,
}

impl Track {
    /// Build a track of original nodes from measured widths.
    ///
    /// Non-finite or negative widths are measured as zero.
    pub fn new(target: TargetId, widths: impl IntoIterator<Item = f64>) -> Self {
        let nodes: Vec<TrackNode> = widths
            .into_iter()
            .enumerate()
            .map(|(item, w)| TrackNode {
                item,
                width: if w.is_finite() { w.max(0.0) } else { 0.0 },
                clone: false,
            })
            .collect();
        let originals = nodes.len();
        Self {
            target,
            nodes,
            originals,
        }
    }

    pub fn target(&self) -> TargetId {
        self.target
    }

    pub fn nodes(&self) -> &[TrackNode] {
        &self.nodes
    }

    pub fn originals(&self) -> &[TrackNode] {
        &self.nodes[..self.originals]
    }

    pub fn original_count(&self) -> usize {
        self.originals
    }

    pub fn clone_count(&self) -> usize {
        self.nodes.len() - self.originals
    }

    pub fn is_empty(&self) -> bool {
        self.originals == 0
    }

    /// Total rendered width of every node, clones included.
    pub fn scroll_width(&self) -> f64 {
        self.nodes.iter().map(|n| n.width).sum()
    }

    /// Width of the original sequence alone.
    pub fn original_width(&self) -> f64 {
        self.originals().iter().map(|n| n.width).sum()
    }

    /// Append one full copy of the original nodes, tagged as clones.
    pub fn append_clone_pass(&mut self) {
        self.nodes.extend_from_within(..self.originals);
        let start = self.nodes.len() - self.originals;
        for n in &mut self.nodes[start..] {
            n.clone = true;
        }
    }

    /// Drop every clone node, returning how many were removed.
    pub fn remove_clones(&mut self) -> usize {
        let removed = self.clone_count();
        self.nodes.truncate(self.originals);
        removed
    }

    /// Node boxes laid out left to right starting at `x_offset`.
    pub fn layout(&self, x_offset: f64, height: f64) -> Vec<(TrackNode, Rect)> {
        let mut x = x_offset;
        self.nodes
            .iter()
            .map(|n| {
                let r = Rect::new(x, 0.0, x + n.width, height);
                x += n.width;
                (*n, r)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/track.rs"]
mod tests;
