use crate::{
    animation::tween::Tween,
    foundation::core::{TargetId, TweenId},
};

#[derive(Clone, Debug)]
struct Entry {
    id: TweenId,
    target: TargetId,
    tween: Tween,
}

/// Scheduler that owns live tweens and advances them on every tick.
///
/// Tweens are bound to a [`TargetId`] so that everything driving one target can be
/// killed in a single call before a replacement is started.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    next_id: u64,
    entries: Vec<Entry>,
}

impl Timeline {
    /// Empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start driving `target` with `tween`.
    pub fn add(&mut self, target: TargetId, tween: Tween) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, target, tween });
        id
    }

    pub fn get(&self, id: TweenId) -> Option<&Tween> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.tween)
    }

    pub fn get_mut(&mut self, id: TweenId) -> Option<&mut Tween> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| &mut e.tween)
    }

    /// Remove one tween. Returns `false` when the handle is already dead.
    pub fn kill(&mut self, id: TweenId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Remove every tween bound to `target`, returning how many were killed.
    pub fn kill_tweens_of(&mut self, target: TargetId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.target != target);
        before - self.entries.len()
    }

    /// Number of live tweens bound to `target`.
    pub fn tweens_of(&self, target: TargetId) -> usize {
        self.entries.iter().filter(|e| e.target == target).count()
    }

    /// Advance every tween by `dt` seconds; completed one-shot tweens are dropped.
    pub fn tick(&mut self, dt: f64) {
        for e in &mut self.entries {
            e.tween.advance(dt);
        }
        self.entries.retain(|e| !e.tween.is_completed());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
