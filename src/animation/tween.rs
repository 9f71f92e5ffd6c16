use crate::foundation::error::{ShowreelError, ShowreelResult};

/// What happens when a tween reaches its end value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Repeat {
    /// Stop at the end value and complete.
    #[default]
    Once,
    /// Jump back to the start value and keep going.
    Infinite,
}

/// Playback state of a tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PlayState {
    /// Accumulating time on every tick.
    Playing,
    /// Frozen in place; ticks are ignored.
    Paused,
    /// A [`Repeat::Once`] tween that reached its end.
    Completed,
}

/// A constant-velocity scalar interpolation from `from` to `to` over `duration` seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: f64,
    repeat: Repeat,
    state: PlayState,
    elapsed: f64, // always in [0, duration]
    iterations: u64,
}

impl Tween {
    /// Create a playing tween. `duration` must be finite and > 0.
    pub fn new(from: f64, to: f64, duration: f64, repeat: Repeat) -> ShowreelResult<Self> {
        if !from.is_finite() || !to.is_finite() {
            return Err(ShowreelError::validation("tween endpoints must be finite"));
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(ShowreelError::validation(
                "tween duration must be finite and > 0",
            ));
        }
        Ok(Self {
            from,
            to,
            duration,
            repeat,
            state: PlayState::Playing,
            elapsed: 0.0,
            iterations: 0,
        })
    }

    /// Advance by `dt` seconds. No-op unless playing.
    pub fn advance(&mut self, dt: f64) {
        if self.state != PlayState::Playing || !dt.is_finite() || dt <= 0.0 {
            return;
        }

        let t = self.elapsed + dt;
        match self.repeat {
            Repeat::Once => {
                if t >= self.duration {
                    self.elapsed = self.duration;
                    self.iterations = 1;
                    self.state = PlayState::Completed;
                } else {
                    self.elapsed = t;
                }
            }
            Repeat::Infinite => {
                // Wrap eagerly so `elapsed` never grows without bound.
                let wraps = (t / self.duration).floor();
                self.iterations = self.iterations.saturating_add(wraps as u64);
                self.elapsed = t - wraps * self.duration;
                if self.elapsed >= self.duration {
                    self.elapsed = 0.0;
                }
            }
        }
    }

    /// Freeze at the current value. Returns `false` when already paused or completed.
    pub fn pause(&mut self) -> bool {
        if self.state != PlayState::Playing {
            return false;
        }
        self.state = PlayState::Paused;
        true
    }

    /// Resume from the frozen value. Returns `false` unless the tween was paused.
    pub fn play(&mut self) -> bool {
        if self.state != PlayState::Paused {
            return false;
        }
        self.state = PlayState::Playing;
        true
    }

    /// Normalized position within the current iteration, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Current interpolated value.
    pub fn value(&self) -> f64 {
        self.from + (self.to - self.from) * self.progress()
    }

    /// Distance travelled per second at constant velocity.
    pub fn velocity(&self) -> f64 {
        (self.to - self.from) / self.duration
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlayState::Paused
    }

    pub fn is_completed(&self) -> bool {
        self.state == PlayState::Completed
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Completed iterations (wraps for [`Repeat::Infinite`]).
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    pub fn endpoints(&self) -> (f64, f64) {
        (self.from, self.to)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
