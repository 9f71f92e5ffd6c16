use crate::foundation::error::{ShowreelError, ShowreelResult};

pub use kurbo::{Affine, Rect, Vec2};

/// Identifies an animatable target (a track) on a [`crate::Timeline`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TargetId(pub u64);

/// Handle to a live tween owned by a [`crate::Timeline`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TweenId(pub u64);

/// Measured horizontal footprint of one rendered card, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardMetrics {
    /// Card box width.
    pub width: f64,
    /// Trailing gap before the next card.
    pub gap: f64,
}

impl Default for CardMetrics {
    fn default() -> Self {
        Self {
            width: 280.0,
            gap: 20.0,
        }
    }
}

impl CardMetrics {
    /// Construct metrics, rejecting negative or non-finite values.
    pub fn new(width: f64, gap: f64) -> ShowreelResult<Self> {
        let m = Self { width, gap };
        m.validate()?;
        Ok(m)
    }

    /// Check that both dimensions are finite and non-negative.
    pub fn validate(&self) -> ShowreelResult<()> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(ShowreelError::validation(
                "card width must be finite and >= 0",
            ));
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(ShowreelError::validation("card gap must be finite and >= 0"));
        }
        Ok(())
    }

    /// Width occupied on the track by one card (box plus gap).
    pub fn extent(self) -> f64 {
        self.width + self.gap
    }
}

/// Returns the viewport width when it is usable for layout.
///
/// `None`, non-finite, and non-positive widths all mean "not measurable yet".
pub fn measured_width(width: Option<f64>) -> Option<f64> {
    width.filter(|w| w.is_finite() && *w > 0.0)
}

/// Round a horizontal offset to a whole pixel, normalizing `-0.0` to `0.0`.
pub fn snap_px(x: f64) -> f64 {
    let r = x.round();
    if r == 0.0 { 0.0 } else { r }
}

/// Horizontal translation as an affine transform.
pub fn translate_x(x: f64) -> Affine {
    Affine::translate(Vec2::new(x, 0.0))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
