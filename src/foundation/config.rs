use std::path::Path;

use crate::{
    carousel::sizing::CarouselSettings,
    foundation::core::CardMetrics,
    foundation::error::{ShowreelError, ShowreelResult},
};

/// Runtime configuration for the showcase component.
///
/// Every field has a default, so a config file only needs to name what it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShowreelConfig {
    /// Base URL of the projects API (`<base>/get-recent-projects`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    /// Width of the carousel viewport in pixels.
    pub viewport_width: f64,
    /// Measured footprint of each card.
    pub card: CardMetrics,
    /// Loop sizing and speed.
    pub carousel: CarouselSettings,
}

impl Default for ShowreelConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            viewport_width: 1200.0,
            card: CardMetrics::default(),
            carousel: CarouselSettings::default(),
        }
    }
}

impl ShowreelConfig {
    /// Parse a JSON config document and validate it.
    pub fn from_json_str(src: &str) -> ShowreelResult<Self> {
        let cfg: Self = serde_json::from_str(src)
            .map_err(|e| ShowreelError::serde(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a JSON config file.
    pub fn load_json(path: &Path) -> ShowreelResult<Self> {
        let src = std::fs::read_to_string(path).map_err(|e| {
            ShowreelError::config(format!("read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&src)
    }

    /// Reject values the carousel cannot work with.
    pub fn validate(&self) -> ShowreelResult<()> {
        if !self.viewport_width.is_finite() || self.viewport_width < 0.0 {
            return Err(ShowreelError::config(
                "viewport_width must be finite and >= 0",
            ));
        }
        if let Some(base) = &self.api_base
            && base.trim().is_empty()
        {
            return Err(ShowreelError::config("api_base must be non-empty when set"));
        }
        self.card
            .validate()
            .map_err(|e| ShowreelError::config(e.to_string()))?;
        self.carousel.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
