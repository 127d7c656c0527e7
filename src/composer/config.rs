use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    core::{Canvas, Placement},
    error::{WardrobeError, WardrobeResult},
};

fn default_scale() -> f64 {
    0.5
}

/// Composer session settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComposerConfig {
    #[serde(default)]
    pub canvas: Canvas,
    /// Scale used when there is no reference figure to derive one from.
    #[serde(default = "default_scale")]
    pub default_scale: f64,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            default_scale: default_scale(),
        }
    }
}

impl ComposerConfig {
    pub fn validate(&self) -> WardrobeResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(WardrobeError::validation("canvas width/height must be > 0"));
        }
        if !self.default_scale.is_finite() || self.default_scale <= 0.0 {
            return Err(WardrobeError::validation(
                "default_scale must be finite and > 0",
            ));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> WardrobeResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> WardrobeResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Canvas-centre placement used when no reference figure is present.
    pub fn default_placement(&self) -> Placement {
        let c = self.canvas.center();
        Placement::new(c.x, c.y, self.default_scale)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composer/config.rs"]
mod tests;
