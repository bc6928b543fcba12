use std::{path::Path, time::Duration};

use anyhow::Context as _;

use crate::{
    animation::{animator::AnimationSettings, ease::Ease},
    foundation::{
        color::Color,
        core::Score,
        error::{ScoreArcError, ScoreArcResult},
    },
};

/// Drawing parameters for a single render call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DisplayConfig {
    /// Overall diameter in layout units.
    pub size: f64,
    /// Arc thickness.
    pub stroke_width: f64,
    /// Accepted for API parity; the track is painted with a fixed gradient.
    pub background_color: Color,
    /// Sweep-gradient color of the progress arc.
    pub base_color: Color,
    /// Color of the numeric label.
    pub text_color: Color,
    /// Draw the score, caption and diagnostic lines.
    pub show_score: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            stroke_width: default_stroke_width(),
            background_color: Color::GRAY_200,
            base_color: Color::WHITE,
            text_color: Color::GRAY_800,
            show_score: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// Full widget configuration: target score, drawing options and animation options.
///
/// Every field except `score` has a default, so `{"score": 3.5}` is a complete config.
pub struct WidgetConfig {
    /// Target score; clamped to `[1.0, 5.0]` on construction and deserialization.
    pub score: Score,
    /// Overall diameter.
    #[serde(default = "default_size")]
    pub size: f64,
    /// Arc thickness.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    /// Accepted, unused by the drawing (the track uses a fixed gradient).
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    /// Sweep-gradient color.
    #[serde(default = "default_base_color")]
    pub base_color: Color,
    /// Label color.
    #[serde(default = "default_text_color")]
    pub text_color: Color,
    /// Render the numeric label.
    #[serde(default = "default_true")]
    pub show_score: bool,
    /// Interpolate toward new targets.
    #[serde(default = "default_true")]
    pub animated: bool,
    /// Interpolation length in milliseconds.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Interpolation curve.
    #[serde(default)]
    pub ease: Ease,
}

fn default_size() -> f64 {
    200.0
}

fn default_stroke_width() -> f64 {
    12.0
}

fn default_background_color() -> Color {
    Color::GRAY_200
}

fn default_base_color() -> Color {
    Color::WHITE
}

fn default_text_color() -> Color {
    Color::GRAY_800
}

fn default_true() -> bool {
    true
}

fn default_duration_ms() -> u64 {
    1000
}

impl WidgetConfig {
    /// Defaults for everything but the score.
    pub fn new(score: impl Into<Score>) -> Self {
        let display = DisplayConfig::default();
        Self {
            score: score.into(),
            size: display.size,
            stroke_width: display.stroke_width,
            background_color: display.background_color,
            base_color: display.base_color,
            text_color: display.text_color,
            show_score: display.show_score,
            animated: true,
            duration_ms: default_duration_ms(),
            ease: Ease::default(),
        }
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> ScoreArcResult<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| ScoreArcError::serde(format!("widget config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> ScoreArcResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read widget config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Reject geometry the renderer cannot lay out.
    ///
    /// Rendering itself never checks these; this is applied at config-loading boundaries.
    pub fn validate(&self) -> ScoreArcResult<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ScoreArcError::validation("size must be finite and > 0"));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ScoreArcError::validation(
                "stroke_width must be finite and > 0",
            ));
        }
        if self.stroke_width >= self.size {
            return Err(ScoreArcError::validation(format!(
                "stroke_width ({}) must be smaller than size ({})",
                self.stroke_width, self.size
            )));
        }
        Ok(())
    }

    /// Drawing options.
    pub fn display(&self) -> DisplayConfig {
        DisplayConfig {
            size: self.size,
            stroke_width: self.stroke_width,
            background_color: self.background_color,
            base_color: self.base_color,
            text_color: self.text_color,
            show_score: self.show_score,
        }
    }

    /// Animation options.
    pub fn animation(&self) -> AnimationSettings {
        AnimationSettings {
            enabled: self.animated,
            duration: Duration::from_millis(self.duration_ms),
            ease: self.ease,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/widget.rs"]
mod tests;
