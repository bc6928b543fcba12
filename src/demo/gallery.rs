//! The demo page as data.
//!
//! A live host wires these into buttons and a slider; the CLI `demo` command renders them
//! straight to files.

use std::collections::HashSet;

use crate::{
    config::widget::WidgetConfig,
    foundation::{
        color::Color,
        core::{MAX_SCORE, MIN_SCORE, Point, Score, Vec2},
        error::{ScoreArcError, ScoreArcResult},
    },
    render::scene::{FontWeight, GroupNode, Node, NodeRole, Scene, TextNode},
};

/// Scores offered as one-click presets.
pub const PRESET_SCORES: [f64; 7] = [1.0, 1.8, 2.5, 3.2, 4.1, 4.7, 5.0];

/// Score shown when the demo first loads.
pub const INITIAL_SCORE: f64 = 3.5;

/// Slider step.
pub const SLIDER_STEP: f64 = 0.1;

/// Font size of tile titles.
pub const TITLE_FONT_SIZE: f64 = 16.0;

// Vertical room reserved above a titled tile.
const TITLE_BAND: f64 = TITLE_FONT_SIZE + 8.0;

/// The large animated display at the top of the demo.
pub fn main_display_config(score: impl Into<Score>) -> WidgetConfig {
    WidgetConfig {
        size: 300.0,
        stroke_width: 16.0,
        animated: true,
        duration_ms: 1200,
        ..WidgetConfig::new(score)
    }
}

/// One of the side-by-side size variants.
#[derive(Clone, Debug, PartialEq)]
pub struct Variant {
    /// Heading shown above the widget.
    pub title: &'static str,
    /// Widget options.
    pub config: WidgetConfig,
}

/// Small, medium and large widgets at fixed scores.
pub fn variants() -> [Variant; 3] {
    let variant = |title, size, stroke_width, score: f64| Variant {
        title,
        config: WidgetConfig {
            size,
            stroke_width,
            ..WidgetConfig::new(score)
        },
    };
    [
        variant("Small (150px)", 150.0, 10.0, 2.1),
        variant("Medium (200px)", 200.0, 12.0, 3.8),
        variant("Large (250px)", 250.0, 14.0, 4.9),
    ]
}

/// Quantize a raw slider position: clamp to the score range and snap to [`SLIDER_STEP`].
///
/// Non-finite input lands on the nearest bound, NaN on the lower one.
pub fn slider_value(raw: f64) -> Score {
    if raw.is_nan() {
        return Score::MIN;
    }
    let clamped = raw.clamp(MIN_SCORE, MAX_SCORE);
    let steps = ((clamped - MIN_SCORE) / SLIDER_STEP).round();
    // Snap to the nearest exact tenth.
    let snapped = ((MIN_SCORE + steps * SLIDER_STEP) * 10.0).round() / 10.0;
    Score::new(snapped)
}

/// A scene plus an optional heading, one cell of a gallery.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryTile {
    /// Heading drawn centered above the scene.
    pub title: Option<String>,
    /// Tile content.
    pub scene: Scene,
}

impl GalleryTile {
    /// An untitled tile.
    pub fn new(scene: Scene) -> Self {
        Self { title: None, scene }
    }

    /// A tile with a heading.
    pub fn titled(title: impl Into<String>, scene: Scene) -> Self {
        Self {
            title: Some(title.into()),
            scene,
        }
    }
}

/// Lay tiles out in a grid with `columns` cells per row and `gap` units around every cell.
///
/// All cells share the size of the largest tile; each tile is centered horizontally in its
/// cell and top-aligned below its title. Definitions from every tile are merged into the
/// result, so tiles must have been rendered with distinct widget keys.
#[tracing::instrument(level = "debug", skip(tiles), fields(tiles = tiles.len()))]
pub fn compose_gallery(
    tiles: &[GalleryTile],
    columns: usize,
    gap: f64,
    title_color: Color,
) -> ScoreArcResult<Scene> {
    if columns == 0 {
        return Err(ScoreArcError::validation("gallery columns must be > 0"));
    }
    if !gap.is_finite() || gap < 0.0 {
        return Err(ScoreArcError::validation("gallery gap must be finite and >= 0"));
    }
    if tiles.is_empty() {
        return Ok(Scene::new(0.0, 0.0));
    }

    let band = if tiles.iter().any(|t| t.title.is_some()) {
        TITLE_BAND
    } else {
        0.0
    };
    let cell_w = tiles.iter().map(|t| t.scene.width).fold(0.0, f64::max);
    let cell_h = band + tiles.iter().map(|t| t.scene.height).fold(0.0, f64::max);
    let cols = columns.min(tiles.len());
    let rows = tiles.len().div_ceil(columns);

    let mut out = Scene::new(
        gap + cols as f64 * (cell_w + gap),
        gap + rows as f64 * (cell_h + gap),
    );
    let mut seen = HashSet::new();

    for (i, tile) in tiles.iter().enumerate() {
        let cell = Point::new(
            gap + (i % columns) as f64 * (cell_w + gap),
            gap + (i / columns) as f64 * (cell_h + gap),
        );

        for def in &tile.scene.defs {
            if !seen.insert(def.id().to_owned()) {
                return Err(ScoreArcError::validation(format!(
                    "gallery tile {i} repeats definition id '{}'",
                    def.id()
                )));
            }
            out.defs.push(def.clone());
        }

        if let Some(title) = &tile.title {
            out.nodes.push(Node::Text(TextNode {
                role: NodeRole::Title,
                anchor: Point::new(cell.x + cell_w / 2.0, cell.y + TITLE_FONT_SIZE),
                content: title.clone(),
                font_size: TITLE_FONT_SIZE,
                weight: FontWeight::Bold,
                color: title_color,
            }));
        }

        out.nodes.push(Node::Group(GroupNode {
            offset: Vec2::new(cell.x + (cell_w - tile.scene.width) / 2.0, cell.y + band),
            children: tile.scene.nodes.clone(),
        }));
    }

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/demo/gallery.rs"]
mod tests;
