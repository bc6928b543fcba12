use crate::{
    config::widget::DisplayConfig,
    foundation::{
        color::Color,
        core::{Point, Score, Vec2, WidgetKey},
    },
    render::{
        geometry::ArcGeometry,
        paint::{fill_opacity, glow_active, glow_std_dev, sweep_stops, track_stops},
        scene::{
            Def, FontWeight, GlowFilter, LineCap, LineNode, LinearGradient, Node, NodeRole, Paint,
            PathNode, Scene, Stroke, TextNode,
        },
    },
};

/// Caption under the score.
pub const CAPTION: &str = "out of 5.0";

/// Font sizes of the three label lines.
pub const SCORE_FONT_SIZE: f64 = 30.0;
pub const CAPTION_FONT_SIZE: f64 = 14.0;
pub const DIAGNOSTIC_FONT_SIZE: f64 = 12.0;

const LINE_GAP: f64 = 4.0;
const TICK_WIDTH: f64 = 2.0;

/// Derived per-frame values that drive the drawing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ArcMetrics {
    /// Clamped score.
    pub score: Score,
    /// `(score - 1) / 4`.
    pub progress_fraction: f64,
    /// `1 - progress_fraction`.
    pub opacity: f64,
    /// Visible stroke length.
    pub filled_length: f64,
    /// Whether the blur is applied.
    pub glow: bool,
}

impl ArcMetrics {
    pub fn new(score: Score, geometry: &ArcGeometry) -> Self {
        let progress_fraction = score.progress_fraction();
        let opacity = fill_opacity(score);
        Self {
            score,
            progress_fraction,
            opacity,
            filled_length: geometry.filled_length(progress_fraction),
            glow: glow_active(opacity),
        }
    }
}

/// `3.5` style label: one decimal.
pub fn score_label(score: Score) -> String {
    format!("{:.1}", score.get())
}

/// `Progress: 62% | Glow: On` style diagnostic line.
pub fn diagnostic_label(metrics: &ArcMetrics) -> String {
    format!(
        "Progress: {:.0}% | Glow: {}",
        metrics.progress_fraction * 100.0,
        if metrics.glow { "On" } else { "Off" }
    )
}

/// Render one gauge for the displayed score.
///
/// Pure: the same inputs always produce the same scene. Out-of-range scores are clamped by
/// [`Score`]; `key` scopes the gradient and filter ids so several gauges can share a document.
#[tracing::instrument(level = "trace", skip(score, config), fields(score = score.get()))]
pub fn render_arc(score: Score, config: &DisplayConfig, key: WidgetKey) -> Scene {
    let geom = ArcGeometry::new(config.size, config.stroke_width);
    let metrics = ArcMetrics::new(score, &geom);

    let sweep_id = key.def_id("sweep");
    let track_id = key.def_id("bg");
    let glow_id = key.def_id("glow");

    let mut scene = Scene::new(geom.width, geom.height);
    scene.defs.push(Def::LinearGradient(LinearGradient {
        id: sweep_id.clone(),
        start: Point::new(0.0, 0.0),
        end: Point::new(1.0, 0.0),
        stops: sweep_stops(metrics.opacity, config.base_color).to_vec(),
    }));
    scene.defs.push(Def::LinearGradient(LinearGradient {
        id: track_id.clone(),
        start: Point::new(0.0, 0.0),
        end: Point::new(1.0, 0.0),
        stops: track_stops().to_vec(),
    }));
    scene.defs.push(Def::Glow(GlowFilter {
        id: glow_id.clone(),
        std_dev: glow_std_dev(metrics.opacity),
        region_origin: Vec2::new(-0.5, -0.5),
        region_size: Vec2::new(2.0, 2.0),
    }));

    scene.nodes.push(Node::Path(PathNode {
        role: NodeRole::Track,
        arc: geom.arc(),
        fill: Paint::None,
        stroke: Stroke {
            paint: Paint::Ref(track_id),
            width: config.stroke_width,
            cap: LineCap::Round,
            dash: None,
        },
        filter: None,
    }));
    scene.nodes.push(Node::Path(PathNode {
        role: NodeRole::Progress,
        arc: geom.arc(),
        fill: Paint::None,
        stroke: Stroke {
            paint: Paint::Ref(sweep_id),
            width: config.stroke_width + 2.0,
            cap: LineCap::Round,
            dash: Some(geom.dash(metrics.progress_fraction)),
        },
        filter: Some(glow_id),
    }));

    for tick in geom.ticks() {
        scene.nodes.push(Node::Line(LineNode {
            role: NodeRole::Tick,
            from: tick.inner,
            to: tick.outer,
            stroke: Stroke {
                paint: Paint::Solid(Color::BLACK),
                width: TICK_WIDTH,
                cap: LineCap::Round,
                dash: None,
            },
        }));
    }

    if config.show_score {
        push_labels(&mut scene, &geom, &metrics, config.text_color);
    }

    scene
}

// Lines stack upward from the bottom padding edge, diagnostic line lowest.
fn push_labels(scene: &mut Scene, geom: &ArcGeometry, metrics: &ArcMetrics, text_color: Color) {
    let x = geom.center.x;
    let diagnostic_y = geom.height - geom.padding;
    let caption_y = diagnostic_y - DIAGNOSTIC_FONT_SIZE - LINE_GAP;
    let score_y = caption_y - CAPTION_FONT_SIZE - LINE_GAP - 2.0;

    let lines = [
        (
            NodeRole::ScoreLabel,
            score_y,
            score_label(metrics.score),
            SCORE_FONT_SIZE,
            FontWeight::Bold,
            text_color,
        ),
        (
            NodeRole::Caption,
            caption_y,
            CAPTION.to_owned(),
            CAPTION_FONT_SIZE,
            FontWeight::Normal,
            Color::GRAY_500,
        ),
        (
            NodeRole::Diagnostic,
            diagnostic_y,
            diagnostic_label(metrics),
            DIAGNOSTIC_FONT_SIZE,
            FontWeight::Normal,
            Color::GRAY_400,
        ),
    ];
    for (role, y, content, font_size, weight, color) in lines {
        scene.nodes.push(Node::Text(TextNode {
            role,
            anchor: Point::new(x, y),
            content,
            font_size,
            weight,
            color,
        }));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/arc.rs"]
mod tests;
