//! score-arc renders a semi-circular progress gauge for scores between 1.0 and 5.0.
//!
//! The gauge is a half-ring whose filled portion grows with the score while its opacity fades,
//! with a glow that switches on once the fill becomes faint. A displayed score can animate toward
//! a new target over a fixed duration.
//!
//! # Pipeline overview
//!
//! 1. **Animate**: [`ScoreAnimator`] turns a target and a clock reading into a displayed score.
//! 2. **Build**: [`render_arc`] maps a displayed score and a [`DisplayConfig`] to a [`Scene`].
//! 3. **Output**: [`to_svg`] writes SVG text, [`rasterize`] produces premultiplied
//!    [`FrameRGBA`] pixels, and a [`FrameSink`] receives recorded animation frames.
//!
//! [`FrameLoop`] stands in for a UI host: it owns mounted widgets and delivers one frame
//! callback per widget per frame while that widget still has a frame requested.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total rendering**: out-of-range scores are clamped, never rejected.
//! - **Deterministic**: definition ids come from monotonic [`WidgetKey`]s and time from an
//!   explicit clock.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod demo;
mod encode;
mod foundation;
mod render;
mod widget;

pub use animation::animator::{AnimState, AnimationSettings, ScoreAnimator, Tick};
pub use animation::ease::Ease;
pub use animation::frame_loop::{FrameLoop, FrameReport};
pub use config::widget::{DisplayConfig, WidgetConfig};
pub use demo::gallery::{
    GalleryTile, INITIAL_SCORE, PRESET_SCORES, SLIDER_STEP, TITLE_FONT_SIZE, Variant,
    compose_gallery, main_display_config, slider_value, variants,
};
pub use encode::sink::{
    FileSequenceSink, FrameSink, InMemorySink, SequenceFormat, SinkConfig, record_animation,
};
pub use foundation::color::Color;
pub use foundation::core::{MAX_SCORE, MIN_SCORE, Point, Rect, Score, Vec2, WidgetKey};
pub use foundation::error::{ScoreArcError, ScoreArcResult};
pub use render::arc::{
    ArcMetrics, CAPTION, CAPTION_FONT_SIZE, DIAGNOSTIC_FONT_SIZE, SCORE_FONT_SIZE,
    diagnostic_label, render_arc, score_label,
};
pub use render::geometry::{ArcGeometry, GLOW_CLEARANCE, TICK_OVERHANG, TICK_SCORES, TickMark};
pub use render::paint::{
    GLOW_OPACITY_THRESHOLD, GLOW_STD_DEV, SWEEP_FLOORS, SWEEP_MULTIPLIERS, SWEEP_OFFSETS,
    fill_opacity, glow_active, glow_std_dev, sweep_stops, track_stops,
};
pub use render::raster::{FrameRGBA, RasterOptions, ensure_parent_dir, rasterize};
pub use render::scene::{
    ArcPath, Dash, Def, FontWeight, GlowFilter, GradientStop, GroupNode, LineCap, LineNode,
    LinearGradient, Node, NodeRole, Paint, PathNode, Scene, Stroke, TextNode,
};
pub use render::svg::to_svg;
pub use widget::instance::ScoreArcWidget;
