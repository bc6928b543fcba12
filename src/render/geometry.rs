use std::f64::consts::PI;

use crate::{
    foundation::core::{Point, Rect, Score},
    render::scene::{ArcPath, Dash},
};

/// Scores at which divider ticks are drawn.
pub const TICK_SCORES: [f64; 3] = [2.0, 3.0, 4.0];

/// Extra clearance around the stroke so the glow filter is never clipped.
pub const GLOW_CLEARANCE: f64 = 10.0;

/// How far a tick overhangs the stroke on each side.
pub const TICK_OVERHANG: f64 = 2.0;

/// Layout of one gauge: canvas size, circle and arc endpoints.
///
/// The padded canvas is `size + 2 * padding` wide and `size / 2 + padding + stroke_width` tall,
/// with `padding = stroke_width + GLOW_CLEARANCE`. The circle is centered at
/// `(width / 2, width / 2)`, so only its upper half lands on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ArcGeometry {
    pub size: f64,
    pub stroke_width: f64,
    pub padding: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub center: Point,
}

/// Endpoints of one divider tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TickMark {
    pub score: f64,
    pub inner: Point,
    pub outer: Point,
}

impl ArcGeometry {
    pub fn new(size: f64, stroke_width: f64) -> Self {
        let padding = stroke_width + GLOW_CLEARANCE;
        let width = size + padding * 2.0;
        let height = size / 2.0 + padding + stroke_width;
        let radius = (size - stroke_width) / 2.0;
        Self {
            size,
            stroke_width,
            padding,
            width,
            height,
            radius,
            center: Point::new(width / 2.0, width / 2.0),
        }
    }

    /// Canvas bounds.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Length of the semicircle, `π·r`.
    pub fn arc_length(&self) -> f64 {
        PI * self.radius
    }

    /// Leftmost arc point.
    pub fn start(&self) -> Point {
        Point::new(self.padding + self.stroke_width / 2.0, self.center.y)
    }

    /// Rightmost arc point.
    pub fn end(&self) -> Point {
        Point::new(
            self.width - self.padding - self.stroke_width / 2.0,
            self.center.y,
        )
    }

    /// Left-to-right semicircle over the top.
    pub fn arc(&self) -> ArcPath {
        ArcPath {
            from: self.start(),
            to: self.end(),
            radius: self.radius,
            sweep: true,
            large_arc: false,
        }
    }

    /// Visible stroke length for `fraction` of the sweep.
    pub fn filled_length(&self, fraction: f64) -> f64 {
        fraction.clamp(0.0, 1.0) * self.arc_length()
    }

    /// Dash pair revealing the leading `fraction` of the arc.
    pub fn dash(&self, fraction: f64) -> Dash {
        let total = self.arc_length();
        Dash {
            array: total,
            offset: total - self.filled_length(fraction),
        }
    }

    /// Point on a circle of radius `r` around the center at sweep `fraction`.
    ///
    /// Fraction 0 is the left end (angle π), fraction 1 the right end (angle 0). Canvas y grows
    /// downward, so the sine term is subtracted.
    pub fn point_at(&self, fraction: f64, r: f64) -> Point {
        let angle = PI - fraction * PI;
        Point::new(
            self.center.x + r * angle.cos(),
            self.center.y - r * angle.sin(),
        )
    }

    /// Divider tick at `score`, spanning the stroke plus [`TICK_OVERHANG`] on both sides.
    pub fn tick(&self, score: Score) -> TickMark {
        let fraction = score.progress_fraction();
        let half = self.stroke_width / 2.0 + TICK_OVERHANG;
        TickMark {
            score: score.get(),
            inner: self.point_at(fraction, self.radius - half),
            outer: self.point_at(fraction, self.radius + half),
        }
    }

    /// Ticks at [`TICK_SCORES`].
    pub fn ticks(&self) -> [TickMark; 3] {
        TICK_SCORES.map(|s| self.tick(Score::new(s)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/geometry.rs"]
mod tests;
