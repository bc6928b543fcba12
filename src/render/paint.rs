//! Opacity, gradient and glow mapping for the progress arc.
//!
//! The fill opacity falls linearly from 1.0 at the lowest score to 0.0 at the highest. The sweep
//! gradient scales that base opacity per stop and floors each stop at a fixed minimum, which keeps
//! the arc legible at high scores and gives a left-to-right sweep instead of a flat fill.

use crate::{
    foundation::{color::Color, core::Score},
    render::scene::GradientStop,
};

/// Stop positions along the sweep.
pub const SWEEP_OFFSETS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];
/// Per-stop multiplier applied to the base opacity.
pub const SWEEP_MULTIPLIERS: [f64; 5] = [1.2, 1.1, 1.0, 0.9, 0.8];
/// Per-stop minimum opacity. Tuned by eye; not derived from the multipliers.
pub const SWEEP_FLOORS: [f64; 5] = [0.3, 0.5, 0.7, 0.6, 0.4];

/// Glow switches on strictly below this opacity.
pub const GLOW_OPACITY_THRESHOLD: f64 = 0.5;
/// Blur standard deviation while the glow is on.
pub const GLOW_STD_DEV: f64 = 3.0;

/// Fill opacity for a score.
pub fn fill_opacity(score: Score) -> f64 {
    score.opacity()
}

/// Sweep-gradient stops for `opacity` in `color`.
///
/// Stop opacity is `max(floor, opacity * multiplier)`, clamped to `[0, 1]`.
pub fn sweep_stops(opacity: f64, color: Color) -> [GradientStop; 5] {
    std::array::from_fn(|i| GradientStop {
        offset: SWEEP_OFFSETS[i],
        color,
        opacity: (opacity * SWEEP_MULTIPLIERS[i])
            .max(SWEEP_FLOORS[i])
            .clamp(0.0, 1.0),
    })
}

/// Fixed stops of the unfilled track: darker at the ends, lighter in the middle.
pub fn track_stops() -> [GradientStop; 3] {
    [
        GradientStop {
            offset: 0.0,
            color: Color::GRAY_700,
            opacity: 0.6,
        },
        GradientStop {
            offset: 0.5,
            color: Color::GRAY_600,
            opacity: 0.8,
        },
        GradientStop {
            offset: 1.0,
            color: Color::GRAY_700,
            opacity: 0.6,
        },
    ]
}

/// Whether the glow is on for a given fill opacity.
pub fn glow_active(opacity: f64) -> bool {
    opacity < GLOW_OPACITY_THRESHOLD
}

/// Blur standard deviation for a given fill opacity: binary, off or [`GLOW_STD_DEV`].
pub fn glow_std_dev(opacity: f64) -> f64 {
    if glow_active(opacity) {
        GLOW_STD_DEV
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/paint.rs"]
mod tests;
