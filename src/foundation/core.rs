pub use kurbo::{Point, Rect, Vec2};

/// Lower bound of the score domain.
pub const MIN_SCORE: f64 = 1.0;
/// Upper bound of the score domain.
pub const MAX_SCORE: f64 = 5.0;

/// A score clamped to `[MIN_SCORE, MAX_SCORE]`.
///
/// Construction never fails: values outside the domain are clamped and NaN maps to the lower
/// bound. Every visual mapping in the crate goes through this type, so raw input never reaches the
/// geometry or opacity math.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    /// The lowest score (empty arc, fully opaque fill).
    pub const MIN: Self = Self(MIN_SCORE);
    /// The highest score (full arc, transparent fill).
    pub const MAX: Self = Self(MAX_SCORE);

    /// Clamp `raw` into the score domain.
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::MIN;
        }
        Self(raw.clamp(MIN_SCORE, MAX_SCORE))
    }

    /// The clamped value.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Normalized position in `[0, 1]`: `(score - 1) / 4`.
    pub fn progress_fraction(self) -> f64 {
        (self.0 - MIN_SCORE) / (MAX_SCORE - MIN_SCORE)
    }

    /// Fill opacity in `[0, 1]`; 1.0 at the lowest score, 0.0 at the highest.
    pub fn opacity(self) -> f64 {
        1.0 - self.progress_fraction()
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<f64> for Score {
    fn from(raw: f64) -> Self {
        Self::new(raw)
    }
}

impl From<Score> for f64 {
    fn from(s: Score) -> Self {
        s.0
    }
}

/// Per-instance key used to keep gradient and filter ids unique inside one document.
///
/// Keys are assigned monotonically by [`crate::FrameLoop`] or supplied by the caller.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct WidgetKey(pub u64);

impl WidgetKey {
    /// Definition id for `kind` scoped to this instance, e.g. `sweep-arc3`.
    pub fn def_id(self, kind: &str) -> String {
        format!("{kind}-arc{}", self.0)
    }
}

impl std::fmt::Display for WidgetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "arc{}", self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
