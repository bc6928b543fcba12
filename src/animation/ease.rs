/// Easing curves mapping normalized animation progress onto interpolation weight.
///
/// The gauge uses [`Ease::OutCubic`] unless configured otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-out.
    OutQuad,
    /// Cubic ease-out: `1 - (1 - t)^3`.
    #[default]
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
}

impl Ease {
    /// Apply this easing function to progress `t`; `t` is clamped to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }

    /// Parse a CLI-style easing name (`linear`, `out-quad`, `out_cubic`, `inoutcubic`, ...).
    pub fn parse(name: &str) -> Option<Self> {
        let key: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "linear" => Some(Self::Linear),
            "outquad" | "easeoutquad" => Some(Self::OutQuad),
            "outcubic" | "easeoutcubic" | "easeout" => Some(Self::OutCubic),
            "inoutcubic" | "easeinoutcubic" => Some(Self::InOutCubic),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
