use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA8 color.
///
/// Deserializes from `"#rgb"`, `"#rrggbb"`, `"#rrggbbaa"` or an `[r, g, b]` / `[r, g, b, a]`
/// byte array. Serializes as a hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    /// Pure white.
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    /// Light gray (`#e5e7eb`), the default background color.
    pub const GRAY_200: Self = Self::rgb(0xe5, 0xe7, 0xeb);
    /// Dark gray (`#374151`), outer stops of the unfilled track.
    pub const GRAY_700: Self = Self::rgb(0x37, 0x41, 0x51);
    /// Mid-dark gray (`#4b5563`), center stop of the unfilled track.
    pub const GRAY_600: Self = Self::rgb(0x4b, 0x55, 0x63);
    /// Caption gray (`#6b7280`).
    pub const GRAY_500: Self = Self::rgb(0x6b, 0x72, 0x80);
    /// Diagnostic-line gray (`#9ca3af`).
    pub const GRAY_400: Self = Self::rgb(0x9c, 0xa3, 0xaf);
    /// Near-black gray (`#1f2937`), the default label color.
    pub const GRAY_800: Self = Self::rgb(0x1f, 0x29, 0x37);

    /// Opaque color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from channels including alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a CSS-style hex color.
    pub fn parse_hex(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(format!("invalid hex color \"{s}\""));
        }

        fn hex_byte(pair: &str) -> Result<u8, String> {
            u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
        }

        match s.len() {
            3 => {
                // #rgb expands each nibble: #fa0 == #ffaa00
                let mut out = [0u8; 3];
                for (i, c) in s.chars().enumerate() {
                    let n = c
                        .to_digit(16)
                        .ok_or_else(|| format!("invalid hex digit '{c}'"))?
                        as u8;
                    out[i] = n * 17;
                }
                Ok(Self::rgb(out[0], out[1], out[2]))
            }
            6 => Ok(Self::rgb(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            8 => Ok(Self::rgba(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
                hex_byte(&s[6..8])?,
            )),
            _ => Err("hex color must be #RGB, #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
        }
    }

    /// `#rrggbb`, alpha omitted. SVG carries alpha separately via `*-opacity`.
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            self.to_hex_rgb()
        } else {
            format!("{}{:02x}", self.to_hex_rgb(), self.a)
        }
    }

    /// Alpha channel as `[0, 1]`.
    pub fn alpha(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "color array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
