use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{BadgeError, BadgeResult};
use crate::foundation::math::mul_div255_u8;

pub use kurbo::{Affine, BezPath, Circle, Point, Rect, Vec2};

/// Straight-alpha RGBA8 color.
///
/// Serialized as a `#rrggbb` or `#rrggbbaa` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque red, the default badge color.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque white, the default label color.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Build a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Scale alpha by `alpha / 255`.
    pub fn with_alpha_mul(self, alpha: u8) -> Self {
        Self {
            a: mul_div255_u8(u16::from(self.a), u16::from(alpha)),
            ..self
        }
    }

    /// Convert to premultiplied channels.
    pub fn premultiplied(self) -> [u8; 4] {
        let a = u16::from(self.a);
        [
            mul_div255_u8(u16::from(self.r), a),
            mul_div255_u8(u16::from(self.g), a),
            mul_div255_u8(u16::from(self.b), a),
            self.a,
        ]
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl FromStr for Rgba8 {
    type Err = BadgeError;

    fn from_str(s: &str) -> BadgeResult<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| BadgeError::validation(format!("color '{s}' must start with '#'")))?;
        if !hex.is_ascii() || !matches!(hex.len(), 6 | 8) {
            return Err(BadgeError::validation(format!(
                "color '{s}' must be #rrggbb or #rrggbbaa"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| BadgeError::validation(format!("color '{s}': {e}")))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = BadgeError;

    fn try_from(s: String) -> BadgeResult<Self> {
        s.parse()
    }
}

impl From<Rgba8> for String {
    fn from(c: Rgba8) -> Self {
        c.to_string()
    }
}

/// Display density: pixels per density-independent unit.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Density(pub f64);

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Density {
    /// Convert density-independent units to pixels.
    pub fn px(self, dp: f64) -> f64 {
        dp * self.0
    }
}

/// Diameter of a [`crate::BadgeSize::Dot`] badge, in dp.
pub const DOT_DIAMETER_DP: f64 = 8.0;
/// Default bar length, in dp.
pub const DEFAULT_BAR_LENGTH_DP: f64 = 18.0;
/// Default bar thickness, in dp.
pub const DEFAULT_BAR_THICKNESS_DP: f64 = 2.0;
/// Default gap between bars, in dp.
pub const DEFAULT_BAR_GAP_SIZE_DP: f64 = 3.0;
/// Default arrow shaft length, in dp.
pub const DEFAULT_ARROW_SHAFT_LENGTH_DP: f64 = 16.0;
/// Default arrow head length, in dp.
pub const DEFAULT_ARROW_HEAD_LENGTH_DP: f64 = 8.0;

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
