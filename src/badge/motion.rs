use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::foundation::error::{BadgeError, BadgeResult};
use crate::foundation::math::lerp;

/// Declarative animation target for the badge, interpolated by the icon's progress.
///
/// Each component is optional; an unset component leaves its property at rest (scale `1`,
/// rotation `0`). `a + b` is a per-component override merge where `b` wins wherever it is set.
///
/// Serialized as its display form, e.g. `"Grow+FullSpinCW"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Motion {
    end_scale: Option<f64>,
    end_rotation: Option<f64>,
}

impl Motion {
    /// No animation.
    pub const NONE: Self = Self::new(None, None);
    /// Grow to 1.5x.
    pub const GROW: Self = Self::scale(1.5);
    /// Shrink to nothing.
    pub const SHRINK: Self = Self::scale(0.0);
    /// One clockwise turn.
    pub const FULL_SPIN_CW: Self = Self::spin(360.0);
    /// One counter-clockwise turn.
    pub const FULL_SPIN_CCW: Self = Self::spin(-360.0);
    /// Half a clockwise turn.
    pub const HALF_SPIN_CW: Self = Self::spin(180.0);
    /// Half a counter-clockwise turn.
    pub const HALF_SPIN_CCW: Self = Self::spin(-180.0);

    /// Build a motion from optional end values.
    pub const fn new(end_scale: Option<f64>, end_rotation: Option<f64>) -> Self {
        Self {
            end_scale,
            end_rotation,
        }
    }

    /// Scale-only motion ending at `end`.
    pub const fn scale(end: f64) -> Self {
        Self::new(Some(end), None)
    }

    /// Rotation-only motion ending at `degrees`.
    pub const fn spin(degrees: f64) -> Self {
        Self::new(None, Some(degrees))
    }

    /// Scale reached at progress `1`, if animated.
    pub fn end_scale(self) -> Option<f64> {
        self.end_scale
    }

    /// Rotation in degrees reached at progress `1`, if animated.
    pub fn end_rotation(self) -> Option<f64> {
        self.end_rotation
    }

    /// Field-wise override merge: `other`'s components win where set.
    pub fn compose(self, other: Self) -> Self {
        Self {
            end_scale: other.end_scale.or(self.end_scale),
            end_rotation: other.end_rotation.or(self.end_rotation),
        }
    }

    /// Sample scale and rotation at `progress`.
    ///
    /// Progress outside `[0, 1]` extrapolates linearly. When `mirrored`, rotation runs the other
    /// way.
    pub fn interpolate(self, progress: f64, mirrored: bool) -> MotionFrame {
        let scale = match self.end_scale {
            Some(end) => lerp(1.0, end, progress),
            None => 1.0,
        };
        let rotation = match self.end_rotation {
            Some(end) => lerp(0.0, end, progress) * if mirrored { -1.0 } else { 1.0 },
            None => 0.0,
        };
        MotionFrame { scale, rotation }
    }
}

impl Add for Motion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.compose(rhs)
    }
}

/// Sampled badge transform for one progress value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionFrame {
    /// Uniform scale about the badge center.
    pub scale: f64,
    /// Rotation in degrees about the badge center, clockwise.
    pub rotation: f64,
}

impl MotionFrame {
    /// The at-rest frame: scale `1`, rotation `0`.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation: 0.0,
    };
}

impl Default for MotionFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

const SCALE_NAMES: [(f64, &str); 2] = [(1.5, "Grow"), (0.0, "Shrink")];
const SPIN_NAMES: [(f64, &str); 4] = [
    (360.0, "FullSpinCW"),
    (-360.0, "FullSpinCCW"),
    (180.0, "HalfSpinCW"),
    (-180.0, "HalfSpinCCW"),
];

fn fmt_component(
    f: &mut fmt::Formatter<'_>,
    value: f64,
    names: &[(f64, &str)],
    fallback: &str,
) -> fmt::Result {
    match names.iter().find(|(v, _)| *v == value) {
        Some((_, name)) => f.write_str(name),
        None => write!(f, "{fallback}({value})"),
    }
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.end_scale, self.end_rotation) {
            (None, None) => f.write_str("None"),
            (Some(s), None) => fmt_component(f, s, &SCALE_NAMES, "Scale"),
            (None, Some(r)) => fmt_component(f, r, &SPIN_NAMES, "Spin"),
            (Some(s), Some(r)) => {
                fmt_component(f, s, &SCALE_NAMES, "Scale")?;
                f.write_str("+")?;
                fmt_component(f, r, &SPIN_NAMES, "Spin")
            }
        }
    }
}

fn parse_term(term: &str) -> BadgeResult<Motion> {
    let term = term.trim();
    if term == "None" {
        return Ok(Motion::NONE);
    }
    if let Some((value, _)) = SCALE_NAMES.iter().find(|(_, n)| *n == term) {
        return Ok(Motion::scale(*value));
    }
    if let Some((value, _)) = SPIN_NAMES.iter().find(|(_, n)| *n == term) {
        return Ok(Motion::spin(*value));
    }

    let parse_arg = |prefix: &str| -> Option<BadgeResult<f64>> {
        let inner = term.strip_prefix(prefix)?.strip_prefix('(')?.strip_suffix(')')?;
        Some(
            inner
                .trim()
                .parse::<f64>()
                .map_err(|e| BadgeError::validation(format!("motion term '{term}': {e}"))),
        )
    };
    if let Some(v) = parse_arg("Scale") {
        return v.map(Motion::scale);
    }
    if let Some(v) = parse_arg("Spin") {
        return v.map(Motion::spin);
    }
    Err(BadgeError::validation(format!(
        "unknown motion term '{term}'"
    )))
}

impl FromStr for Motion {
    type Err = BadgeError;

    /// Parse `+`-joined terms, composing left to right.
    fn from_str(s: &str) -> BadgeResult<Self> {
        if s.trim().is_empty() {
            return Err(BadgeError::validation("motion must not be empty"));
        }
        s.split('+')
            .try_fold(Self::NONE, |acc, term| Ok(acc + parse_term(term)?))
    }
}

impl TryFrom<String> for Motion {
    type Error = BadgeError;

    fn try_from(s: String) -> BadgeResult<Self> {
        s.parse()
    }
}

impl From<Motion> for String {
    fn from(m: Motion) -> Self {
        m.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/badge/motion.rs"]
mod tests;
