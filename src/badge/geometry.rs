use crate::foundation::core::{Point, Rect, Vec2};

/// Read-only bar geometry of the morph glyph, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarMetrics {
    /// Length of one hamburger bar.
    pub bar_length: f64,
    /// Stroke thickness of one bar.
    pub bar_thickness: f64,
    /// Gap between adjacent bars.
    pub gap_size: f64,
}

impl BarMetrics {
    /// Half the height of the three-bar stack: `1.5 * thickness + gap`.
    pub fn half_stack_height(self) -> f64 {
        1.5 * self.bar_thickness + self.gap_size
    }
}

/// Badge sizing policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum BadgeSize {
    /// As tall as the bar stack: `3 * thickness + 2 * gap`.
    #[default]
    Standard,
    /// A small fixed-size dot with no label.
    Dot,
    /// An explicit diameter in pixels.
    Custom(f64),
}

impl BadgeSize {
    /// Resolve the badge diameter for the given bar geometry.
    ///
    /// `dot_diameter` is the density-scaled [`BadgeSize::Dot`] size. `Custom` values are passed
    /// through unvalidated.
    pub fn diameter(self, metrics: BarMetrics, dot_diameter: f64) -> f64 {
        match self {
            Self::Standard => 3.0 * metrics.bar_thickness + 2.0 * metrics.gap_size,
            Self::Dot => dot_diameter,
            Self::Custom(d) => d,
        }
    }
}

/// Icon corner the badge is pushed toward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Corner {
    /// Up and left.
    TopLeft,
    /// Up and right.
    #[default]
    TopRight,
    /// Down and right.
    BottomRight,
    /// Down and left.
    BottomLeft,
}

impl Corner {
    /// All corners, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Direction signs `(sx, sy)` in y-down screen space.
    pub fn signs(self) -> (f64, f64) {
        match self {
            Self::TopLeft => (-1.0, -1.0),
            Self::TopRight => (1.0, -1.0),
            Self::BottomRight => (1.0, 1.0),
            Self::BottomLeft => (-1.0, 1.0),
        }
    }
}

/// Badge center: a fixed standoff from the bar stack toward `corner`, nudged by `offset`.
pub fn badge_center(bounds: Rect, corner: Corner, metrics: BarMetrics, offset: Vec2) -> Point {
    let (sx, sy) = corner.signs();
    let c = bounds.center();
    Point::new(
        c.x + sx * (metrics.bar_length / 2.0) + offset.x,
        c.y + sy * metrics.half_stack_height() + offset.y,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/badge/geometry.rs"]
mod tests;
