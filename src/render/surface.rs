use crate::foundation::core::{Affine, BezPath, Point, Rgba8, Vec2};
use crate::text::shaper::ShapedLabel;

/// Line cap of a stroked path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Flat cap ending at the path end.
    #[default]
    Butt,
    /// Flat cap extended by half the width.
    Square,
    /// Semicircular cap.
    Round,
}

/// Line join of a stroked path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    /// Sharp corner.
    #[default]
    Miter,
    /// Rounded corner.
    Round,
    /// Cut-off corner.
    Bevel,
}

/// Stroke parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke width in local units.
    pub width: f64,
    /// End cap.
    pub cap: LineCap,
    /// Corner join.
    pub join: LineJoin,
}

impl StrokeStyle {
    /// Butt-capped, mitered stroke of `width`.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::default(),
            join: LineJoin::default(),
        }
    }
}

/// Color filter applied on top of a paint color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFilter {
    /// Source-in tint: replace RGB with the tint and multiply alpha by the tint's alpha.
    Tint(Rgba8),
}

impl ColorFilter {
    /// Filter `color`.
    pub fn apply(self, color: Rgba8) -> Rgba8 {
        match self {
            Self::Tint(t) => Rgba8::new(t.r, t.g, t.b, color.a).with_alpha_mul(t.a),
        }
    }
}

/// Drawable-wide paint modifiers, mirrored from the host's alpha and color filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintState {
    /// Global alpha, `255` is opaque.
    pub alpha: u8,
    /// Optional color filter.
    pub color_filter: Option<ColorFilter>,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            alpha: 255,
            color_filter: None,
        }
    }
}

impl PaintState {
    /// Resolve the color actually painted for `color`.
    pub fn resolve(self, color: Rgba8) -> Rgba8 {
        let c = match self.color_filter {
            Some(filter) => filter.apply(color),
            None => color,
        };
        c.with_alpha_mul(self.alpha)
    }
}

/// A 2D drawing target with a save/restore state stack.
///
/// Transforms concatenate onto the current transform (`current * affine`). Clips last until the
/// matching [`Surface::restore`].
pub trait Surface {
    /// Push the current transform and clip state.
    fn save(&mut self);

    /// Pop back to the most recently saved state. Unbalanced restores are ignored.
    fn restore(&mut self);

    /// Pre-concatenate `affine` onto the current transform.
    fn concat(&mut self, affine: Affine);

    /// Exclude the interior of `region` from subsequent drawing.
    fn clip_out(&mut self, region: &BezPath);

    /// Fill `path` with `color` (non-zero winding).
    fn fill_path(&mut self, path: &BezPath, color: Rgba8);

    /// Stroke `path` with `color`.
    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle, color: Rgba8);

    /// Draw a shaped label with its baseline origin at `origin`.
    fn fill_glyphs(&mut self, label: &ShapedLabel, origin: Point, color: Rgba8);

    /// Translate the current frame.
    fn translate(&mut self, offset: Vec2) {
        self.concat(Affine::translate(offset));
    }

    /// Rotate clockwise by `degrees` about `center`.
    fn rotate_about(&mut self, degrees: f64, center: Point) {
        self.concat(Affine::rotate_about(degrees.to_radians(), center));
    }

    /// Scale uniformly by `scale` about `center`.
    fn scale_about(&mut self, scale: f64, center: Point) {
        self.concat(
            Affine::translate(center.to_vec2())
                * Affine::scale(scale)
                * Affine::translate(-center.to_vec2()),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
