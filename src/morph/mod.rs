//! The hamburger-to-arrow glyph the badge is layered over.

pub(crate) mod drawer_arrow;

use crate::badge::geometry::BarMetrics;
use crate::foundation::core::Rect;
use crate::render::surface::{ColorFilter, Surface};

/// Renderer of the underlying morphing glyph, driven by a scalar progress.
///
/// [`crate::BadgedDrawerArrow`] wraps an implementation of this trait and composes the badge on
/// top of it.
pub trait MorphRenderer {
    /// Set the morph position; `0` is the hamburger, `1` the arrow.
    fn set_progress(&mut self, progress: f64);

    /// Current morph position.
    fn progress(&self) -> f64;

    /// Current bar geometry, in pixels.
    fn metrics(&self) -> BarMetrics;

    /// Draw the glyph for `bounds`.
    fn draw(&mut self, surface: &mut dyn Surface, bounds: Rect);

    /// Mirror the glyph's spin vertically.
    fn set_vertical_mirror(&mut self, mirror: bool);

    /// Set the global alpha.
    fn set_alpha(&mut self, alpha: u8);

    /// Set or clear the color filter.
    fn set_color_filter(&mut self, filter: Option<ColorFilter>);
}
