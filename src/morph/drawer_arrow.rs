use std::f64::consts::FRAC_PI_4;

use crate::badge::geometry::BarMetrics;
use crate::foundation::core::{
    BezPath, DEFAULT_ARROW_HEAD_LENGTH_DP, DEFAULT_ARROW_SHAFT_LENGTH_DP,
    DEFAULT_BAR_GAP_SIZE_DP, DEFAULT_BAR_LENGTH_DP, DEFAULT_BAR_THICKNESS_DP, Density, Point,
    Rect, Rgba8, Vec2,
};
use crate::foundation::math::lerp;
use crate::morph::MorphRenderer;
use crate::render::surface::{ColorFilter, LineCap, LineJoin, PaintState, StrokeStyle, Surface};

const ARROW_HEAD_ANGLE: f64 = FRAC_PI_4;

/// Which way the finished arrow points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ArrowDirection {
    /// Always left.
    Left,
    /// Always right.
    Right,
    /// Toward the start edge of the layout direction.
    #[default]
    Start,
    /// Toward the end edge of the layout direction.
    End,
}

/// Horizontal layout direction of the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LayoutDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// Reference hamburger-to-arrow morph.
///
/// Three stroked bars fold into an arrow as progress goes from `0` to `1`, optionally spinning
/// half a turn on the way. Like the platform glyph it mirrors, it positions itself vertically
/// from the bounds height alone and ignores `bounds.y0`; callers with offset bounds translate
/// the surface by `bounds.y0` first.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawerArrow {
    color: Rgba8,
    bar_length: f64,
    bar_thickness: f64,
    gap_size: f64,
    arrow_shaft_length: f64,
    arrow_head_bar_length: f64,
    spin_enabled: bool,
    direction: ArrowDirection,
    layout_direction: LayoutDirection,
    progress: f64,
    vertical_mirror: bool,
    paint: PaintState,
    path: BezPath,
}

impl DrawerArrow {
    /// A black arrow with default dimensions scaled by `density`.
    pub fn new(density: Density) -> Self {
        Self {
            color: Rgba8::BLACK,
            bar_length: density.px(DEFAULT_BAR_LENGTH_DP),
            bar_thickness: density.px(DEFAULT_BAR_THICKNESS_DP),
            gap_size: density.px(DEFAULT_BAR_GAP_SIZE_DP),
            arrow_shaft_length: density.px(DEFAULT_ARROW_SHAFT_LENGTH_DP),
            arrow_head_bar_length: head_bar_length(density.px(DEFAULT_ARROW_HEAD_LENGTH_DP)),
            spin_enabled: true,
            direction: ArrowDirection::default(),
            layout_direction: LayoutDirection::default(),
            progress: 0.0,
            vertical_mirror: false,
            paint: PaintState::default(),
            path: BezPath::new(),
        }
    }

    /// Bar color.
    pub fn color(&self) -> Rgba8 {
        self.color
    }

    /// Set the bar color.
    pub fn set_color(&mut self, color: Rgba8) {
        self.color = color;
    }

    /// Set the hamburger bar length in pixels.
    pub fn set_bar_length(&mut self, px: f64) {
        self.bar_length = px;
    }

    /// Set the bar stroke thickness in pixels.
    pub fn set_bar_thickness(&mut self, px: f64) {
        self.bar_thickness = px;
    }

    /// Set the gap between bars in pixels.
    pub fn set_gap_size(&mut self, px: f64) {
        self.gap_size = px;
    }

    /// Arrow shaft length in pixels.
    pub fn arrow_shaft_length(&self) -> f64 {
        self.arrow_shaft_length
    }

    /// Set the arrow shaft length in pixels.
    pub fn set_arrow_shaft_length(&mut self, px: f64) {
        self.arrow_shaft_length = px;
    }

    /// Arrow head length (along each axis) in pixels.
    pub fn arrow_head_length(&self) -> f64 {
        self.arrow_head_bar_length / std::f64::consts::SQRT_2
    }

    /// Set the arrow head length (along each axis) in pixels.
    pub fn set_arrow_head_length(&mut self, px: f64) {
        self.arrow_head_bar_length = head_bar_length(px);
    }

    /// Whether the glyph spins while morphing.
    pub fn is_spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    /// Enable or disable spinning.
    pub fn set_spin_enabled(&mut self, enabled: bool) {
        self.spin_enabled = enabled;
    }

    /// Arrow direction.
    pub fn direction(&self) -> ArrowDirection {
        self.direction
    }

    /// Set the arrow direction.
    pub fn set_direction(&mut self, direction: ArrowDirection) {
        self.direction = direction;
    }

    /// Host layout direction.
    pub fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }

    /// Set the host layout direction.
    pub fn set_layout_direction(&mut self, layout_direction: LayoutDirection) {
        self.layout_direction = layout_direction;
    }

    /// Whether the vertical mirror is on.
    pub fn is_vertical_mirror(&self) -> bool {
        self.vertical_mirror
    }

    fn points_right(&self) -> bool {
        match self.direction {
            ArrowDirection::Left => false,
            ArrowDirection::Right => true,
            ArrowDirection::Start => self.layout_direction == LayoutDirection::Rtl,
            ArrowDirection::End => self.layout_direction == LayoutDirection::Ltr,
        }
    }

    fn rebuild_path(&mut self) {
        let p = self.progress;
        let max_cut = self.bar_thickness / 2.0 * ARROW_HEAD_ANGLE.cos();
        let head_bar = lerp(self.bar_length, self.arrow_head_bar_length, p);
        let shaft = lerp(self.bar_length, self.arrow_shaft_length, p);
        let shaft_cut = lerp(0.0, max_cut, p).round();
        let rotation = lerp(0.0, ARROW_HEAD_ANGLE, p);
        let arrow_w = (head_bar * rotation.cos()).round();
        let arrow_h = (head_bar * rotation.sin()).round();
        let bar_offset = lerp(self.gap_size + self.bar_thickness, -max_cut, p);
        let edge = -shaft / 2.0;

        let path = &mut self.path;
        path.truncate(0);
        path.move_to((edge + shaft_cut, 0.0));
        path.line_to((edge + shaft - shaft_cut, 0.0));
        path.move_to((edge, bar_offset));
        path.line_to((edge + arrow_w, bar_offset + arrow_h));
        path.move_to((edge, -bar_offset));
        path.line_to((edge + arrow_w, -bar_offset - arrow_h));
    }
}

fn head_bar_length(head_length: f64) -> f64 {
    (head_length * head_length * 2.0).sqrt()
}

impl MorphRenderer for DrawerArrow {
    fn set_progress(&mut self, progress: f64) {
        self.progress = progress;
    }

    fn progress(&self) -> f64 {
        self.progress
    }

    fn metrics(&self) -> BarMetrics {
        BarMetrics {
            bar_length: self.bar_length,
            bar_thickness: self.bar_thickness,
            gap_size: self.gap_size,
        }
    }

    fn draw(&mut self, surface: &mut dyn Surface, bounds: Rect) {
        let points_right = self.points_right();
        let flip_sign = if self.vertical_mirror ^ points_right {
            -1.0
        } else {
            1.0
        };
        let canvas_rotate = if points_right {
            lerp(0.0, 180.0, self.progress)
        } else {
            lerp(-180.0, 0.0, self.progress)
        };
        self.rebuild_path();

        let stack = self.bar_thickness * 3.0 + self.gap_size * 2.0;
        let remaining = ((bounds.height() - stack) as i64 / 4 * 2) as f64;
        let y = remaining + self.bar_thickness * 1.5 + self.gap_size;

        surface.save();
        surface.translate(Vec2::new(bounds.center().x, y));
        if self.spin_enabled {
            surface.rotate_about(canvas_rotate * flip_sign, Point::ZERO);
        } else if points_right {
            surface.rotate_about(180.0, Point::ZERO);
        }
        let style = StrokeStyle {
            width: self.bar_thickness,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
        };
        surface.stroke_path(&self.path, &style, self.paint.resolve(self.color));
        surface.restore();
    }

    fn set_vertical_mirror(&mut self, mirror: bool) {
        self.vertical_mirror = mirror;
    }

    fn set_alpha(&mut self, alpha: u8) {
        self.paint.alpha = alpha;
    }

    fn set_color_filter(&mut self, filter: Option<ColorFilter>) {
        self.paint.color_filter = filter;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/drawer_arrow.rs"]
mod tests;
