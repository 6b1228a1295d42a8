use kurbo::Shape;

use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8};
use crate::foundation::error::{BadgeError, BadgeResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use crate::render::surface::{LineCap, LineJoin, StrokeStyle, Surface};
use crate::text::shaper::ShapedLabel;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Convert to straight alpha (as expected by PNG encoders).
    pub fn into_straight(mut self) -> Self {
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut self.data);
            self.premultiplied = false;
        }
        self
    }

    /// Pixel at `(x, y)`, or `None` when out of range.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

#[derive(Clone, Copy, Debug)]
struct SavedState {
    transform: Affine,
    layers: usize,
}

/// Raster surface powered by `vello_cpu`.
pub struct CpuSurface {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
    transform: Affine,
    layers: usize,
    stack: Vec<SavedState>,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("transform", &self.transform)
            .field("layers", &self.layers)
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    /// Allocate a transparent surface.
    pub fn new(width: u32, height: u32) -> BadgeResult<Self> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| BadgeError::render("surface width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| BadgeError::render("surface height exceeds u16"))?;
        if width_u16 == 0 || height_u16 == 0 {
            return Err(BadgeError::render("surface dimensions must be > 0"));
        }
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(width_u16, height_u16),
            width: width_u16,
            height: height_u16,
            transform: Affine::IDENTITY,
            layers: 0,
            stack: Vec::new(),
        })
    }

    /// Surface bounds in pixels.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Fill the whole surface with `color`, ignoring transform and clips.
    pub fn clear(&mut self, color: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(to_cpu_color(color));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
    }

    /// Close any open clip layers, rasterize, and read back premultiplied pixels.
    pub fn finish(mut self) -> FrameRGBA {
        for _ in 0..self.layers {
            self.ctx.pop_layer();
        }
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn sync_transform(&mut self) {
        self.ctx.set_transform(affine_to_cpu(self.transform));
    }
}

impl Surface for CpuSurface {
    fn save(&mut self) {
        self.stack.push(SavedState {
            transform: self.transform,
            layers: self.layers,
        });
    }

    fn restore(&mut self) {
        let Some(saved) = self.stack.pop() else {
            return;
        };
        while self.layers > saved.layers {
            self.ctx.pop_layer();
            self.layers -= 1;
        }
        self.transform = saved.transform;
    }

    fn concat(&mut self, affine: Affine) {
        self.transform *= affine;
    }

    fn clip_out(&mut self, region: &BezPath) {
        // Even-odd over (visible surface in local space) + region leaves everything but the
        // region's interior.
        let visible = self.transform.inverse().transform_rect_bbox(self.bounds());
        let mut path = visible.inflate(1.0, 1.0).to_path(0.1);
        path.extend(region.elements().iter().copied());

        self.sync_transform();
        self.ctx.set_fill_rule(vello_cpu::peniko::Fill::EvenOdd);
        self.ctx.push_clip_layer(&bezpath_to_cpu(&path));
        self.ctx.set_fill_rule(vello_cpu::peniko::Fill::NonZero);
        self.layers += 1;
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        self.sync_transform();
        self.ctx.set_paint(to_cpu_color(color));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle, color: Rgba8) {
        let cap = match style.cap {
            LineCap::Butt => vello_cpu::kurbo::Cap::Butt,
            LineCap::Square => vello_cpu::kurbo::Cap::Square,
            LineCap::Round => vello_cpu::kurbo::Cap::Round,
        };
        let join = match style.join {
            LineJoin::Miter => vello_cpu::kurbo::Join::Miter,
            LineJoin::Round => vello_cpu::kurbo::Join::Round,
            LineJoin::Bevel => vello_cpu::kurbo::Join::Bevel,
        };
        self.sync_transform();
        self.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(style.width)
                .with_caps(cap)
                .with_join(join),
        );
        self.ctx.set_paint(to_cpu_color(color));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn fill_glyphs(&mut self, label: &ShapedLabel, origin: Point, color: Rgba8) {
        let Some(font) = &label.font else {
            tracing::trace!(text = %label.text, "label has no font data; skipping glyphs");
            return;
        };
        self.concat(Affine::translate(origin.to_vec2()));
        self.sync_transform();
        self.ctx.set_paint(to_cpu_color(color));
        let glyphs = label.glyphs.iter().map(|g| vello_cpu::Glyph {
            id: g.id,
            x: g.x,
            y: g.y,
        });
        // Unhinted, so the ink matches the measured bounds at every rotation and scale.
        self.ctx
            .glyph_run(font)
            .font_size(label.font_size)
            .hint(false)
            .fill_glyphs(glyphs);
        self.transform *= Affine::translate(-origin.to_vec2());
    }
}

fn to_cpu_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
