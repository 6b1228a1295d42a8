use std::path::Path;

use smallvec::SmallVec;

use crate::foundation::core::Rect;
use crate::foundation::error::{BadgeError, BadgeResult};

/// One glyph of a shaped label, positioned relative to the label's baseline origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelGlyph {
    /// Glyph id in the label font.
    pub id: u32,
    /// Horizontal position.
    pub x: f32,
    /// Vertical position; `0` is the baseline.
    pub y: f32,
}

/// A measured, shaped single-line badge label.
#[derive(Clone, Debug)]
pub struct ShapedLabel {
    /// Source text.
    pub text: String,
    /// Font size in pixels the label was shaped at.
    pub font_size: f32,
    /// Tight ink bounds relative to the baseline origin, y-down.
    pub bounds: Rect,
    /// Positioned glyphs.
    pub glyphs: SmallVec<[LabelGlyph; 4]>,
    /// Font the glyph ids index into, when shaped from real font data.
    pub font: Option<vello_cpu::peniko::FontData>,
}

/// Measures and shapes badge labels.
pub trait LabelShaper {
    /// Shape `text` at `font_size` pixels.
    fn shape(&mut self, text: &str, font_size: f32) -> BadgeResult<ShapedLabel>;
}

/// Shaper used when no font is configured; every label fails to shape.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFontShaper;

impl LabelShaper for NoFontShaper {
    fn shape(&mut self, text: &str, _font_size: f32) -> BadgeResult<ShapedLabel> {
        Err(BadgeError::text(format!(
            "no font configured to shape label '{text}'"
        )))
    }
}

/// Parley-backed shaper over a single registered font family, laid out in bold.
pub struct ParleyShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for ParleyShaper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyShaper")
            .field("family_name", &self.family_name)
            .finish_non_exhaustive()
    }
}

impl ParleyShaper {
    /// Register `font_bytes` and shape with its first family.
    pub fn from_font_bytes(font_bytes: Vec<u8>) -> BadgeResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| BadgeError::text("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| BadgeError::text("registered font family has no name"))?
            .to_string();
        tracing::debug!(family = %family_name, "registered label font");

        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font,
        })
    }

    /// Load a font file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> BadgeResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            BadgeError::text(format!("read font file '{}': {e}", path.display()))
        })?;
        Self::from_font_bytes(bytes)
    }

    /// Family name labels are shaped with.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }
}

impl LabelShaper for ParleyShaper {
    fn shape(&mut self, text: &str, font_size: f32) -> BadgeResult<ShapedLabel> {
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(BadgeError::text(format!(
                "label font size must be finite and > 0, got {font_size}"
            )));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font_size));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::BOLD,
        ));
        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        let mut glyphs: SmallVec<[LabelGlyph; 4]> = SmallVec::new();
        let mut line_box = Rect::ZERO;
        // Labels are single-line; only the first line contributes.
        if let Some(line) = layout.lines().next() {
            let metrics = line.metrics();
            line_box = Rect::new(
                0.0,
                -f64::from(metrics.ascent),
                f64::from(layout.width()),
                f64::from(metrics.descent),
            );
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                glyphs.extend(run.positioned_glyphs().map(|g| LabelGlyph {
                    id: g.id,
                    x: g.x,
                    y: g.y - metrics.baseline,
                }));
            }
        }

        // Whitespace has no ink; keep the line box so it still centers.
        let bounds = ink_bounds(&self.font, font_size, &glyphs)?.unwrap_or(line_box);

        Ok(ShapedLabel {
            text: text.to_owned(),
            font_size,
            bounds,
            glyphs,
            font: Some(self.font.clone()),
        })
    }
}

/// Union of the glyph outline boxes, baseline-relative and y-down.
fn ink_bounds(
    font: &vello_cpu::peniko::FontData,
    font_size: f32,
    glyphs: &[LabelGlyph],
) -> BadgeResult<Option<Rect>> {
    let font_ref = skrifa::FontRef::from_index(font.data.data(), font.index)
        .map_err(|e| BadgeError::text(format!("parse label font: {e}")))?;
    let metrics = skrifa::metrics::GlyphMetrics::new(
        &font_ref,
        skrifa::instance::Size::new(font_size),
        skrifa::instance::LocationRef::default(),
    );

    let mut ink: Option<Rect> = None;
    for g in glyphs {
        let Some(b) = metrics.bounds(skrifa::GlyphId::new(g.id)) else {
            continue;
        };
        if b.x_max <= b.x_min || b.y_max <= b.y_min {
            continue;
        }
        let glyph_box = Rect::new(
            f64::from(g.x + b.x_min),
            f64::from(g.y - b.y_max),
            f64::from(g.x + b.x_max),
            f64::from(g.y - b.y_min),
        );
        ink = Some(ink.map_or(glyph_box, |r| r.union(glyph_box)));
    }
    Ok(ink)
}

#[cfg(test)]
#[path = "../../tests/unit/text/shaper.rs"]
mod tests;
