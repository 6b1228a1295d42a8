use crate::foundation::core::{Affine, BezPath, Point, Rgba8};
use crate::render::surface::{StrokeStyle, Surface};
use crate::text::shaper::ShapedLabel;

/// One recorded surface call, with drawing calls capturing the transform in effect.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`Surface::save`].
    Save,
    /// [`Surface::restore`].
    Restore,
    /// [`Surface::concat`].
    Concat(Affine),
    /// [`Surface::clip_out`].
    ClipOut {
        /// Excluded region in local coordinates.
        region: BezPath,
        /// Transform in effect.
        transform: Affine,
    },
    /// [`Surface::fill_path`].
    FillPath {
        /// Filled path in local coordinates.
        path: BezPath,
        /// Fill color.
        color: Rgba8,
        /// Transform in effect.
        transform: Affine,
    },
    /// [`Surface::stroke_path`].
    StrokePath {
        /// Stroked path in local coordinates.
        path: BezPath,
        /// Stroke parameters.
        style: StrokeStyle,
        /// Stroke color.
        color: Rgba8,
        /// Transform in effect.
        transform: Affine,
    },
    /// [`Surface::fill_glyphs`].
    FillGlyphs {
        /// Label text.
        text: String,
        /// Label font size.
        font_size: f32,
        /// Baseline origin in local coordinates.
        origin: Point,
        /// Text color.
        color: Rgba8,
        /// Transform in effect.
        transform: Affine,
    },
}

/// Surface that records calls instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    transform: Affine,
    stack: Vec<Affine>,
}

impl RecordingSurface {
    /// Create an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands, keeping transform state.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Transform currently in effect.
    pub fn current_transform(&self) -> Affine {
        self.transform
    }

    /// Number of unmatched saves.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Recorded fills as `(path, color, transform)`.
    pub fn fills(&self) -> impl Iterator<Item = (&BezPath, Rgba8, Affine)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillPath {
                path,
                color,
                transform,
            } => Some((path, *color, *transform)),
            _ => None,
        })
    }

    /// Recorded label draws as `(text, origin, transform)`.
    pub fn glyph_draws(&self) -> impl Iterator<Item = (&str, Point, Affine)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillGlyphs {
                text,
                origin,
                transform,
                ..
            } => Some((text.as_str(), *origin, *transform)),
            _ => None,
        })
    }

    /// Recorded exclusion clips as `(region, transform)`.
    pub fn clip_outs(&self) -> impl Iterator<Item = (&BezPath, Affine)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::ClipOut { region, transform } => Some((region, *transform)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.stack.push(self.transform);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if let Some(t) = self.stack.pop() {
            self.transform = t;
            self.commands.push(DrawCommand::Restore);
        }
    }

    fn concat(&mut self, affine: Affine) {
        self.transform *= affine;
        self.commands.push(DrawCommand::Concat(affine));
    }

    fn clip_out(&mut self, region: &BezPath) {
        self.commands.push(DrawCommand::ClipOut {
            region: region.clone(),
            transform: self.transform,
        });
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            color,
            transform: self.transform,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle, color: Rgba8) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            style: *style,
            color,
            transform: self.transform,
        });
    }

    fn fill_glyphs(&mut self, label: &ShapedLabel, origin: Point, color: Rgba8) {
        self.commands.push(DrawCommand::FillGlyphs {
            text: label.text.clone(),
            font_size: label.font_size,
            origin,
            color,
            transform: self.transform,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/recording.rs"]
mod tests;
