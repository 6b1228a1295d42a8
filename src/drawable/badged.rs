use crate::badge::clip::{ClipCache, ClipParams};
use crate::badge::geometry::{BadgeSize, Corner, badge_center};
use crate::badge::label::{LabelCache, TextSizeFn, visible_text};
use crate::badge::motion::{Motion, MotionFrame};
use crate::foundation::core::{Circle, DOT_DIAMETER_DP, Density, Point, Rect, Rgba8, Vec2};
use crate::morph::MorphRenderer;
use crate::reactive::field::{Field, Invalidation};
use crate::render::surface::{ColorFilter, PaintState, Surface};
use crate::text::shaper::{LabelShaper, NoFontShaper};
use kurbo::Shape;

const CIRCLE_TOLERANCE: f64 = 0.1;

/// Host callback invoked whenever the drawable needs to be redrawn.
pub type InvalidateCallback = Box<dyn FnMut()>;

/// A hamburger-to-arrow glyph with an optional animated badge.
///
/// The morph itself is delegated to `M`; this type owns the badge configuration, the derived
/// animation state and the caches, and composes both renders in [`BadgedDrawerArrow::draw`].
///
/// Every setter compares against the current value and does nothing when it is unchanged.
/// Changed values run their invalidation synchronously before the setter returns.
pub struct BadgedDrawerArrow<M> {
    morph: M,
    shaper: Box<dyn LabelShaper>,
    dot_diameter: f64,
    bounds: Rect,

    badge_enabled: Field<bool>,
    badge_size: Field<BadgeSize>,
    badge_color: Field<Rgba8>,
    badge_corner: Field<Corner>,
    badge_offset: Field<Vec2>,
    badge_clip_margin: Field<f64>,
    badge_text: Field<Option<String>>,
    badge_text_size: Field<TextSizeFn>,
    badge_text_color: Field<Rgba8>,
    badge_text_offset: Field<Vec2>,
    badge_motion: Field<Motion>,
    auto_mirror_on_reverse: bool,

    paint: PaintState,
    progress: f64,
    vertical_mirror: bool,
    motion_frame: MotionFrame,

    clip: ClipCache,
    label: LabelCache,
    invalidations: u64,
    callback: Option<InvalidateCallback>,
}

impl<M: std::fmt::Debug> std::fmt::Debug for BadgedDrawerArrow<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BadgedDrawerArrow")
            .field("morph", &self.morph)
            .field("bounds", &self.bounds)
            .field("badge_enabled", self.badge_enabled.get())
            .field("badge_size", self.badge_size.get())
            .field("badge_motion", self.badge_motion.get())
            .field("progress", &self.progress)
            .field("vertical_mirror", &self.vertical_mirror)
            .field("motion_frame", &self.motion_frame)
            .finish_non_exhaustive()
    }
}

impl<M: MorphRenderer> BadgedDrawerArrow<M> {
    /// Wrap `morph` with a disabled badge and no label font.
    ///
    /// `density` scales the fixed dot diameter once, here.
    pub fn new(morph: M, density: Density) -> Self {
        Self::with_shaper(morph, density, Box::new(NoFontShaper))
    }

    /// Wrap `morph`, shaping labels with `shaper`.
    pub fn with_shaper(morph: M, density: Density, shaper: Box<dyn LabelShaper>) -> Self {
        let progress = morph.progress();
        Self {
            morph,
            shaper,
            dot_diameter: density.px(DOT_DIAMETER_DP),
            bounds: Rect::ZERO,
            badge_enabled: Field::new(false),
            badge_size: Field::new(BadgeSize::Standard),
            badge_color: Field::new(Rgba8::RED),
            badge_corner: Field::new(Corner::TopRight),
            badge_offset: Field::new(Vec2::ZERO),
            badge_clip_margin: Field::new(0.0),
            badge_text: Field::new(None),
            badge_text_size: Field::new(TextSizeFn::identity()),
            badge_text_color: Field::new(Rgba8::WHITE),
            badge_text_offset: Field::new(Vec2::ZERO),
            badge_motion: Field::new(Motion::NONE),
            auto_mirror_on_reverse: false,
            paint: PaintState::default(),
            progress,
            vertical_mirror: false,
            motion_frame: MotionFrame::IDENTITY,
            clip: ClipCache::new(),
            label: LabelCache::new(),
            invalidations: 0,
            callback: None,
        }
    }

    /// Replace the label shaper; the label is reshaped on next use.
    pub fn set_shaper(&mut self, shaper: Box<dyn LabelShaper>) {
        self.shaper = shaper;
        self.invalidate(Invalidation::Relabel);
    }

    /// Borrow the morph renderer.
    pub fn morph(&self) -> &M {
        &self.morph
    }

    /// Mutate the morph renderer.
    ///
    /// Always requests a redraw; dirties the clip if the bar geometry changed.
    pub fn update_morph<R>(&mut self, f: impl FnOnce(&mut M) -> R) -> R {
        let before = self.morph.metrics();
        let out = f(&mut self.morph);
        let changed = self.morph.metrics() != before;
        self.invalidate(Invalidation::invalidating(changed));
        out
    }

    /// Register a callback run on every redraw request.
    pub fn set_invalidate_callback(&mut self, callback: Option<InvalidateCallback>) {
        self.callback = callback;
    }

    /// Number of redraw requests so far.
    pub fn invalidation_count(&self) -> u64 {
        self.invalidations
    }

    /// Number of times the clip region has been rebuilt.
    pub fn clip_rebuild_count(&self) -> u64 {
        self.clip.rebuild_count()
    }

    /// Number of times the label has been recomputed.
    pub fn label_reshape_count(&self) -> u64 {
        self.label.reshape_count()
    }

    fn invalidate(&mut self, inv: Invalidation) {
        if inv.dirties_clip() {
            self.clip.invalidate();
        }
        if inv.dirties_label() {
            self.label.invalidate();
        }
        self.invalidations += 1;
        if let Some(cb) = self.callback.as_mut() {
            cb();
        }
    }

    /// Current bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Set the bounds the glyph is drawn into.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.clip.invalidate();
        }
    }

    /// Whether the badge is shown.
    pub fn is_badge_enabled(&self) -> bool {
        self.badge_enabled.value()
    }

    /// Show or hide the badge.
    pub fn set_badge_enabled(&mut self, enabled: bool) {
        if self.badge_enabled.set(enabled) {
            self.invalidate(Invalidation::RedrawAndClip);
        }
    }

    /// Badge sizing policy.
    pub fn badge_size(&self) -> BadgeSize {
        self.badge_size.value()
    }

    /// Set the badge sizing policy.
    pub fn set_badge_size(&mut self, size: BadgeSize) {
        if self.badge_size.set(size) {
            self.clip.invalidate();
            self.invalidate(Invalidation::Relabel);
        }
    }

    /// Badge diameter for the current size policy and bar geometry.
    pub fn badge_diameter(&self) -> f64 {
        self.badge_size
            .value()
            .diameter(self.morph.metrics(), self.dot_diameter)
    }

    /// Badge fill color.
    pub fn badge_color(&self) -> Rgba8 {
        self.badge_color.value()
    }

    /// Set the badge fill color.
    pub fn set_badge_color(&mut self, color: Rgba8) {
        if self.badge_color.set(color) {
            self.invalidate(Invalidation::Redraw);
        }
    }

    /// Corner the badge is pushed toward.
    pub fn badge_corner(&self) -> Corner {
        self.badge_corner.value()
    }

    /// Set the badge corner.
    pub fn set_badge_corner(&mut self, corner: Corner) {
        if self.badge_corner.set(corner) {
            self.invalidate(Invalidation::RedrawAndClip);
        }
    }

    /// Pixel nudge applied to the badge center.
    pub fn badge_offset(&self) -> Vec2 {
        self.badge_offset.value()
    }

    /// Set the badge nudge.
    pub fn set_badge_offset(&mut self, offset: Vec2) {
        if self.badge_offset.set(offset) {
            self.invalidate(Invalidation::RedrawAndClip);
        }
    }

    /// Clearance carved out of the glyph around the badge.
    pub fn badge_clip_margin(&self) -> f64 {
        self.badge_clip_margin.value()
    }

    /// Set the carve-out clearance; `<= 0` disables the carve-out.
    pub fn set_badge_clip_margin(&mut self, margin: f64) {
        if self.badge_clip_margin.set(margin) {
            self.invalidate(Invalidation::RedrawAndClip);
        }
    }

    /// Badge label.
    pub fn badge_text(&self) -> Option<&str> {
        self.badge_text.get().as_deref()
    }

    /// Set the badge label; blank or `None` draws no label.
    pub fn set_badge_text(&mut self, text: Option<String>) {
        if self.badge_text.set(text) {
            self.invalidate(Invalidation::Relabel);
        }
    }

    /// Label size hook.
    pub fn badge_text_size(&self) -> &TextSizeFn {
        self.badge_text_size.get()
    }

    /// Set the label size hook.
    pub fn set_badge_text_size(&mut self, f: TextSizeFn) {
        if self.badge_text_size.set(f) {
            self.invalidate(Invalidation::Relabel);
        }
    }

    /// Label color.
    pub fn badge_text_color(&self) -> Rgba8 {
        self.badge_text_color.value()
    }

    /// Set the label color.
    pub fn set_badge_text_color(&mut self, color: Rgba8) {
        if self.badge_text_color.set(color) {
            self.invalidate(Invalidation::Redraw);
        }
    }

    /// Pixel nudge applied to the label.
    pub fn badge_text_offset(&self) -> Vec2 {
        self.badge_text_offset.value()
    }

    /// Set the label nudge.
    pub fn set_badge_text_offset(&mut self, offset: Vec2) {
        if self.badge_text_offset.set(offset) {
            self.invalidate(Invalidation::Redraw);
        }
    }

    /// Badge motion.
    pub fn badge_motion(&self) -> Motion {
        self.badge_motion.value()
    }

    /// Set the badge motion; the animated state is recomputed at the current progress.
    pub fn set_badge_motion(&mut self, motion: Motion) {
        if self.badge_motion.set(motion) {
            self.apply_motion(false);
        }
    }

    /// Whether reaching the endpoints flips the vertical mirror.
    pub fn auto_mirror_on_reverse(&self) -> bool {
        self.auto_mirror_on_reverse
    }

    /// Enable or disable auto-mirroring at the endpoints.
    pub fn set_auto_mirror_on_reverse(&mut self, enabled: bool) {
        self.auto_mirror_on_reverse = enabled;
    }

    /// Set the global alpha on both the glyph and the badge.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.morph.set_alpha(alpha);
        self.paint.alpha = alpha;
        self.invalidate(Invalidation::Redraw);
    }

    /// Set or clear the color filter on both the glyph and the badge.
    pub fn set_color_filter(&mut self, filter: Option<ColorFilter>) {
        self.morph.set_color_filter(filter);
        self.paint.color_filter = filter;
        self.invalidate(Invalidation::Redraw);
    }

    /// Badge paint modifiers.
    pub fn paint(&self) -> PaintState {
        self.paint
    }

    /// Current progress.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Whether the spin is currently mirrored.
    pub fn is_vertical_mirror(&self) -> bool {
        self.vertical_mirror
    }

    /// Current animated badge scale.
    pub fn scale(&self) -> f64 {
        self.motion_frame.scale
    }

    /// Current animated badge rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.motion_frame.rotation
    }

    /// Move the morph to `progress`.
    ///
    /// With auto-mirroring on, exactly `1` turns the mirror on and exactly `0` turns it off.
    /// Values outside `[0, 1]` are accepted and extrapolate.
    pub fn set_progress(&mut self, progress: f64) {
        let mut mirror_changed = false;
        if self.auto_mirror_on_reverse {
            if progress == 1.0 {
                mirror_changed = self.set_vertical_mirror(true);
            } else if progress == 0.0 {
                mirror_changed = self.set_vertical_mirror(false);
            }
        }
        let progress_changed = self.progress != progress;
        self.progress = progress;
        if mirror_changed || progress_changed {
            // One host write requests at most one redraw.
            self.apply_motion(mirror_changed);
        }
        self.morph.set_progress(progress);
    }

    /// Forward the mirror to the morph; returns whether it flipped.
    fn set_vertical_mirror(&mut self, mirror: bool) -> bool {
        self.morph.set_vertical_mirror(mirror);
        let changed = self.vertical_mirror != mirror;
        self.vertical_mirror = mirror;
        changed
    }

    /// Recompute the motion frame at the current progress.
    fn apply_motion(&mut self, force_redraw: bool) {
        let frame = self
            .badge_motion
            .value()
            .interpolate(self.progress, self.vertical_mirror);
        let scale_changed = frame.scale != self.motion_frame.scale;
        let changed = scale_changed || frame.rotation != self.motion_frame.rotation;
        self.motion_frame = frame;
        if changed || force_redraw {
            self.invalidate(Invalidation::invalidating(scale_changed));
        }
    }

    /// Label bounds relative to the baseline origin, recomputing the label if stale.
    pub fn badge_text_bounds(&mut self) -> Rect {
        let diameter = self.badge_diameter();
        self.label.resolve(
            self.badge_text.get().as_deref(),
            diameter,
            self.badge_text_size.get(),
            self.shaper.as_mut(),
        );
        self.label.bounds()
    }

    /// Current carve-out region for `bounds`, in the glyph's translated frame.
    pub fn clip_region(&mut self, bounds: Rect) -> Option<&kurbo::BezPath> {
        self.set_bounds(bounds);
        let params = self.clip_params();
        self.clip.compute(&params)
    }

    fn center(&self) -> Point {
        badge_center(
            self.bounds,
            self.badge_corner.value(),
            self.morph.metrics(),
            self.badge_offset.value(),
        )
    }

    fn clip_params(&self) -> ClipParams {
        ClipParams {
            enabled: self.badge_enabled.value(),
            margin: self.badge_clip_margin.value(),
            center: self.center(),
            radius: self.badge_diameter() / 2.0,
            scale: self.motion_frame.scale,
            frame_top: self.bounds.y0,
        }
    }

    /// Draw the glyph and badge into `bounds`.
    ///
    /// The glyph is drawn in a frame translated down by `bounds.y0` (it positions itself from
    /// the bounds height only), through the carve-out if there is one. The badge is drawn on
    /// top in untranslated coordinates.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn draw(&mut self, surface: &mut dyn Surface, bounds: Rect) {
        self.set_bounds(bounds);
        let params = self.clip_params();

        surface.save();
        surface.translate(Vec2::new(0.0, bounds.y0));
        match self.clip.compute(&params) {
            Some(region) => {
                surface.save();
                surface.clip_out(region);
                self.morph.draw(surface, bounds);
                surface.restore();
            }
            None => self.morph.draw(surface, bounds),
        }
        surface.restore();

        if self.badge_enabled.value() {
            self.draw_badge(surface, params.center, params.radius);
        }
    }

    fn draw_badge(&mut self, surface: &mut dyn Surface, center: Point, radius: f64) {
        let MotionFrame { scale, rotation } = self.motion_frame;
        let r = radius * scale;
        if r > 0.0 {
            let color = self.paint.resolve(self.badge_color.value());
            surface.fill_path(&Circle::new(center, r).to_path(CIRCLE_TOLERANCE), color);
        }

        if self.badge_size.value() == BadgeSize::Dot {
            return;
        }
        if visible_text(self.badge_text.get().as_deref()).is_none() {
            return;
        }
        let diameter = radius * 2.0;
        let Some(label) = self.label.resolve(
            self.badge_text.get().as_deref(),
            diameter,
            self.badge_text_size.get(),
            self.shaper.as_mut(),
        ) else {
            return;
        };

        let text_center = label.bounds.center();
        let offset = self.badge_text_offset.value();
        let origin = Point::new(
            center.x - text_center.x + offset.x,
            center.y - text_center.y + offset.y,
        );
        let color = self.paint.resolve(self.badge_text_color.value());

        surface.save();
        surface.rotate_about(rotation, center);
        surface.scale_about(scale, center);
        surface.fill_glyphs(label, origin, color);
        surface.restore();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/drawable/badged.rs"]
mod tests;
