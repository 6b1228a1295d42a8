use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::badge::geometry::{BadgeSize, Corner};
use crate::badge::label::TextSizeFn;
use crate::badge::motion::Motion;
use crate::drawable::badged::BadgedDrawerArrow;
use crate::foundation::core::{
    DEFAULT_ARROW_HEAD_LENGTH_DP, DEFAULT_ARROW_SHAFT_LENGTH_DP, DEFAULT_BAR_GAP_SIZE_DP,
    DEFAULT_BAR_LENGTH_DP, DEFAULT_BAR_THICKNESS_DP, Density, Rgba8, Vec2,
};
use crate::foundation::error::{BadgeError, BadgeResult};
use crate::morph::drawer_arrow::{ArrowDirection, DrawerArrow, LayoutDirection};
use crate::text::shaper::LabelShaper;

/// Immutable, declarative description of a badged drawer arrow.
///
/// Every length is in density-independent units and is converted with the [`Density`] passed to
/// [`BadgedArrowProps::apply_to`]. Missing JSON fields take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BadgedArrowProps {
    /// Bar color.
    pub bar_color: Rgba8,
    /// Hamburger bar length.
    pub bar_length: f64,
    /// Bar stroke thickness.
    pub bar_thickness: f64,
    /// Gap between bars.
    pub bar_gap_size: f64,
    /// Arrow shaft length.
    pub arrow_shaft_length: f64,
    /// Arrow head length.
    pub arrow_head_length: f64,
    /// Which way the arrow points.
    pub arrow_direction: ArrowDirection,
    /// Host layout direction `Start`/`End` resolve against.
    pub layout_direction: LayoutDirection,
    /// Whether the glyph spins while morphing.
    pub spin_enabled: bool,
    /// Whether the badge is shown.
    pub badge_enabled: bool,
    /// Badge sizing policy. `Custom` diameters are in dp here.
    pub badge_size: BadgeSize,
    /// Badge fill color.
    pub badge_color: Rgba8,
    /// Corner the badge is pushed toward.
    pub badge_corner: Corner,
    /// Badge center nudge.
    pub badge_offset: Vec2,
    /// Carve-out clearance around the badge.
    pub badge_clip_margin: f64,
    /// Badge label.
    pub badge_text: Option<String>,
    /// Label size hook. Not serialized; only settable from code.
    #[serde(skip)]
    pub badge_text_size: TextSizeFn,
    /// Label color.
    pub badge_text_color: Rgba8,
    /// Label nudge.
    pub badge_text_offset: Vec2,
    /// Badge motion.
    pub badge_motion: Motion,
    /// Flip the spin direction when the morph reaches an endpoint.
    pub auto_mirror_on_reverse: bool,
}

impl Default for BadgedArrowProps {
    fn default() -> Self {
        Self {
            bar_color: Rgba8::BLACK,
            bar_length: DEFAULT_BAR_LENGTH_DP,
            bar_thickness: DEFAULT_BAR_THICKNESS_DP,
            bar_gap_size: DEFAULT_BAR_GAP_SIZE_DP,
            arrow_shaft_length: DEFAULT_ARROW_SHAFT_LENGTH_DP,
            arrow_head_length: DEFAULT_ARROW_HEAD_LENGTH_DP,
            arrow_direction: ArrowDirection::Start,
            layout_direction: LayoutDirection::Ltr,
            spin_enabled: true,
            badge_enabled: false,
            badge_size: BadgeSize::Standard,
            badge_color: Rgba8::RED,
            badge_corner: Corner::TopRight,
            badge_offset: Vec2::ZERO,
            badge_clip_margin: 0.0,
            badge_text: None,
            badge_text_size: TextSizeFn::identity(),
            badge_text_color: Rgba8::WHITE,
            badge_text_offset: Vec2::ZERO,
            badge_motion: Motion::NONE,
            auto_mirror_on_reverse: false,
        }
    }
}

impl BadgedArrowProps {
    /// Parse props from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> BadgeResult<Self> {
        let props: Self = serde_json::from_reader(r)
            .map_err(|e| BadgeError::serde(format!("parse props JSON: {e}")))?;
        props.validate()?;
        Ok(props)
    }

    /// Parse props from a JSON string.
    pub fn from_json_str(s: &str) -> BadgeResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse props from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BadgeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BadgeError::validation(format!("open props JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject lengths no glyph can be drawn with.
    pub fn validate(&self) -> BadgeResult<()> {
        let lengths = [
            ("bar_length", self.bar_length),
            ("bar_thickness", self.bar_thickness),
            ("bar_gap_size", self.bar_gap_size),
            ("arrow_shaft_length", self.arrow_shaft_length),
            ("arrow_head_length", self.arrow_head_length),
        ];
        for (name, v) in lengths {
            if !v.is_finite() || v < 0.0 {
                return Err(BadgeError::validation(format!(
                    "{name} must be finite and >= 0, got {v}"
                )));
            }
        }
        if !self.badge_clip_margin.is_finite() {
            return Err(BadgeError::validation("badge_clip_margin must be finite"));
        }
        if let BadgeSize::Custom(d) = self.badge_size
            && !d.is_finite()
        {
            return Err(BadgeError::validation("custom badge size must be finite"));
        }
        Ok(())
    }

    /// Push every field onto `drawable`. Fields that already match are no-ops.
    pub fn apply_to(&self, drawable: &mut BadgedDrawerArrow<DrawerArrow>, density: Density) {
        let mut morph = drawable.morph().clone();
        self.configure_morph(&mut morph, density);
        if morph != *drawable.morph() {
            drawable.update_morph(|m| *m = morph);
        }

        drawable.set_badge_enabled(self.badge_enabled);
        drawable.set_badge_size(match self.badge_size {
            BadgeSize::Custom(d) => BadgeSize::Custom(density.px(d)),
            other => other,
        });
        drawable.set_badge_color(self.badge_color);
        drawable.set_badge_corner(self.badge_corner);
        drawable.set_badge_offset(self.badge_offset * density.0);
        drawable.set_badge_clip_margin(density.px(self.badge_clip_margin));
        drawable.set_badge_text(self.badge_text.clone());
        drawable.set_badge_text_size(self.badge_text_size.clone());
        drawable.set_badge_text_color(self.badge_text_color);
        drawable.set_badge_text_offset(self.badge_text_offset * density.0);
        drawable.set_badge_motion(self.badge_motion);
        drawable.set_auto_mirror_on_reverse(self.auto_mirror_on_reverse);
    }

    fn configure_morph(&self, morph: &mut DrawerArrow, density: Density) {
        morph.set_color(self.bar_color);
        morph.set_bar_length(density.px(self.bar_length));
        morph.set_bar_thickness(density.px(self.bar_thickness));
        morph.set_gap_size(density.px(self.bar_gap_size));
        morph.set_arrow_shaft_length(density.px(self.arrow_shaft_length));
        morph.set_arrow_head_length(density.px(self.arrow_head_length));
        morph.set_direction(self.arrow_direction);
        morph.set_layout_direction(self.layout_direction);
        morph.set_spin_enabled(self.spin_enabled);
    }

    /// A drawable configured from these props, with the given label shaper.
    pub fn build(
        &self,
        density: Density,
        shaper: Box<dyn LabelShaper>,
    ) -> BadgedDrawerArrow<DrawerArrow> {
        let mut drawable =
            BadgedDrawerArrow::with_shaper(DrawerArrow::new(density), density, shaper);
        self.apply_to(&mut drawable, density);
        drawable
    }
}

#[cfg(test)]
#[path = "../../tests/unit/declarative/props.rs"]
mod tests;
