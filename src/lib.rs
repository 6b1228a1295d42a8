//! A hamburger-to-arrow navigation glyph with an animated notification badge.
//!
//! The glyph itself is any [`MorphRenderer`]; [`DrawerArrow`] is the bundled one.
//! [`BadgedDrawerArrow`] layers a badge over it:
//!
//! - Configure the badge through change-detecting setters (or [`BadgedArrowProps`])
//! - Drive the morph with [`BadgedDrawerArrow::set_progress`]; the badge's [`Motion`] follows
//! - Draw into any [`Surface`], e.g. a raster [`CpuSurface`] or a [`RecordingSurface`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod badge;
pub(crate) mod declarative;
pub(crate) mod drawable;
pub(crate) mod morph;
pub(crate) mod reactive;
pub(crate) mod render;
pub(crate) mod text;

pub use crate::foundation::core::{
    Affine, BezPath, Circle, DEFAULT_ARROW_HEAD_LENGTH_DP, DEFAULT_ARROW_SHAFT_LENGTH_DP,
    DEFAULT_BAR_GAP_SIZE_DP, DEFAULT_BAR_LENGTH_DP, DEFAULT_BAR_THICKNESS_DP, DOT_DIAMETER_DP,
    Density, Point, Rect, Rgba8, Vec2,
};
pub use crate::foundation::error::{BadgeError, BadgeResult};
pub use crate::foundation::math::{lerp, unpremultiply_rgba8_in_place};

pub use crate::badge::clip::{ClipCache, ClipParams};
pub use crate::badge::geometry::{BadgeSize, BarMetrics, Corner, badge_center};
pub use crate::badge::label::{LabelCache, TextSizeFn, text_size_factor};
pub use crate::badge::motion::{Motion, MotionFrame};
pub use crate::declarative::props::BadgedArrowProps;
pub use crate::declarative::toggle::{DrawerState, DrawerToggle, DrawerValue, drawer_progress};
pub use crate::drawable::badged::{BadgedDrawerArrow, InvalidateCallback};
pub use crate::morph::MorphRenderer;
pub use crate::morph::drawer_arrow::{ArrowDirection, DrawerArrow, LayoutDirection};
pub use crate::reactive::field::{Field, Invalidation};
pub use crate::render::cpu::{CpuSurface, FrameRGBA};
pub use crate::render::recording::{DrawCommand, RecordingSurface};
pub use crate::render::surface::{ColorFilter, LineCap, LineJoin, PaintState, StrokeStyle, Surface};
pub use crate::text::shaper::{LabelGlyph, LabelShaper, NoFontShaper, ParleyShaper, ShapedLabel};
