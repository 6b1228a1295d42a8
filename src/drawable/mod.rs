//! The badged drawable: badge state, animation and render composition over a morph glyph.

pub(crate) mod badged;
