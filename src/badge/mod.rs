pub(crate) mod clip;
pub(crate) mod geometry;
pub(crate) mod label;
pub(crate) mod motion;
