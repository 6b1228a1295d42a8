use kurbo::Shape;

use crate::foundation::core::{BezPath, Circle, Point};

const CIRCLE_TOLERANCE: f64 = 0.1;

/// Inputs the carve-out region is derived from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipParams {
    /// Whether the badge is shown at all.
    pub enabled: bool,
    /// Extra clearance around the badge; `<= 0` disables the carve-out.
    pub margin: f64,
    /// Badge center in surface coordinates.
    pub center: Point,
    /// Unscaled badge radius.
    pub radius: f64,
    /// Current animated badge scale.
    pub scale: f64,
    /// Top of the icon bounds. The morph draws in a frame translated by this amount, so the
    /// region is expressed relative to it.
    pub frame_top: f64,
}

impl ClipParams {
    /// Carve-out radius: `(radius + margin) * scale`.
    pub fn clip_radius(&self) -> f64 {
        (self.radius + self.margin) * self.scale
    }
}

/// Dirty-bit guarded cache of the circular region cut out of the morph under the badge.
#[derive(Debug)]
pub struct ClipCache {
    path: Option<BezPath>,
    dirty: bool,
    rebuilds: u64,
}

impl Default for ClipCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipCache {
    /// An empty cache, dirty until first computed.
    pub fn new() -> Self {
        Self {
            path: None,
            dirty: true,
            rebuilds: 0,
        }
    }

    /// Force a rebuild on the next [`ClipCache::compute`].
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Whether the next compute will rebuild.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of times the region has been rebuilt.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Return the current carve-out region, rebuilding it only if dirty.
    ///
    /// Returns `None` (and drops any cached region) when the badge is disabled or the margin is
    /// not positive. A rebuild reuses the previous path allocation.
    pub fn compute(&mut self, params: &ClipParams) -> Option<&BezPath> {
        if !params.enabled || !(params.margin > 0.0) {
            self.path = None;
            return None;
        }
        if !self.dirty && self.path.is_some() {
            return self.path.as_ref();
        }

        let center = Point::new(params.center.x, params.center.y - params.frame_top);
        let radius = params.clip_radius();
        tracing::trace!(x = center.x, y = center.y, radius, "rebuilding badge clip");

        self.dirty = false;
        self.rebuilds += 1;
        let path = self.path.get_or_insert_with(BezPath::new);
        path.truncate(0);
        path.extend(Circle::new(center, radius).path_elements(CIRCLE_TOLERANCE));
        Some(path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/badge/clip.rs"]
mod tests;
