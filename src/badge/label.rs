use std::fmt;
use std::sync::Arc;

use crate::foundation::core::Rect;
use crate::text::shaper::{LabelShaper, ShapedLabel};

/// Hook mapping the computed default label size to the size actually used.
///
/// Equality is identity: two hooks are equal only if they share the same closure (or are both
/// the default identity hook).
#[derive(Clone, Default)]
pub struct TextSizeFn(Option<Arc<dyn Fn(f64) -> f64 + Send + Sync>>);

impl TextSizeFn {
    /// Wrap a sizing closure.
    pub fn new(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self(Some(Arc::new(f)))
    }

    /// The identity hook.
    pub fn identity() -> Self {
        Self(None)
    }

    /// Apply the hook to `default`.
    pub fn apply(&self, default: f64) -> f64 {
        match &self.0 {
            Some(f) => f(default),
            None => default,
        }
    }
}

impl PartialEq for TextSizeFn {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for TextSizeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("TextSizeFn(custom)"),
            None => f.write_str("TextSizeFn(identity)"),
        }
    }
}

/// Fraction of the badge diameter used as the default label size.
///
/// Tuned for 1 to 3 character labels.
pub fn text_size_factor(len: usize) -> f64 {
    match len {
        1 => 0.75,
        2 => 0.6,
        _ => 0.5,
    }
}

/// Whether `text` yields a drawable label.
pub(crate) fn visible_text(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

/// Cached shaped label, rebuilt lazily when marked dirty or when the badge diameter it was
/// shaped for changes.
///
/// Scale and rotation are applied at draw time, so animation never touches this cache.
#[derive(Debug)]
pub struct LabelCache {
    dirty: bool,
    shaped_for: Option<f64>,
    label: Option<ShapedLabel>,
    reshapes: u64,
}

impl Default for LabelCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelCache {
    /// An empty cache, dirty until first resolved.
    pub fn new() -> Self {
        Self {
            dirty: true,
            shaped_for: None,
            label: None,
            reshapes: 0,
        }
    }

    /// Force a reshape on the next [`LabelCache::resolve`].
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Whether the next resolve will reshape regardless of diameter.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of times the label has been recomputed.
    pub fn reshape_count(&self) -> u64 {
        self.reshapes
    }

    /// Bounds of the cached label relative to its baseline origin; empty when there is none.
    pub fn bounds(&self) -> Rect {
        self.label.as_ref().map_or(Rect::ZERO, |l| l.bounds)
    }

    /// Return the shaped label for the current configuration, recomputing it if stale.
    ///
    /// Blank text yields `None`. Shaping failures are logged and also yield `None`, as does a
    /// non-finite diameter, which is never shaped.
    pub fn resolve(
        &mut self,
        text: Option<&str>,
        diameter: f64,
        size_fn: &TextSizeFn,
        shaper: &mut dyn LabelShaper,
    ) -> Option<&ShapedLabel> {
        if !diameter.is_finite() {
            tracing::trace!(diameter, "non-finite badge diameter; skipping label");
            self.label = None;
            self.shaped_for = None;
            return None;
        }
        if self.dirty || self.shaped_for != Some(diameter) {
            self.rebuild(text, diameter, size_fn, shaper);
        }
        self.label.as_ref()
    }

    fn rebuild(
        &mut self,
        text: Option<&str>,
        diameter: f64,
        size_fn: &TextSizeFn,
        shaper: &mut dyn LabelShaper,
    ) {
        self.dirty = false;
        self.shaped_for = Some(diameter);
        self.reshapes += 1;

        let Some(text) = visible_text(text) else {
            self.label = None;
            return;
        };
        let default_size = diameter * text_size_factor(text.chars().count());
        let size = size_fn.apply(default_size);
        tracing::debug!(text, default_size, size, "shaping badge label");
        self.label = match shaper.shape(text, size as f32) {
            Ok(label) => Some(label),
            Err(e) => {
                tracing::warn!(error = %e, "badge label shaping failed; drawing without label");
                None
            }
        };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/badge/label.rs"]
mod tests;
