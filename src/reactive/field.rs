/// A configuration value that reports whether a write actually changed it.
///
/// Writes compare structurally (`PartialEq`) against the stored value. Writing the current value
/// is a no-op, so the owner runs its side effect only when [`Field::set`] returns `true`, and
/// always before returning to the caller.
#[derive(Clone, Debug, Default)]
pub struct Field<T> {
    value: T,
}

impl<T: PartialEq> Field<T> {
    /// Wrap an initial value.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrow the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Store `value`, returning `true` iff it differs from the previous value.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }

    /// Store `value` and run `on_change` with the new value iff it changed.
    pub fn set_with(&mut self, value: T, on_change: impl FnOnce(&T)) -> bool {
        let changed = self.set(value);
        if changed {
            on_change(&self.value);
        }
        changed
    }
}

impl<T: Copy> Field<T> {
    /// Copy out the current value.
    pub fn value(&self) -> T {
        self.value
    }
}

/// Side effect a changed configuration field triggers on its drawable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Invalidation {
    /// Request a redraw.
    Redraw,
    /// Mark the clip region dirty, then request a redraw.
    RedrawAndClip,
    /// Mark the label layout dirty, then request a redraw.
    Relabel,
}

impl Invalidation {
    /// Invalidating variant for a field, optionally also dirtying the clip.
    pub fn invalidating(invalidate_clip: bool) -> Self {
        if invalidate_clip {
            Self::RedrawAndClip
        } else {
            Self::Redraw
        }
    }

    /// Whether the clip region must be rebuilt.
    pub fn dirties_clip(self) -> bool {
        matches!(self, Self::RedrawAndClip)
    }

    /// Whether the label layout must be recomputed.
    pub fn dirties_label(self) -> bool {
        matches!(self, Self::Relabel)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reactive/field.rs"]
mod tests;
