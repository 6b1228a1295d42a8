use crate::foundation::core::Density;

/// Morph progress for a navigation drawer that slides in from the start edge.
///
/// The drawer is closed at `offset == -width` and open at `offset == 0`, so this is
/// `1 - offset / -width`, clamped to `[0, 1]`. A non-positive width or a NaN offset yields `0`.
pub fn drawer_progress(offset: f64, width: f64) -> f64 {
    if width <= 0.0 || !width.is_finite() || offset.is_nan() {
        return 0.0;
    }
    (1.0 - offset / -width).clamp(0.0, 1.0)
}

/// Settled position of a drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DrawerValue {
    /// Fully hidden.
    #[default]
    Closed,
    /// Fully shown.
    Open,
}

impl DrawerValue {
    /// The other value.
    pub fn flipped(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Drawer position: the last settled value and the live offset in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerState {
    /// Last settled value.
    pub value: DrawerValue,
    /// Offset of the drawer's trailing edge from fully open; `-width` when closed.
    pub offset: f64,
}

impl DrawerState {
    /// State settled at `value` for a drawer `width` pixels wide.
    pub fn settled(value: DrawerValue, width: f64) -> Self {
        Self {
            value,
            offset: settled_offset(value, width),
        }
    }

    /// Whether the last settled value is [`DrawerValue::Open`].
    pub fn is_open(&self) -> bool {
        self.value == DrawerValue::Open
    }
}

fn settled_offset(value: DrawerValue, width: f64) -> f64 {
    match value {
        DrawerValue::Closed => -width,
        DrawerValue::Open => 0.0,
    }
}

/// Drives a badged arrow's progress from a drawer's position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerToggle {
    state: DrawerState,
    width_dp: f64,
    density: Density,
}

impl DrawerToggle {
    /// A toggle for a drawer `width_dp` wide, settled at `initial`.
    pub fn new(width_dp: f64, initial: DrawerValue, density: Density) -> Self {
        Self {
            state: DrawerState::settled(initial, density.px(width_dp)),
            width_dp,
            density,
        }
    }

    /// Current drawer state.
    pub fn state(&self) -> DrawerState {
        self.state
    }

    /// Drawer width in pixels.
    pub fn width_px(&self) -> f64 {
        self.density.px(self.width_dp)
    }

    /// Arrow progress for the current drawer offset.
    pub fn progress(&self) -> f64 {
        drawer_progress(self.state.offset, self.width_px())
    }

    /// Flip between open and closed, settling the offset. Returns the new value.
    pub fn toggle(&mut self) -> DrawerValue {
        let value = self.state.value.flipped();
        self.state = DrawerState::settled(value, self.width_px());
        tracing::debug!(?value, "drawer toggled");
        value
    }

    /// Move the drawer mid-gesture, keeping the settled value. The offset is kept within
    /// `[-width, 0]`.
    pub fn drag_to(&mut self, offset: f64) {
        self.state.offset = offset.clamp(-self.width_px().max(0.0), 0.0);
    }

    /// Snap to whichever end the drawer is closer to.
    pub fn settle(&mut self) -> DrawerValue {
        let value = if self.progress() >= 0.5 {
            DrawerValue::Open
        } else {
            DrawerValue::Closed
        };
        self.state = DrawerState::settled(value, self.width_px());
        value
    }
}

#[cfg(test)]
#[path = "../../tests/unit/declarative/toggle.rs"]
mod tests;
