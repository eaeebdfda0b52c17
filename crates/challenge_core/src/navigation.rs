//! Selected-day state for the challenge sidebar.

use serde::Serialize;
use tracing::debug;

use crate::day_track::{DayId, MAX_DAY};

/// Lowest day that can hold the selection.
pub const MIN_SELECTABLE_DAY: DayId = 2;

/// Which day is currently selected.
///
/// The selected day always lies in `MIN_SELECTABLE_DAY..=MAX_DAY`. The
/// only way to change it is [`NavigationState::select_day`], which clamps
/// instead of rejecting. Whether the requested day is locked is not
/// checked here: locked rows are rendered disabled and never dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NavigationState {
    selected_day: DayId,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            selected_day: MIN_SELECTABLE_DAY,
        }
    }
}

impl NavigationState {
    /// Create the state a freshly mounted screen starts with.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected day.
    pub fn selected_day(&self) -> DayId {
        self.selected_day
    }

    /// Select `requested`, clamped into the selectable range.
    pub fn select_day(self, requested: DayId) -> Self {
        let normalized = requested.clamp(MIN_SELECTABLE_DAY, MAX_DAY);
        if normalized != requested {
            debug!(requested, normalized, "day selection clamped");
        }

        Self {
            selected_day: normalized,
        }
    }

    /// Sub-header caption, e.g. `"Day 2 of 9"`.
    pub fn progress_label(&self) -> String {
        format!("Day {} of {}", self.selected_day, MAX_DAY)
    }
}
