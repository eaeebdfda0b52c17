//! The fixed, ordered sequence of challenge days.

use serde::Serialize;

/// Identifier of a challenge day (1-based).
pub type DayId = i32;

/// Last day of the challenge.
pub const MAX_DAY: DayId = 9;

/// One selectable day in the challenge sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayMarker {
    /// Day number, unique and ascending along the track
    pub id: DayId,
    /// Text shown in the sidebar row
    pub label: &'static str,
}

static DAY_TRACK: [DayMarker; MAX_DAY as usize] = [
    DayMarker { id: 1, label: "Day - 1" },
    DayMarker { id: 2, label: "Day - 2" },
    DayMarker { id: 3, label: "Day - 3" },
    DayMarker { id: 4, label: "Day - 4" },
    DayMarker { id: 5, label: "Day - 5" },
    DayMarker { id: 6, label: "Day - 6" },
    DayMarker { id: 7, label: "Day - 7" },
    DayMarker { id: 8, label: "Day - 8" },
    DayMarker { id: 9, label: "Day - 9" },
];

/// All day markers in display order.
pub fn day_track() -> &'static [DayMarker] {
    &DAY_TRACK
}

/// Zero-based position of a day within `track`, if present.
pub fn position_of(track: &[DayMarker], id: DayId) -> Option<usize> {
    track.iter().position(|marker| marker.id == id)
}
