//! Per-day visual classification for the sidebar.
//!
//! Everything here is a pure projection of [`NavigationState`]; nothing is
//! cached between renders.

use crate::day_track::{DayMarker, position_of};
use crate::navigation::NavigationState;

/// Height of one sidebar row in pixels.
pub const SIDEBAR_ROW_HEIGHT: u32 = 48;

/// Vertical gap between sidebar rows in pixels.
pub const SIDEBAR_ROW_GAP: u32 = 12;

/// Status glyph shown at the end of a sidebar row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayIcon {
    /// Day is after the selection
    Lock,
    /// Day is at or before the selection
    Check,
    /// Neither locked nor completed
    Circle,
}

/// Visual state of one day marker relative to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayClass {
    /// `id > selected`
    pub locked: bool,
    /// `id <= selected`
    pub completed: bool,
    /// `id == selected`
    pub active: bool,
    /// `id == selected - 1`
    pub prev_adjacent: bool,
    /// `id == selected + 1`
    pub next_adjacent: bool,
}

impl DayClass {
    /// Glyph for the row; lock wins over completion.
    pub fn icon(&self) -> DayIcon {
        if self.locked {
            DayIcon::Lock
        } else if self.completed {
            DayIcon::Check
        } else {
            DayIcon::Circle
        }
    }

    /// Whether the row accepts clicks.
    pub fn is_interactive(&self) -> bool {
        !self.locked
    }

    /// CSS classes for the row button.
    pub fn row_class(&self) -> String {
        let mut classes = vec!["bp-day-row"];
        if self.prev_adjacent {
            classes.push("bp-day-row-prev");
        }
        if self.next_adjacent {
            classes.push("bp-day-row-next");
        }
        if self.locked {
            classes.push("cursor-not-allowed");
        }
        classes.join(" ")
    }

    /// CSS classes for the row label.
    pub fn text_class(&self) -> &'static str {
        if self.active {
            "bp-day-text active"
        } else {
            "bp-day-text"
        }
    }
}

/// Classify `marker` against the current selection.
pub fn classify(marker: &DayMarker, navigation: NavigationState) -> DayClass {
    let selected = navigation.selected_day();

    DayClass {
        locked: marker.id > selected,
        completed: marker.id <= selected,
        active: marker.id == selected,
        prev_adjacent: marker.id == selected - 1,
        next_adjacent: marker.id == selected + 1,
    }
}

/// Vertical offset of the selection indicator in pixels.
///
/// Falls back to the top of the list when the selected day is not part
/// of `track`.
pub fn indicator_offset(track: &[DayMarker], navigation: NavigationState) -> u32 {
    position_of(track, navigation.selected_day())
        .map(|index| index as u32 * (SIDEBAR_ROW_HEIGHT + SIDEBAR_ROW_GAP))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day_track::day_track;

    fn classes_for(selected: i32) -> Vec<DayClass> {
        let navigation = NavigationState::new().select_day(selected);
        day_track()
            .iter()
            .map(|marker| classify(marker, navigation))
            .collect()
    }

    #[test]
    fn test_lock_and_completion_partition_track() {
        for selected in 2..=9 {
            let navigation = NavigationState::new().select_day(selected);

            for marker in day_track() {
                let class = classify(marker, navigation);
                assert_eq!(class.locked, marker.id > selected);
                assert_eq!(class.completed, marker.id <= selected);
                assert_ne!(class.locked, class.completed);
            }
        }
    }

    #[test]
    fn test_exactly_one_active_marker() {
        for selected in 2..=9 {
            let active: Vec<usize> = classes_for(selected)
                .iter()
                .enumerate()
                .filter(|(_, class)| class.active)
                .map(|(index, _)| index)
                .collect();

            assert_eq!(active, vec![selected as usize - 1]);
        }
    }

    #[test]
    fn test_initial_state_classification() {
        let classes = classes_for(2);

        assert_eq!(classes[0].icon(), DayIcon::Check);
        assert_eq!(classes[1].icon(), DayIcon::Check);
        assert!(classes[1].active);
        for class in &classes[2..] {
            assert_eq!(class.icon(), DayIcon::Lock);
            assert!(!class.is_interactive());
        }

        assert!(classes[0].prev_adjacent);
        assert!(classes[2].next_adjacent);
        let adjacent = classes
            .iter()
            .filter(|class| class.prev_adjacent || class.next_adjacent)
            .count();
        assert_eq!(adjacent, 2);
    }

    #[test]
    fn test_last_day_has_no_next_neighbour() {
        let classes = classes_for(9);

        assert!(classes.iter().all(|class| !class.next_adjacent));
        assert!(classes.iter().all(|class| !class.locked));
        assert!(classes[7].prev_adjacent);
    }

    #[test]
    fn test_circle_icon_when_neither_locked_nor_completed() {
        let class = DayClass {
            locked: false,
            completed: false,
            active: false,
            prev_adjacent: false,
            next_adjacent: false,
        };

        assert_eq!(class.icon(), DayIcon::Circle);
    }

    #[test]
    fn test_row_class() {
        let classes = classes_for(2);

        assert_eq!(classes[0].row_class(), "bp-day-row bp-day-row-prev");
        assert_eq!(classes[1].row_class(), "bp-day-row");
        assert_eq!(
            classes[2].row_class(),
            "bp-day-row bp-day-row-next cursor-not-allowed"
        );
        assert_eq!(classes[5].row_class(), "bp-day-row cursor-not-allowed");
    }

    #[test]
    fn test_text_class() {
        let classes = classes_for(4);

        assert_eq!(classes[3].text_class(), "bp-day-text active");
        assert_eq!(classes[2].text_class(), "bp-day-text");
    }

    #[test]
    fn test_classify_is_deterministic() {
        assert_eq!(classes_for(6), classes_for(6));
    }

    #[test]
    fn test_indicator_offset() {
        let track = day_track();

        assert_eq!(indicator_offset(track, NavigationState::new()), 60);
        assert_eq!(
            indicator_offset(track, NavigationState::new().select_day(9)),
            480
        );
    }

    #[test]
    fn test_indicator_offset_missing_day_defaults_to_zero() {
        let navigation = NavigationState::new().select_day(5);

        assert_eq!(indicator_offset(&day_track()[..3], navigation), 0);
        assert_eq!(indicator_offset(&[], navigation), 0);
    }
}
