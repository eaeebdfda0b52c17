//! Core model for the nine-day challenge feed.
//!
//! This crate holds everything about the challenge screen that is not
//! rendering: the fixed day track, the selected-day state machine, the
//! per-day visual classification, the theme preference and its store,
//! the screen's action reducer and the static feed copy. It has no
//! browser dependencies so it can be tested natively.

pub mod content;
pub mod day_track;
pub mod navigation;
pub mod presentation;
pub mod screen;
pub mod theme;

pub use day_track::{DayId, DayMarker, MAX_DAY, day_track, position_of};
pub use navigation::{MIN_SELECTABLE_DAY, NavigationState};
pub use presentation::{
    DayClass, DayIcon, SIDEBAR_ROW_GAP, SIDEBAR_ROW_HEIGHT, classify, indicator_offset,
};
pub use screen::{ScreenAction, ScreenState};
pub use theme::{
    MemoryStore, PreferenceStore, THEME_STORAGE_KEY, Theme, ThemeError, load_theme, save_theme,
};
