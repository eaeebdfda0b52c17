//! State owned by the challenge screen and the actions that change it.

use crate::day_track::DayId;
use crate::navigation::NavigationState;
use crate::theme::{PreferenceStore, Theme, load_theme};

/// A user action on the challenge screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    /// Click on a sidebar day
    SelectDay(DayId),
    /// Flip the theme switch in the user menu
    ToggleTheme,
    /// Open the challenge description drawer
    OpenDrawer,
    /// Dismiss the drawer
    CloseDrawer,
}

/// Everything the screen remembers for the duration of its display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenState {
    pub navigation: NavigationState,
    pub theme: Theme,
    pub drawer_open: bool,
}

impl ScreenState {
    /// Create a screen with the default selection and a closed drawer.
    pub fn new(theme: Theme) -> Self {
        Self {
            navigation: NavigationState::new(),
            theme,
            drawer_open: false,
        }
    }

    /// Create the state for a freshly mounted screen, reading the theme
    /// preference from `store`.
    pub fn mount<S: PreferenceStore + ?Sized>(store: &S, os_prefers_dark: bool) -> Self {
        Self::new(load_theme(store, os_prefers_dark))
    }

    /// Apply `action`. Each action touches exactly one field.
    pub fn apply(self, action: ScreenAction) -> Self {
        match action {
            ScreenAction::SelectDay(day) => Self {
                navigation: self.navigation.select_day(day),
                ..self
            },
            ScreenAction::ToggleTheme => Self {
                theme: self.theme.toggled(),
                ..self
            },
            ScreenAction::OpenDrawer => Self {
                drawer_open: true,
                ..self
            },
            ScreenAction::CloseDrawer => Self {
                drawer_open: false,
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{MemoryStore, THEME_STORAGE_KEY, save_theme};

    #[test]
    fn test_mount_defaults() {
        let state = ScreenState::mount(&MemoryStore::new(), false);

        assert_eq!(state.navigation.selected_day(), 2);
        assert_eq!(state.theme, Theme::Light);
        assert!(!state.drawer_open);
    }

    #[test]
    fn test_mount_uses_os_dark_preference() {
        let state = ScreenState::mount(&MemoryStore::new(), true);

        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_select_day_action_clamps() {
        let state = ScreenState::new(Theme::Light);

        let state = state.apply(ScreenAction::SelectDay(15));
        assert_eq!(state.navigation.selected_day(), 9);

        let state = state.apply(ScreenAction::SelectDay(1));
        assert_eq!(state.navigation.selected_day(), 2);
    }

    #[test]
    fn test_drawer_toggled_twice_leaves_other_state_alone() {
        let initial = ScreenState::new(Theme::Dark).apply(ScreenAction::SelectDay(4));

        let state = initial
            .apply(ScreenAction::OpenDrawer)
            .apply(ScreenAction::CloseDrawer)
            .apply(ScreenAction::OpenDrawer)
            .apply(ScreenAction::CloseDrawer);

        assert!(!state.drawer_open);
        assert_eq!(state, initial);
    }

    #[test]
    fn test_toggle_theme_leaves_navigation_alone() {
        let initial = ScreenState::new(Theme::Light).apply(ScreenAction::SelectDay(6));

        let state = initial.apply(ScreenAction::ToggleTheme);

        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.navigation, initial.navigation);
        assert_eq!(state.drawer_open, initial.drawer_open);
    }

    #[test]
    fn test_theme_survives_reload() {
        let mut store = MemoryStore::new();
        let state = ScreenState::mount(&store, false).apply(ScreenAction::ToggleTheme);
        save_theme(&mut store, state.theme);

        let reloaded = ScreenState::mount(&store, false);

        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
        assert_eq!(reloaded.theme, Theme::Dark);
        assert_eq!(reloaded.navigation.selected_day(), 2);
    }
}
