//! Top header, sub-header and user menu.

use challenge_core::Theme;
use challenge_core::content::{AVATAR_PATH, CHALLENGE_TITLE, STREAK_DAYS};
use tracing::{info, warn};
use yew::prelude::*;

use crate::components::dismiss::{use_escape_dismiss, use_outside_click};
use crate::components::{Icon, IconKind};

/// Properties for Header component.
#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub theme: Theme,
    pub progress_label: String,
    pub on_info: Callback<()>,
    pub on_theme_toggle: Callback<()>,
}

/// Logo, streak, notifications and user menu, then the challenge sub-header.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_title_click = props.on_info.reform(|_: MouseEvent| ());

    html! {
        <>
            <header class="bp-header-top">
                <div class="bp-logo">
                    <img alt="BackstagePass" class="bp-logo-image" src={props.theme.logo_path()} />
                </div>
                <div class="bp-header-actions">
                    <button class="bp-streak-pill" type="button">
                        { format!("🔥 {STREAK_DAYS}") }
                    </button>
                    <div class="bp-tooltip-anchor">
                        <button class="bp-icon-btn" type="button" aria-label="Notifications">
                            <Icon kind={IconKind::Bell} />
                        </button>
                        <span class="bp-tooltip" role="tooltip">{"Notifications"}</span>
                    </div>
                    <UserMenu theme={props.theme} on_theme_toggle={props.on_theme_toggle.clone()} />
                </div>
            </header>
            <header class="bp-header-sub">
                <div class="bp-header-sub-left">
                    <button class="bp-back-btn" type="button">
                        <Icon kind={IconKind::CaretLeft} />{" Back"}
                    </button>
                    <span class="bp-divider-vertical" />
                    <p class="bp-day-title">{ &props.progress_label }</p>
                </div>
                <button class="bp-header-title" type="button" onclick={on_title_click}>
                    { CHALLENGE_TITLE }{" "}
                    <span><Icon kind={IconKind::Info} /></span>
                </button>
            </header>
        </>
    }
}

/// Properties for UserMenu component.
#[derive(Properties, PartialEq)]
struct UserMenuProps {
    theme: Theme,
    on_theme_toggle: Callback<()>,
}

/// Something that changes whether the user menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuEvent {
    /// Click on the avatar trigger
    Trigger,
    /// Outside click or Escape
    Dismiss,
    /// A menu item was chosen
    Select,
}

/// Open state after `event`. The theme switch is not an item and leaves
/// the menu open.
fn next_menu_open(open: bool, event: MenuEvent) -> bool {
    match event {
        MenuEvent::Trigger => !open,
        MenuEvent::Dismiss | MenuEvent::Select => false,
    }
}

/// Avatar button with a dropdown holding the theme switch and logout.
#[function_component(UserMenu)]
fn user_menu(props: &UserMenuProps) -> Html {
    let open = use_state(|| false);
    let menu_ref = use_node_ref();

    let on_dismiss = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(next_menu_open(*open, MenuEvent::Dismiss)))
    };
    use_escape_dismiss(*open, on_dismiss.clone());
    use_outside_click(*open, menu_ref.clone(), on_dismiss);

    let on_trigger = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(next_menu_open(*open, MenuEvent::Trigger)))
    };

    let on_switch = props.on_theme_toggle.reform(|_: MouseEvent| ());

    let on_logout = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(next_menu_open(*open, MenuEvent::Select));
            // UI-only placeholder, there is no session to end
            info!("logout requested");
            if let Some(window) = web_sys::window()
                && let Err(e) = window.alert_with_message("Logged out")
            {
                warn!(error = ?e, "failed to show logout alert");
            }
        })
    };

    let theme = props.theme;

    html! {
        <div class="bp-user-menu" ref={menu_ref}>
            <button class="bp-avatar-trigger" type="button" aria-expanded={(*open).to_string()} onclick={on_trigger}>
                <img alt="profile" class="bp-avatar-sm" src={AVATAR_PATH} />
            </button>
            if *open {
                <div class="bp-user-menu-panel" role="menu">
                    <div class="bp-theme-row">
                        <div class="bp-theme-meta">
                            <span>{"Theme"}</span>
                            <strong>{ theme.display_name() }</strong>
                        </div>
                        <button
                            class="bp-theme-switch"
                            type="button"
                            role="switch"
                            aria-label="Toggle theme"
                            aria-checked={theme.is_dark().to_string()}
                            data-state={if theme.is_dark() { "checked" } else { "unchecked" }}
                            onclick={on_switch}
                        >
                            <span class="bp-theme-switch-thumb">
                                if theme.is_dark() {
                                    <Icon kind={IconKind::Moon} />
                                } else {
                                    <Icon kind={IconKind::Sun} />
                                }
                            </span>
                        </button>
                    </div>
                    <button class="bp-logout-btn" type="button" role="menuitem" onclick={on_logout}>
                        <Icon kind={IconKind::SignOut} />{" Logout"}
                    </button>
                </div>
            }
        </div>
    }
}
