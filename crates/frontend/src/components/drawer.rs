//! Challenge description drawer.

use challenge_core::content::{CHALLENGE_TITLE, DESCRIPTION};
use yew::prelude::*;

use crate::components::dismiss::use_escape_dismiss;
use crate::components::{Icon, IconKind};

/// Properties for Drawer component.
#[derive(Properties, PartialEq)]
pub struct DrawerProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Modal side drawer. Closes on the X and "Got it" buttons, an overlay
/// click or Escape.
#[function_component(Drawer)]
pub fn drawer(props: &DrawerProps) -> Html {
    use_escape_dismiss(props.open, props.on_close.clone());

    if !props.open {
        return html! {};
    }

    let on_click_close = props.on_close.reform(|_: MouseEvent| ());
    let description = DESCRIPTION;

    html! {
        <div class="bp-drawer-root">
            <div class="bp-drawer-overlay" onclick={on_click_close.clone()} />
            <div
                class="bp-drawer"
                role="dialog"
                aria-modal="true"
                aria-labelledby="challenge-description-title"
                aria-describedby="challenge-description-text"
            >
                <header class="bp-drawer-header">
                    <button
                        class="bp-close"
                        type="button"
                        aria-label="Close challenge description"
                        onclick={on_click_close.clone()}
                    >
                        <Icon kind={IconKind::Close} />
                    </button>
                    <h2 class="bp-drawer-title" id="challenge-description-title">
                        {"Challenge Description"}
                    </h2>
                </header>
                <section class="bp-drawer-body">
                    <img alt="Challenge cover" class="bp-drawer-cover" src={description.cover_url} />
                    <h3 class="bp-drawer-challenge-title">{ CHALLENGE_TITLE }</h3>
                    <dl class="bp-stats">
                        <div>
                            <dt>{"Total Checkins"}</dt>
                            <dd>{ description.total_checkins.to_string() }</dd>
                        </div>
                        <div>
                            <dt>{"Participants Joined"}</dt>
                            <dd>{ description.participants_joined.to_string() }</dd>
                        </div>
                    </dl>
                    <h4 class="bp-desc-label">{"Description"}</h4>
                    <p class="bp-desc" id="challenge-description-text">{ description.description }</p>
                </section>
                <footer class="bp-drawer-footer">
                    <button class="bp-got-it" type="button" onclick={on_click_close}>
                        {"Got it"}
                    </button>
                </footer>
            </div>
        </div>
    }
}
