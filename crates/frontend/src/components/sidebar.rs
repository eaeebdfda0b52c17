//! Day selector sidebar.

use challenge_core::{DayId, NavigationState, classify, day_track, indicator_offset};
use yew::prelude::*;

use crate::components::{Icon, IconKind};

/// Properties for Sidebar component.
#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub navigation: NavigationState,
    pub on_day_click: Callback<DayId>,
}

/// Day selector. Locked days are rendered disabled and never emit.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let track = day_track();
    let top = indicator_offset(track, props.navigation);

    let rows = track.iter().map(|marker| {
        let class = classify(marker, props.navigation);
        let onclick = {
            let on_day_click = props.on_day_click.clone();
            let id = marker.id;
            Callback::from(move |_: MouseEvent| on_day_click.emit(id))
        };

        html! {
            <button
                class={class.row_class()}
                key={marker.id}
                type="button"
                disabled={!class.is_interactive()}
                {onclick}
            >
                <span class={class.text_class()}>{ marker.label }</span>
                <span class="bp-day-icon">
                    <Icon kind={IconKind::from(class.icon())} />
                </span>
            </button>
        }
    });

    html! {
        <aside class="bp-sidebar">
            <div class="bp-sidebar-blur-top" />
            <div class="bp-sidebar-blur-bottom" />
            <div class="bp-sidebar-list">
                <div class="bp-day-indicator" style={format!("transform: translateY({top}px)")} />
                { for rows }
            </div>
        </aside>
    }
}
