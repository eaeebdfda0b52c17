//! The challenge feed screen.

use std::rc::Rc;

use challenge_core::{DayId, ScreenAction, ScreenState, save_theme};
use tracing::debug;
use yew::prelude::*;

use crate::components::{Drawer, Header, SharedPosts, Sidebar, SubmissionCard};
use crate::storage::{LocalPreferenceStore, apply_document_theme, os_prefers_dark};

/// Screen state as a Yew reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FeedScreen(pub ScreenState);

impl Reducible for FeedScreen {
    type Action = ScreenAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        debug!(?action, "screen action");
        Rc::new(Self(self.0.apply(action)))
    }
}

/// Challenge feed page component.
#[function_component(ChallengeFeedPage)]
pub fn challenge_feed_page() -> Html {
    let screen = use_reducer(|| {
        FeedScreen(ScreenState::mount(&LocalPreferenceStore, os_prefers_dark()))
    });
    let state = screen.0;

    // Persist on mount and on every change
    use_effect_with(state.theme, |theme| {
        apply_document_theme(*theme);
        save_theme(&mut LocalPreferenceStore, *theme);
    });

    let dispatcher = screen.dispatcher();

    let on_day_click = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |day: DayId| dispatcher.dispatch(ScreenAction::SelectDay(day)))
    };

    let on_theme_toggle = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| dispatcher.dispatch(ScreenAction::ToggleTheme))
    };

    let on_info = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| dispatcher.dispatch(ScreenAction::OpenDrawer))
    };

    let on_drawer_close =
        Callback::from(move |_: ()| dispatcher.dispatch(ScreenAction::CloseDrawer));

    html! {
        <div class="bp-page">
            <Header
                theme={state.theme}
                progress_label={state.navigation.progress_label()}
                {on_info}
                {on_theme_toggle}
            />
            <div class="bp-main">
                <Sidebar navigation={state.navigation} {on_day_click} />
                <section class="bp-content-pane">
                    <div class="bp-feed-col">
                        <SubmissionCard />
                        <SharedPosts />
                    </div>
                </section>
            </div>
            <Drawer open={state.drawer_open} on_close={on_drawer_close} />
        </div>
    }
}
