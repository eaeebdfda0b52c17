//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::ChallengeFeedPage;

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Feed,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Feed => html! { <ChallengeFeedPage /> },
        Route::NotFound => html! {
            <div class="bp-page bp-not-found">
                <h1>{"404 - Page Not Found"}</h1>
                <Link<Route> to={Route::Feed}>{"Back to the challenge"}</Link<Route>>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
