//! "See what others shared" section.

use challenge_core::content::SHARED;
use yew::prelude::*;

use crate::components::{Icon, IconKind, PostProfile};

#[function_component(SharedPosts)]
pub fn shared_posts() -> Html {
    let shared = SHARED;

    html! {
        <section class="bp-shared">
            <div class="bp-shared-header">
                <p class="bp-shared-title">{"See what others shared"}</p>
                <p class="bp-shared-sub">
                    <strong>{ shared.completed_label }</strong>{" participants already completed"}
                </p>
            </div>
            <article class="bp-card">
                <div class="bp-pinned">
                    <Icon kind={IconKind::PushPin} />{" This is a pinned post"}
                </div>
                <PostProfile post={shared.pinned} />
                <div class="bp-shared-content">
                    { for shared.pinned.paragraphs.iter().map(|text| html! { <p>{ *text }</p> }) }
                </div>
            </article>
        </section>
    }
}
