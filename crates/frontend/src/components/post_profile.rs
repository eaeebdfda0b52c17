//! Author row shared by feed cards.

use challenge_core::content::Post;
use yew::prelude::*;

use crate::components::{Icon, IconKind};

/// Properties for PostProfile component.
#[derive(Properties, PartialEq)]
pub struct PostProfileProps {
    pub post: Post,
}

/// Avatar, name, post age and the overflow button.
#[function_component(PostProfile)]
pub fn post_profile(props: &PostProfileProps) -> Html {
    let post = props.post;

    html! {
        <div class="bp-card-profile">
            <img alt={post.author} class="bp-avatar" src={post.avatar} />
            <div class="bp-profile-meta">
                <p class="bp-name">{ post.author }</p>
                <p class="bp-time">{ post.posted }</p>
            </div>
            <button class="bp-more" type="button" aria-label="More options">
                <Icon kind={IconKind::DotsThree} />
            </button>
        </div>
    }
}
