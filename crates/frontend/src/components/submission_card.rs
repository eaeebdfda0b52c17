//! The user's own submission card.

use challenge_core::content::SUBMISSION;
use yew::prelude::*;

use crate::components::{Icon, IconKind, PostProfile};

/// "Your Submission" card.
#[function_component(SubmissionCard)]
pub fn submission_card() -> Html {
    let submission = SUBMISSION;

    html! {
        <section class="bp-submission-wrap">
            <div class="bp-submission-head">{"Your Submission"}</div>
            <article class="bp-card">
                <PostProfile post={submission.post} />
                { for submission.post.paragraphs.iter().map(|text| html! {
                    <p class="bp-text">{ *text }</p>
                })}
                <div class="bp-media">
                    <img alt="Workout media" src={submission.media_url} />
                    <button class="bp-play" type="button" aria-label="Play">
                        <Icon kind={IconKind::Play} />
                    </button>
                </div>
                <div class="bp-reaction-row">
                    <div class="bp-reactions">
                        <span class="bp-reaction-pill">{ submission.reaction_label() }</span>
                        <button class="bp-circle-btn" type="button" aria-label="React">
                            <Icon kind={IconKind::Smiley} />
                        </button>
                        <button class="bp-circle-btn" type="button" aria-label="Comment">
                            <Icon kind={IconKind::ChatCircle} />
                        </button>
                    </div>
                    <p>{ submission.comment_label() }</p>
                </div>
            </article>
        </section>
    }
}
