//! Page components.

mod challenge_feed;

pub use challenge_feed::ChallengeFeedPage;
