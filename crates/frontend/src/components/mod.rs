//! Reusable UI components.

mod dismiss;
mod drawer;
mod header;
mod icon;
mod post_profile;
mod shared_posts;
mod sidebar;
mod submission_card;

pub use drawer::Drawer;
pub use header::Header;
pub use icon::{Icon, IconKind};
pub use post_profile::PostProfile;
pub use shared_posts::SharedPosts;
pub use sidebar::Sidebar;
pub use submission_card::SubmissionCard;
