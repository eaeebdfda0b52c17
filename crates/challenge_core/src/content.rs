//! Static copy and asset paths rendered on the challenge feed.

use crate::day_track::MAX_DAY;

/// Avatar of the signed-in user.
pub const AVATAR_PATH: &str = "/avatar.svg";

/// Headline of the challenge.
pub const CHALLENGE_TITLE: &str = "9-Day Fitness Challenge";

/// Current check-in streak shown in the header pill.
pub const STREAK_DAYS: u32 = 30;

/// A post rendered as a feed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Post {
    pub author: &'static str,
    pub avatar: &'static str,
    pub posted: &'static str,
    pub paragraphs: &'static [&'static str],
}

/// The user's own submission for the selected day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub post: Post,
    pub media_url: &'static str,
    pub reactions: &'static str,
    pub reaction_count: u32,
    pub comment_count: u32,
}

/// The pinned post heading the "others shared" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharedSection {
    pub completed_label: &'static str,
    pub pinned: Post,
}

/// Contents of the challenge description drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeDescription {
    pub cover_url: &'static str,
    pub total_checkins: u32,
    pub participants_joined: u32,
    pub description: &'static str,
}

pub const SUBMISSION: Submission = Submission {
    post: Post {
        author: "Ashraf Idrishi",
        avatar: AVATAR_PATH,
        posted: "1d",
        paragraphs: &["Today's challenge workout completed-feeling stronger already"],
    },
    media_url: "https://images.unsplash.com/photo-1599058917212-d750089bc07e?auto=format&fit=crop&w=1280&q=80",
    reactions: "🙏 😍",
    reaction_count: 18,
    comment_count: 10,
};

pub const SHARED: SharedSection = SharedSection {
    completed_label: "85+",
    pinned: Post {
        author: "Russell Brunson",
        avatar: "https://images.unsplash.com/photo-1506277886164-e25aa3f4ef7f?auto=format&fit=crop&w=96&q=80",
        posted: "3 hrs ago",
        paragraphs: &[
            "This 9-day fitness challenge is designed to help you build consistency, boost energy, \
             and feel stronger-one day at a time. Each day comes with a simple, achievable fitness \
             task that fits easily into your routine, no matter your current fitness level.",
            "1️⃣ Minimum 20 minutes of sit-up",
            "2️⃣ Mention Intensity",
            "3️⃣ Upload Media (Optional)",
        ],
    },
};

pub const DESCRIPTION: ChallengeDescription = ChallengeDescription {
    cover_url: "https://images.unsplash.com/photo-1576678927484-cc907957088c?auto=format&fit=crop&w=1200&q=80",
    total_checkins: MAX_DAY as u32,
    participants_joined: 75,
    description: "This 9-day challenge is designed to help you build the habit of showing up every \
                  day. You'll complete one small, focused action daily-without overwhelm-to build \
                  clarity and confidence, and to prove that consistency, not motivation, is what \
                  drives real and lasting progress.",
};

impl Submission {
    /// Reaction pill text, e.g. `"🙏 😍 18"`.
    pub fn reaction_label(&self) -> String {
        format!("{} {}", self.reactions, self.reaction_count)
    }

    pub fn comment_label(&self) -> String {
        match self.comment_count {
            1 => "1 Comment".to_string(),
            n => format!("{n} Comments"),
        }
    }
}
