//! Inline glyph icons.

use challenge_core::DayIcon;
use yew::prelude::*;

/// Icons used across the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Bell,
    CaretLeft,
    ChatCircle,
    CheckCircle,
    Circle,
    DotsThree,
    Info,
    Lock,
    Moon,
    Play,
    PushPin,
    SignOut,
    Smiley,
    Sun,
    Close,
}

impl IconKind {
    fn glyph(self) -> &'static str {
        match self {
            IconKind::Bell => "🔔",
            IconKind::CaretLeft => "‹",
            IconKind::ChatCircle => "💬",
            IconKind::CheckCircle => "✔",
            IconKind::Circle => "○",
            IconKind::DotsThree => "⋯",
            IconKind::Info => "ⓘ",
            IconKind::Lock => "🔒",
            IconKind::Moon => "☾",
            IconKind::Play => "▶",
            IconKind::PushPin => "📌",
            IconKind::SignOut => "⇥",
            IconKind::Smiley => "☺",
            IconKind::Sun => "☀",
            IconKind::Close => "✕",
        }
    }

    fn class_name(self) -> &'static str {
        match self {
            IconKind::Bell => "bp-glyph-bell",
            IconKind::CaretLeft => "bp-glyph-caret-left",
            IconKind::ChatCircle => "bp-glyph-chat",
            IconKind::CheckCircle => "bp-glyph-check",
            IconKind::Circle => "bp-glyph-circle",
            IconKind::DotsThree => "bp-glyph-dots",
            IconKind::Info => "bp-glyph-info",
            IconKind::Lock => "bp-glyph-lock",
            IconKind::Moon => "bp-glyph-moon",
            IconKind::Play => "bp-glyph-play",
            IconKind::PushPin => "bp-glyph-pin",
            IconKind::SignOut => "bp-glyph-sign-out",
            IconKind::Smiley => "bp-glyph-smiley",
            IconKind::Sun => "bp-glyph-sun",
            IconKind::Close => "bp-glyph-close",
        }
    }
}

impl From<DayIcon> for IconKind {
    fn from(icon: DayIcon) -> Self {
        match icon {
            DayIcon::Lock => IconKind::Lock,
            DayIcon::Check => IconKind::CheckCircle,
            DayIcon::Circle => IconKind::Circle,
        }
    }
}

/// Properties for Icon component.
#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
}

/// Decorative glyph icon.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <span class={classes!("bp-glyph", props.kind.class_name())} aria-hidden="true">
            { props.kind.glyph() }
        </span>
    }
}
