//! Category tag colors

use owo_colors::AnsiColors;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    Blue,
    Green,
    Yellow,
    Purple,
    Pink,
    Red,
    Teal,
    Orange,
    Indigo,
    Gray,
}

impl TagColor {
    pub fn ansi(self) -> AnsiColors {
        match self {
            TagColor::Blue => AnsiColors::Blue,
            TagColor::Green => AnsiColors::Green,
            TagColor::Yellow => AnsiColors::Yellow,
            TagColor::Purple => AnsiColors::Magenta,
            TagColor::Pink => AnsiColors::BrightMagenta,
            TagColor::Red => AnsiColors::Red,
            TagColor::Teal => AnsiColors::Cyan,
            TagColor::Orange => AnsiColors::BrightYellow,
            TagColor::Indigo => AnsiColors::BrightBlue,
            TagColor::Gray => AnsiColors::BrightBlack,
        }
    }
}

/// Color used for categories missing from [`TAG_COLORS`]
pub const DEFAULT_TAG_COLOR: TagColor = TagColor::Gray;

pub const TAG_COLORS: &[(&str, TagColor)] = &[
    ("technology", TagColor::Blue),
    ("health", TagColor::Green),
    ("healthcare", TagColor::Green),
    ("education", TagColor::Yellow),
    ("finance", TagColor::Purple),
    ("fintech", TagColor::Purple),
    ("social", TagColor::Pink),
    ("entertainment", TagColor::Red),
    ("environment", TagColor::Teal),
    ("agriculture", TagColor::Orange),
    ("ai", TagColor::Indigo),
];

/// Look up the tag color for a category, ignoring case
pub fn tag_color(category: &str) -> TagColor {
    TAG_COLORS
        .iter()
        .find(|(name, _)| unicase::eq(*name, category))
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_TAG_COLOR)
}
