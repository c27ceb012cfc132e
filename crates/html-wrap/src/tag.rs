//! The fixed tag vocabulary understood by the renderer.

use crate::error::Error;

/// Heading level, always within 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index for per-level lookup tables.
    pub fn index(self) -> usize {
        usize::from(self.0 - Self::MIN)
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(Error::InvalidHeadingLevel(level))
        }
    }
}

/// A recognized tag. Matching is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Paragraph,
    ParagraphEnd,
    LineBreak,
    Pre,
    PreEnd,
    Bold,
    BoldEnd,
    Italic,
    ItalicEnd,
    Quote,
    QuoteEnd,
    HorizontalRule,
    Heading(HeadingLevel),
    HeadingEnd(HeadingLevel),
}

impl Tag {
    /// Parse the full text of a tag token, e.g. `<H2>`.
    pub fn parse(text: &str) -> Option<Self> {
        let name = text.strip_prefix('<')?.strip_suffix('>')?;
        let (closing, name) = match name.strip_prefix('/') {
            Some(name) => (true, name),
            None => (false, name),
        };

        let tag = match (name.to_ascii_lowercase().as_str(), closing) {
            ("p", false) => Tag::Paragraph,
            ("p", true) => Tag::ParagraphEnd,
            ("br", false) => Tag::LineBreak,
            ("pre", false) => Tag::Pre,
            ("pre", true) => Tag::PreEnd,
            ("b", false) => Tag::Bold,
            ("b", true) => Tag::BoldEnd,
            ("i", false) => Tag::Italic,
            ("i", true) => Tag::ItalicEnd,
            ("q", false) => Tag::Quote,
            ("q", true) => Tag::QuoteEnd,
            ("hr", false) => Tag::HorizontalRule,
            (heading, closing) => {
                let level = heading_level(heading)?;
                if closing {
                    Tag::HeadingEnd(level)
                } else {
                    Tag::Heading(level)
                }
            }
        };

        Some(tag)
    }
}

/// `h1`..`h6` to a level.
fn heading_level(name: &str) -> Option<HeadingLevel> {
    let digits = name.strip_prefix('h')?;
    if digits.len() != 1 {
        return None;
    }
    digits.parse::<u8>().ok()?.try_into().ok()
}
