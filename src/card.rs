//! Twitter Card variants and card type inference

use serde::{Deserialize, Serialize};

use crate::video::EmbedDescriptor;

/// Twitter Card variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Summary,
    SummaryLargeImage,
    Player,
    Gallery,
}

impl CardType {
    pub fn as_str(self) -> &'static str {
        match self {
            CardType::Summary => "summary",
            CardType::SummaryLargeImage => "summary_large_image",
            CardType::Player => "player",
            CardType::Gallery => "gallery",
        }
    }

    /// Parse a card type name; anything unknown is `None`
    pub fn parse(name: &str) -> Option<CardType> {
        match name {
            "summary" => Some(CardType::Summary),
            "summary_large_image" => Some(CardType::SummaryLargeImage),
            "player" => Some(CardType::Player),
            "gallery" => Some(CardType::Gallery),
            _ => None,
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the card variant for a page.
///
/// An explicit override always wins. Otherwise a playable video selects
/// `player`, exactly four images select `gallery`, and everything else is
/// a summary card sized by `prefer_large`.
pub fn resolve(
    explicit: Option<CardType>,
    video: Option<&EmbedDescriptor>,
    images: Option<&[String]>,
    prefer_large: bool,
) -> CardType {
    if let Some(card) = explicit {
        return card;
    }
    if video.is_some() {
        return CardType::Player;
    }
    if images.is_some_and(|imgs| imgs.len() == 4) {
        return CardType::Gallery;
    }
    if prefer_large {
        CardType::SummaryLargeImage
    } else {
        CardType::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::normalize;

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://example.com/{}.jpg", i)).collect()
    }

    #[test]
    fn test_explicit_override_beats_video_and_gallery() {
        let video = normalize(Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        let four = images(4);
        let card = resolve(
            Some(CardType::Summary),
            video.as_ref(),
            Some(four.as_slice()),
            true,
        );
        assert_eq!(card, CardType::Summary);
    }

    #[test]
    fn test_video_selects_player() {
        let video = normalize(Some("https://vimeo.com/76979871"));
        let four = images(4);
        assert_eq!(
            resolve(None, video.as_ref(), Some(four.as_slice()), false),
            CardType::Player
        );
    }

    #[test]
    fn test_gallery_needs_exactly_four_images() {
        assert_eq!(
            resolve(None, None, Some(images(4).as_slice()), false),
            CardType::Gallery
        );
        for n in [0, 3, 5] {
            assert_eq!(resolve(None, None, Some(images(n).as_slice()), false), CardType::Summary);
            assert_eq!(
                resolve(None, None, Some(images(n).as_slice()), true),
                CardType::SummaryLargeImage
            );
        }
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(CardType::parse("player"), Some(CardType::Player));
        assert_eq!(CardType::parse("app"), None);
        assert_eq!(CardType::parse("Summary"), None);
    }
}
