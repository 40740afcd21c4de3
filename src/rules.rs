//! Required and recommended tag tables per channel

use crate::card::CardType;

/// Required/recommended key lists for one channel or card variant
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub required: &'static [&'static str],
    pub recommended: &'static [&'static str],
}

pub const GENERIC: RuleSet = RuleSet {
    required: &["title", "description"],
    recommended: &["keywords"],
};

pub const TWITTER_GLOBAL: RuleSet = RuleSet {
    required: &["twitter:card"],
    recommended: &[],
};

pub const OPEN_GRAPH: RuleSet = RuleSet {
    required: &["og:title", "og:type", "og:url"],
    recommended: &["og:image", "og:description", "og:site_name"],
};

const SUMMARY: RuleSet = RuleSet {
    required: &["twitter:title", "twitter:description"],
    recommended: &["twitter:image"],
};

const PLAYER: RuleSet = RuleSet {
    required: &[
        "twitter:player",
        "twitter:player:width",
        "twitter:player:height",
        "twitter:title",
        "twitter:description",
        "twitter:image",
    ],
    recommended: &[],
};

const GALLERY: RuleSet = RuleSet {
    required: &[
        "twitter:image0",
        "twitter:image1",
        "twitter:image2",
        "twitter:image3",
    ],
    recommended: &["twitter:title", "twitter:description"],
};

/// Rules specific to a Twitter Card variant
pub fn twitter_card(card: CardType) -> RuleSet {
    match card {
        CardType::Summary | CardType::SummaryLargeImage => SUMMARY,
        CardType::Player => PLAYER,
        CardType::Gallery => GALLERY,
    }
}

/// Twitter global rules followed by the card variant's own rules
pub fn twitter(card: CardType) -> (Vec<&'static str>, Vec<&'static str>) {
    let specific = twitter_card(card);
    let required = TWITTER_GLOBAL
        .required
        .iter()
        .chain(specific.required)
        .copied()
        .collect();
    let recommended = TWITTER_GLOBAL
        .recommended
        .iter()
        .chain(specific.recommended)
        .copied()
        .collect();
    (required, recommended)
}
