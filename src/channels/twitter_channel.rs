//! Twitter Card tags

use log::debug;

use super::{Channel, Inferred};
use crate::card::{self, CardType};
use crate::page::{ImageRef, PageMetadata};
use crate::rules;
use crate::tags::TagMap;

const GALLERY_KEYS: [&str; 4] = [
    "twitter:image0",
    "twitter:image1",
    "twitter:image2",
    "twitter:image3",
];

pub fn build_twitter_channel(page: &PageMetadata, inferred: &Inferred) -> Channel {
    let card = card::resolve(
        page.twitter_card_type,
        inferred.embed.as_ref(),
        page.images.as_deref(),
        page.twitter_prefer_large_image,
    );
    debug!("Resolved Twitter card type {}", card);

    let mut tags = TagMap::new();
    tags.set("twitter:card", Some(card.as_str()));
    tags.set("twitter:title", page.title.clone());
    tags.set("twitter:description", page.description.clone());
    tags.set("twitter:url", Some(inferred.url.as_str()));

    match page.twitter_cards_image.as_ref().or(page.image.as_ref()) {
        Some(ImageRef::WithDimensions { url, width, height }) => {
            tags.set("twitter:image", Some(url.as_str()));
            tags.set("twitter:image:width", Some(*width));
            tags.set("twitter:image:height", Some(*height));
        }
        Some(ImageRef::Simple(url)) => tags.set("twitter:image", Some(url.as_str())),
        None => tags.set("twitter:image", None::<String>),
    }

    match card {
        CardType::Player => {
            tags.set("twitter:player:width", Some(page.video_width));
            tags.set("twitter:player:height", Some(page.video_height));
            tags.set(
                "twitter:player",
                inferred.embed.as_ref().map(|e| e.frame.as_str()),
            );
        }
        CardType::Gallery => {
            // The single image only gives way when the four gallery images exist
            if let Some(images) = page.images.as_ref().filter(|imgs| imgs.len() == 4) {
                for (key, image) in GALLERY_KEYS.iter().zip(images) {
                    tags.set(*key, Some(image.as_str()));
                }
                tags.remove("twitter:image");
            }
        }
        CardType::Summary | CardType::SummaryLargeImage => {}
    }

    tags.set("twitter:site", format_username(page.twitter_site.as_deref()));
    tags.set(
        "twitter:creator",
        format_username(page.twitter_creator.as_deref()),
    );

    let (required, recommended) = rules::twitter(card);
    Channel {
        name: "TWITTER",
        required,
        recommended,
        tags,
        as_property: false,
    }
}

fn format_username(name: Option<&str>) -> Option<String> {
    name.filter(|n| !n.is_empty()).map(|n| format!("@{}", n))
}
