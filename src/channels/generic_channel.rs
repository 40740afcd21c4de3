//! Plain SEO tags

use super::Channel;
use crate::page::PageMetadata;
use crate::rules;
use crate::tags::TagMap;

pub fn build_generic_channel(page: &PageMetadata) -> Channel {
    let mut tags = TagMap::new();
    tags.set("title", page.title.clone());
    tags.set("description", page.description.clone());
    tags.set("keywords", page.keywords.clone());

    Channel {
        name: "NORMAL",
        required: rules::GENERIC.required.to_vec(),
        recommended: rules::GENERIC.recommended.to_vec(),
        tags,
        as_property: false,
    }
}
