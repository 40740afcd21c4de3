//! Facebook OpenGraph tags

use super::{Channel, Inferred};
use crate::page::PageMetadata;
use crate::rules;
use crate::tags::{TagMap, TagValue};

const VIDEO_TYPE: &str = "application/x-shockwave-flash";

pub fn build_opengraph_channel(page: &PageMetadata, inferred: &Inferred) -> Channel {
    let mut tags = TagMap::new();
    tags.set("og:type", page.og_type.clone());
    tags.set("og:url", Some(inferred.url.as_str()));
    tags.set("og:site_name", page.site_name.clone());
    tags.set("og:title", page.title.clone());
    tags.set("og:description", page.description.clone());

    match page.images.as_ref().filter(|imgs| !imgs.is_empty()) {
        Some(images) => {
            let list = page
                .image
                .iter()
                .cloned()
                .map(TagValue::Image)
                .chain(images.iter().map(|url| TagValue::from(url.as_str())))
                .collect();
            tags.set("og:image", Some(TagValue::List(list)));
        }
        None => tags.set(
            "og:image",
            page.open_graph_image.clone().or_else(|| page.image.clone()),
        ),
    }

    if let Some(embed) = &inferred.embed {
        tags.set("og:video:type", Some(VIDEO_TYPE));
        tags.set("og:video:width", Some(page.video_width));
        tags.set("og:video:height", Some(page.video_height));
        tags.set("og:video", Some(embed.swf.as_str()));
        tags.set("og:video:secure_url", Some(embed.swf_secure.as_str()));
    }

    Channel {
        name: "FACEBOOK",
        required: rules::OPEN_GRAPH.required.to_vec(),
        recommended: rules::OPEN_GRAPH.recommended.to_vec(),
        tags,
        as_property: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::ImageRef;

    #[test]
    fn test_image_list_starts_with_main_image() {
        let mut page = PageMetadata::new();
        page.set_image(ImageRef::with_dimensions("https://example.com/main.jpg", 1200, 630))
            .set_open_graph_image("https://example.com/ignored.jpg")
            .set_images((1..=5).map(|i| format!("https://example.com/{}.jpg", i)));

        let channel = build_opengraph_channel(&page, &Inferred::from_page(&page, None));
        match channel.tags.get("og:image") {
            Some(TagValue::List(items)) => {
                assert_eq!(items.len(), 6);
                assert_eq!(
                    items[0],
                    TagValue::Image(ImageRef::with_dimensions(
                        "https://example.com/main.jpg",
                        1200,
                        630
                    ))
                );
                assert_eq!(items[5], TagValue::from("https://example.com/5.jpg"));
            }
            other => panic!("expected image list, got {:?}", other),
        }
    }

    #[test]
    fn test_open_graph_image_fallback() {
        let mut page = PageMetadata::new();
        page.set_image("https://example.com/main.jpg");
        let channel = build_opengraph_channel(&page, &Inferred::from_page(&page, None));
        assert_eq!(
            channel.tags.get("og:image"),
            Some(&TagValue::Image(ImageRef::from("https://example.com/main.jpg")))
        );

        page.set_open_graph_image("https://example.com/og.jpg");
        let channel = build_opengraph_channel(&page, &Inferred::from_page(&page, None));
        assert_eq!(
            channel.tags.get("og:image"),
            Some(&TagValue::Image(ImageRef::from("https://example.com/og.jpg")))
        );
    }

    #[test]
    fn test_video_tags() {
        let mut page = PageMetadata::new();
        page.set_video("https://vimeo.com/76979871").set_video_height(720);

        let channel = build_opengraph_channel(&page, &Inferred::from_page(&page, None));
        let tags = &channel.tags;
        assert_eq!(tags.get("og:video:type"), Some(&TagValue::from(VIDEO_TYPE)));
        assert_eq!(tags.get("og:video:width"), Some(&TagValue::from("1920")));
        assert_eq!(tags.get("og:video:height"), Some(&TagValue::from("720")));
        assert_eq!(
            tags.get("og:video"),
            Some(&TagValue::from("http://vimeo.com/moogaloop.swf?clip_id=76979871"))
        );
        assert_eq!(
            tags.get("og:video:secure_url"),
            Some(&TagValue::from("https://vimeo.com/moogaloop.swf?clip_id=76979871"))
        );
    }

    #[test]
    fn test_unknown_video_adds_nothing() {
        let mut page = PageMetadata::new();
        page.set_video("https://example.com/video.mp4");
        let channel = build_opengraph_channel(&page, &Inferred::from_page(&page, None));
        assert!(channel.tags.get("og:video").is_none());
        assert!(channel.as_property);
    }
}
