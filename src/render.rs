//! `<meta>` element rendering

use crate::page::ImageRef;
use crate::tags::TagValue;

/// Wrap text in an HTML comment
pub fn comment(text: &str) -> String {
    format!("<!-- {} -->", text)
}

/// Render one key as zero or more `<meta>` lines.
///
/// Lists repeat the key once per element. An image with dimensions expands
/// into `key`, `key:width` and `key:height`. Only `"` is escaped in the
/// content attribute.
pub fn render(key: &str, value: &TagValue, as_property: bool) -> String {
    let mut out = String::new();
    render_into(&mut out, key, value, as_property);
    out
}

fn render_into(out: &mut String, key: &str, value: &TagValue, as_property: bool) {
    match value {
        TagValue::Text(text) => push_tag(out, key, text, as_property),
        TagValue::Image(ImageRef::Simple(url)) => push_tag(out, key, url, as_property),
        TagValue::Image(ImageRef::WithDimensions { url, width, height }) => {
            push_tag(out, key, url, as_property);
            push_tag(out, &format!("{}:width", key), &width.to_string(), as_property);
            push_tag(out, &format!("{}:height", key), &height.to_string(), as_property);
        }
        TagValue::List(items) => {
            for item in items {
                render_into(out, key, item, as_property);
            }
        }
    }
}

fn push_tag(out: &mut String, key: &str, content: &str, as_property: bool) {
    let attr = if as_property { "property" } else { "name" };
    out.push_str(&format!(
        "<meta {}=\"{}\" content=\"{}\" />\n",
        attr,
        key,
        escape_quotes(content)
    ));
}

fn escape_quotes(content: &str) -> String {
    content.replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_name_and_property_attributes() {
        let text = TagValue::from("Hello");
        assert_eq!(
            render("title", &text, false),
            "<meta name=\"title\" content=\"Hello\" />\n"
        );
        assert_eq!(
            render("og:title", &text, true),
            "<meta property=\"og:title\" content=\"Hello\" />\n"
        );
    }

    #[test]
    fn test_quotes_are_escaped() {
        let out = render("title", &TagValue::from("Say \"quoted\""), false);
        assert!(out.contains("content=\"Say &quot;quoted&quot;\""));

        // The escaped attribute parses back to the original text
        let document = Html::parse_fragment(&out);
        let selector = Selector::parse("meta").unwrap();
        let meta = document.select(&selector).next().unwrap();
        assert_eq!(meta.value().attr("content"), Some("Say \"quoted\""));
    }

    #[test]
    fn test_image_with_dimensions_expands() {
        let image = TagValue::Image(ImageRef::WithDimensions {
            url: "https://example.com/a.jpg".to_string(),
            width: 1200,
            height: 630,
        });
        assert_eq!(
            render("og:image", &image, true),
            "<meta property=\"og:image\" content=\"https://example.com/a.jpg\" />\n\
             <meta property=\"og:image:width\" content=\"1200\" />\n\
             <meta property=\"og:image:height\" content=\"630\" />\n"
        );
    }

    #[test]
    fn test_list_repeats_key() {
        let list = TagValue::List(vec![
            TagValue::Image(ImageRef::Simple("https://example.com/1.jpg".to_string())),
            TagValue::from("https://example.com/2.jpg"),
        ]);
        let out = render("og:image", &list, true);

        let document = Html::parse_fragment(&out);
        let selector = Selector::parse(r#"meta[property="og:image"]"#).unwrap();
        let urls: Vec<_> = document
            .select(&selector)
            .filter_map(|el| el.value().attr("content"))
            .collect();
        assert_eq!(urls, vec!["https://example.com/1.jpg", "https://example.com/2.jpg"]);
    }
}
