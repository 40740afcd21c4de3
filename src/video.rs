//! Video URL normalization
//!
//! Turns a raw YouTube or Vimeo link into the embeddable player URL and the
//! legacy flash URLs that OpenGraph crawlers expect. Pure pattern matching,
//! the URL is never fetched.

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const YOUTUBE_URL_PATTERN: &str = r#"(?i)(?:youtube(?:-nocookie)?\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/ ]{11})"#;
const VIMEO_URL_PATTERN: &str = r"(?i)https?://.*vimeo\.com/(?:\w*/)*(\d+)";

fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static YOUTUBE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(YOUTUBE_URL_PATTERN, "YOUTUBE_RE"));
static VIMEO_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(VIMEO_URL_PATTERN, "VIMEO_RE"));

/// Playable representation of a provider video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedDescriptor {
    /// HTTPS player URL suitable for an iframe
    pub frame: String,
    /// Legacy flash player URL, plain scheme
    pub swf: String,
    /// Legacy flash player URL, secure scheme
    pub swf_secure: String,
}

impl EmbedDescriptor {
    fn youtube(id: &str) -> Self {
        Self {
            frame: format!("https://www.youtube.com/embed/{}", id),
            swf: format!("http://www.youtube.com/v/{}?autohide=1&amp;version=3", id),
            swf_secure: format!("https://www.youtube.com/v/{}?autohide=1&amp;version=3", id),
        }
    }

    fn vimeo(id: &str) -> Self {
        Self {
            frame: format!("https://player.vimeo.com/video/{}", id),
            swf: format!("http://vimeo.com/moogaloop.swf?clip_id={}", id),
            swf_secure: format!("https://vimeo.com/moogaloop.swf?clip_id={}", id),
        }
    }
}

/// Match a raw video URL against the known providers.
///
/// Returns `None` for a missing URL or one that matches no provider.
pub fn normalize(raw: Option<&str>) -> Option<EmbedDescriptor> {
    let raw = raw?;

    if let Some(id) = YOUTUBE_RE.captures(raw).and_then(|c| c.get(1)) {
        debug!("Matched YouTube video {} in {}", id.as_str(), raw);
        return Some(EmbedDescriptor::youtube(id.as_str()));
    }

    if let Some(id) = VIMEO_RE.captures(raw).and_then(|c| c.get(1)) {
        debug!("Matched Vimeo video {} in {}", id.as_str(), raw);
        return Some(EmbedDescriptor::vimeo(id.as_str()));
    }

    debug!("No known video provider for {}", raw);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_watch_url() {
        let embed = normalize(Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")).unwrap();
        assert_eq!(embed.frame, "https://www.youtube.com/embed/dQw4w9WgXcQ");
        assert_eq!(
            embed.swf,
            "http://www.youtube.com/v/dQw4w9WgXcQ?autohide=1&amp;version=3"
        );
        assert_eq!(
            embed.swf_secure,
            "https://www.youtube.com/v/dQw4w9WgXcQ?autohide=1&amp;version=3"
        );
    }

    #[test]
    fn test_youtube_url_shapes() {
        let urls = [
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "http://www.youtube.com/v/dQw4w9WgXcQ?version=3",
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "HTTPS://WWW.YOUTUBE.COM/watch?v=dQw4w9WgXcQ",
        ];
        for url in urls {
            let embed = normalize(Some(url)).unwrap_or_else(|| panic!("no match for {}", url));
            assert_eq!(embed.frame, "https://www.youtube.com/embed/dQw4w9WgXcQ", "{}", url);
        }
    }

    #[test]
    fn test_youtube_id_stops_at_delimiter() {
        let embed = normalize(Some("https://youtu.be/dQw4w9WgXcQ?t=42")).unwrap();
        assert_eq!(embed.frame, "https://www.youtube.com/embed/dQw4w9WgXcQ");

        // Shorter than 11 characters before the delimiter
        assert!(normalize(Some("https://youtu.be/abc?t=42")).is_none());
    }

    #[test]
    fn test_vimeo_urls() {
        let embed = normalize(Some("https://vimeo.com/76979871")).unwrap();
        assert_eq!(embed.frame, "https://player.vimeo.com/video/76979871");
        assert!(embed.swf.contains("clip_id=76979871"));
        assert_eq!(embed.swf, "http://vimeo.com/moogaloop.swf?clip_id=76979871");
        assert_eq!(
            embed.swf_secure,
            "https://vimeo.com/moogaloop.swf?clip_id=76979871"
        );

        let embed = normalize(Some("https://vimeo.com/channels/staffpicks/76979871")).unwrap();
        assert_eq!(embed.frame, "https://player.vimeo.com/video/76979871");
    }

    #[test]
    fn test_unknown_urls() {
        assert!(normalize(None).is_none());
        assert!(normalize(Some("")).is_none());
        assert!(normalize(Some("https://example.com/video.mp4")).is_none());
        // Vimeo needs an explicit scheme
        assert!(normalize(Some("vimeo.com/76979871")).is_none());
    }
}
