//! Page-level metadata
//!
//! `PageMetadata` accumulates everything known about one page. Setters are
//! plain assignments (last write wins) and rendering never mutates it, so a
//! value built per request can be rendered any number of times.

use log::warn;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::card::CardType;
use crate::compose;
use crate::error::{MetaError, Result};
use crate::request::RequestContext;
use crate::video::EmbedDescriptor;

pub const DEFAULT_VIDEO_WIDTH: u32 = 1920;
pub const DEFAULT_VIDEO_HEIGHT: u32 = 1080;

/// An image given either as a bare URL or with explicit dimensions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum ImageRef {
    Simple(String),
    WithDimensions { url: String, width: u32, height: u32 },
}

impl ImageRef {
    pub fn with_dimensions(url: impl Into<String>, width: u32, height: u32) -> Self {
        ImageRef::WithDimensions {
            url: url.into(),
            width,
            height,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            ImageRef::Simple(url) | ImageRef::WithDimensions { url, .. } => url,
        }
    }

    /// Build from `[url]` or `[url, width, height]`.
    ///
    /// Any other arity is an error rather than a silently broken tag.
    pub fn from_parts<S: AsRef<str>>(parts: &[S]) -> Result<Self> {
        match parts {
            [url] => Ok(ImageRef::Simple(url.as_ref().to_string())),
            [url, width, height] => Ok(ImageRef::with_dimensions(
                url.as_ref(),
                parse_dimension(width.as_ref())?,
                parse_dimension(height.as_ref())?,
            )),
            _ => Err(MetaError::ImageArity(parts.len())),
        }
    }
}

fn parse_dimension(raw: &str) -> Result<u32> {
    raw.trim()
        .parse()
        .map_err(|_| MetaError::ImageDimension(raw.to_string()))
}

impl From<&str> for ImageRef {
    fn from(url: &str) -> Self {
        ImageRef::Simple(url.to_string())
    }
}

impl From<String> for ImageRef {
    fn from(url: String) -> Self {
        ImageRef::Simple(url)
    }
}

impl TryFrom<Value> for ImageRef {
    type Error = MetaError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(url) => Ok(ImageRef::Simple(url)),
            Value::Array(items) => {
                let parts = items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => Ok(s),
                        Value::Number(n) => Ok(n.to_string()),
                        other => Err(MetaError::ImageShape(other.to_string())),
                    })
                    .collect::<Result<Vec<String>>>()?;
                ImageRef::from_parts(&parts)
            }
            other => Err(MetaError::ImageShape(other.to_string())),
        }
    }
}

/// Everything the caller knows about a page.
///
/// Deserializes from JSON with snake_case keys; every field is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageMetadata {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) keywords: Option<String>,
    /// OpenGraph object type, e.g. "website"
    #[serde(rename = "type")]
    pub(crate) og_type: Option<String>,
    pub(crate) site_name: Option<String>,
    pub(crate) image: Option<ImageRef>,
    pub(crate) twitter_cards_image: Option<ImageRef>,
    pub(crate) open_graph_image: Option<ImageRef>,
    pub(crate) images: Option<Vec<String>>,
    pub(crate) video: Option<String>,
    pub(crate) video_width: u32,
    pub(crate) video_height: u32,
    pub(crate) embed: Option<EmbedDescriptor>,
    pub(crate) url: Option<String>,
    pub(crate) twitter_site: Option<String>,
    pub(crate) twitter_creator: Option<String>,
    #[serde(deserialize_with = "lenient_card_type")]
    pub(crate) twitter_card_type: Option<CardType>,
    pub(crate) normal_enabled: bool,
    pub(crate) twitter_cards_enabled: bool,
    pub(crate) open_graph_enabled: bool,
    pub(crate) twitter_prefer_large_image: bool,
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            keywords: None,
            og_type: None,
            site_name: None,
            image: None,
            twitter_cards_image: None,
            open_graph_image: None,
            images: None,
            video: None,
            video_width: DEFAULT_VIDEO_WIDTH,
            video_height: DEFAULT_VIDEO_HEIGHT,
            embed: None,
            url: None,
            twitter_site: None,
            twitter_creator: None,
            twitter_card_type: None,
            normal_enabled: true,
            twitter_cards_enabled: true,
            open_graph_enabled: true,
            twitter_prefer_large_image: false,
        }
    }
}

/// Unknown card type names degrade to unset instead of failing the decode
fn lenient_card_type<'de, D>(deserializer: D) -> std::result::Result<Option<CardType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_card_override))
}

fn parse_card_override(name: &str) -> Option<CardType> {
    let card = CardType::parse(name);
    if card.is_none() {
        warn!("Ignoring unknown Twitter card type '{}'", name);
    }
    card
}

impl PageMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render all enabled channels.
    ///
    /// `request` is only consulted when no explicit URL was set.
    pub fn render(&self, request: Option<&RequestContext>) -> String {
        compose::compose(self, request)
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_keywords(&mut self, keywords: impl Into<String>) -> &mut Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// OpenGraph object type
    pub fn set_type(&mut self, og_type: impl Into<String>) -> &mut Self {
        self.og_type = Some(og_type.into());
        self
    }

    pub fn set_site_name(&mut self, site_name: impl Into<String>) -> &mut Self {
        self.site_name = Some(site_name.into());
        self
    }

    pub fn set_image(&mut self, image: impl Into<ImageRef>) -> &mut Self {
        self.image = Some(image.into());
        self
    }

    /// Twitter-only image; falls back to `image` when unset
    pub fn set_twitter_cards_image(&mut self, image: impl Into<ImageRef>) -> &mut Self {
        self.twitter_cards_image = Some(image.into());
        self
    }

    /// OpenGraph-only image; falls back to `image` when unset
    pub fn set_open_graph_image(&mut self, image: impl Into<ImageRef>) -> &mut Self {
        self.open_graph_image = Some(image.into());
        self
    }

    pub fn set_images<I, S>(&mut self, images: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = Some(images.into_iter().map(Into::into).collect());
        self
    }

    /// Raw provider video URL
    pub fn set_video(&mut self, video: impl Into<String>) -> &mut Self {
        self.video = Some(video.into());
        self
    }

    pub fn set_video_width(&mut self, width: u32) -> &mut Self {
        self.video_width = width;
        self
    }

    pub fn set_video_height(&mut self, height: u32) -> &mut Self {
        self.video_height = height;
        self
    }

    /// Use this embed instead of the one derived from `video`
    pub fn set_embed(&mut self, embed: EmbedDescriptor) -> &mut Self {
        self.embed = Some(embed);
        self
    }

    /// Canonical URL; when unset it is inferred from the request
    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    /// Username without the leading `@`
    pub fn set_twitter_site(&mut self, username: impl Into<String>) -> &mut Self {
        self.twitter_site = Some(username.into());
        self
    }

    /// Username without the leading `@`
    pub fn set_twitter_creator(&mut self, username: impl Into<String>) -> &mut Self {
        self.twitter_creator = Some(username.into());
        self
    }

    /// Force a card variant. Unknown names clear the override.
    pub fn set_twitter_card_type(&mut self, name: &str) -> &mut Self {
        self.twitter_card_type = parse_card_override(name);
        self
    }

    pub fn twitter_prefer_large_image(&mut self) -> &mut Self {
        self.twitter_prefer_large_image = true;
        self
    }

    pub fn twitter_prefer_small_image(&mut self) -> &mut Self {
        self.twitter_prefer_large_image = false;
        self
    }

    pub fn enable_normal(&mut self) -> &mut Self {
        self.normal_enabled = true;
        self
    }

    pub fn disable_normal(&mut self) -> &mut Self {
        self.normal_enabled = false;
        self
    }

    pub fn enable_twitter_cards(&mut self) -> &mut Self {
        self.twitter_cards_enabled = true;
        self
    }

    pub fn disable_twitter_cards(&mut self) -> &mut Self {
        self.twitter_cards_enabled = false;
        self
    }

    pub fn enable_open_graph(&mut self) -> &mut Self {
        self.open_graph_enabled = true;
        self
    }

    pub fn disable_open_graph(&mut self) -> &mut Self {
        self.open_graph_enabled = false;
        self
    }

    /// The explicit embed if set, else the one derived from `video`
    pub(crate) fn resolved_embed(&self) -> Option<EmbedDescriptor> {
        self.embed
            .clone()
            .or_else(|| crate::video::normalize(self.video.as_deref()))
    }
}
