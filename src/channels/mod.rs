//! Per-channel tag assembly
//!
//! Each module builds the key -> value mapping for one tag family along
//! with the rules it is validated against.

mod generic_channel;
mod opengraph_channel;
mod twitter_channel;

pub use generic_channel::*;
pub use opengraph_channel::*;
pub use twitter_channel::*;

use crate::page::PageMetadata;
use crate::request::{infer_url, RequestContext};
use crate::tags::TagMap;
use crate::video::EmbedDescriptor;

/// A channel ready for validation and rendering
#[derive(Debug, Clone)]
pub struct Channel {
    /// Header comment text, e.g. "TWITTER"
    pub name: &'static str,
    pub required: Vec<&'static str>,
    pub recommended: Vec<&'static str>,
    pub tags: TagMap,
    /// Render with `property=` instead of `name=`
    pub as_property: bool,
}

/// Values inferred once per render and shared by every channel
#[derive(Debug, Clone)]
pub struct Inferred {
    pub url: String,
    pub embed: Option<EmbedDescriptor>,
}

impl Inferred {
    pub fn from_page(page: &PageMetadata, request: Option<&RequestContext>) -> Self {
        Self {
            url: infer_url(page.url.as_deref(), request),
            embed: page.resolved_embed(),
        }
    }
}
