//! Meta tag composer for search engines and social crawlers
//!
//! Builds the `<head>` tags for a page from its metadata:
//! - Plain SEO tags (title, description, keywords)
//! - Twitter Cards, inferring the card type when not forced
//! - Facebook OpenGraph, including YouTube/Vimeo video embeds
//!
//! Missing required or recommended tags are reported as HTML comments in
//! the output; rendering itself never fails.

pub mod card;
pub mod channels;
pub mod compose;
pub mod error;
pub mod ffi;
pub mod page;
pub mod render;
pub mod request;
pub mod rules;
pub mod tags;
pub mod validate;
pub mod video;

pub use card::CardType;
pub use compose::compose;
pub use error::{MetaError, Result};
pub use ffi::*;
pub use page::{ImageRef, PageMetadata};
pub use request::{RequestContext, Scheme};
pub use video::EmbedDescriptor;
