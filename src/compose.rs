//! Composition of the final `<head>` markup

use log::debug;

use crate::channels::{
    build_generic_channel, build_opengraph_channel, build_twitter_channel, Channel, Inferred,
};
use crate::page::PageMetadata;
use crate::render::{comment, render};
use crate::request::RequestContext;
use crate::validate::validate;

/// Render every enabled channel in order: generic, Twitter, OpenGraph.
///
/// A disabled channel contributes nothing, not even its header.
pub fn compose(page: &PageMetadata, request: Option<&RequestContext>) -> String {
    let inferred = Inferred::from_page(page, request);
    let mut out = String::new();

    if page.normal_enabled {
        out.push_str(&render_channel(&build_generic_channel(page)));
    }
    if page.twitter_cards_enabled {
        out.push_str(&render_channel(&build_twitter_channel(page, &inferred)));
    }
    if page.open_graph_enabled {
        out.push_str(&render_channel(&build_opengraph_channel(page, &inferred)));
    }

    out
}

/// Header comment, then missing-tag warnings, then the tags themselves
pub fn render_channel(channel: &Channel) -> String {
    let warnings = validate(&channel.required, &channel.recommended, &channel.tags);
    if !warnings.is_empty() {
        debug!("{} channel is missing {} tag(s)", channel.name, warnings.len());
    }

    let mut out = String::from("\n");
    out.push_str(&comment(channel.name));
    out.push('\n');
    for warning in &warnings {
        out.push_str(warning);
        out.push('\n');
    }
    for (key, value) in channel.tags.non_empty() {
        out.push_str(&render(key, value, channel.as_property));
    }
    out
}
