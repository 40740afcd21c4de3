//! Missing tag detection

use crate::render::comment;
use crate::tags::TagMap;

/// List the required and recommended keys that have no value.
///
/// Required keys come first, then recommended keys, each in list order.
/// Every line is an HTML comment such as `<!-- Required: og:url -->`.
pub fn validate(required: &[&str], recommended: &[&str], tags: &TagMap) -> Vec<String> {
    let missing_required = required
        .iter()
        .filter(|key| !tags.has_value(key))
        .map(|key| comment(&format!("Required: {}", key)));

    let missing_recommended = recommended
        .iter()
        .filter(|key| !tags.has_value(key))
        .map(|key| comment(&format!("Recommended: {}", key)));

    missing_required.chain(missing_recommended).collect()
}
