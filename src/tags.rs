//! Channel tag mappings
//!
//! A channel is assembled into an ordered key -> value mapping before it is
//! validated and rendered. Keys keep the position of their first insertion,
//! so overwriting a value never reorders the output.

use crate::page::ImageRef;

/// Value of a single meta tag key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    Text(String),
    Image(ImageRef),
    /// Repeated tag with the same key, one per element
    List(Vec<TagValue>),
}

impl TagValue {
    /// Empty text, empty URLs and empty lists count as missing
    pub fn is_empty(&self) -> bool {
        match self {
            TagValue::Text(s) => s.is_empty(),
            TagValue::Image(image) => image.url().is_empty(),
            TagValue::List(items) => items.is_empty(),
        }
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        TagValue::Text(s)
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::Text(s.to_string())
    }
}

impl From<u32> for TagValue {
    fn from(n: u32) -> Self {
        TagValue::Text(n.to_string())
    }
}

impl From<ImageRef> for TagValue {
    fn from(image: ImageRef) -> Self {
        TagValue::Image(image)
    }
}

/// Insertion-ordered mapping of tag keys to optional values
#[derive(Debug, Clone, Default)]
pub struct TagMap {
    entries: Vec<(&'static str, Option<TagValue>)>,
}

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, keeping its slot if it was already present.
    /// `None` records the key with no value.
    pub fn set<V: Into<TagValue>>(&mut self, key: &'static str, value: Option<V>) {
        let value = value.map(Into::into);
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.entries.retain(|(k, _)| *k != key);
    }

    pub fn get(&self, key: &str) -> Option<&TagValue> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// True when `key` is set to a non-empty value
    pub fn has_value(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }

    /// Entries with a non-empty value, in insertion order
    pub fn non_empty(&self) -> impl Iterator<Item = (&'static str, &TagValue)> + '_ {
        self.entries.iter().filter_map(|(k, v)| match v {
            Some(value) if !value.is_empty() => Some((*k, value)),
            _ => None,
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }
}
