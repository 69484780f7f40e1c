use std::collections::{btree_map, BTreeMap};

/// A single value stored in a [`TagDocument`].
#[derive(Clone, Debug, PartialEq)]
pub enum TagValue {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    Compound(TagDocument),
}

impl TagValue {
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            TagValue::Byte(_)
                | TagValue::Short(_)
                | TagValue::Int(_)
                | TagValue::Long(_)
                | TagValue::Float(_)
                | TagValue::Double(_)
        )
    }

    /// Numeric value narrowed to an i32, the same way the persistent format
    /// narrows on read. Non-numeric values yield `None`.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            TagValue::Byte(value) => Some(*value as i32),
            TagValue::Short(value) => Some(*value as i32),
            TagValue::Int(value) => Some(*value),
            TagValue::Long(value) => Some(*value as i32),
            TagValue::Float(value) => Some(*value as i32),
            TagValue::Double(value) => Some(*value as i32),
            TagValue::String(_) | TagValue::Compound(_) => None,
        }
    }
}

/// An ordered map of named tagged values attached to an item.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TagDocument {
    entries: BTreeMap<String, TagValue>,
}

impl TagDocument {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn contains_numeric(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .map(TagValue::is_numeric)
            .unwrap_or(false)
    }

    pub fn get(&self, key: &str) -> Option<&TagValue> {
        self.entries.get(key)
    }

    pub fn get_int(&self, key: &str) -> Option<i32> {
        self.entries.get(key).and_then(TagValue::as_int)
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(TagValue::String(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn compound(&self, key: &str) -> Option<&TagDocument> {
        match self.entries.get(key) {
            Some(TagValue::Compound(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the compound stored under `key`, replacing any non-compound
    /// value with a fresh empty compound.
    pub fn compound_mut(&mut self, key: &str) -> &mut TagDocument {
        let entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| TagValue::Compound(TagDocument::new()));
        if !matches!(entry, TagValue::Compound(_)) {
            *entry = TagValue::Compound(TagDocument::new());
        }
        let TagValue::Compound(document) = entry else {
            unreachable!("entry was just made a compound");
        };
        document
    }

    pub fn put(&mut self, key: &str, value: TagValue) -> Option<TagValue> {
        self.entries.insert(key.to_string(), value)
    }

    pub fn put_int(&mut self, key: &str, value: i32) {
        self.entries.insert(key.to_string(), TagValue::Int(value));
    }

    pub fn put_string(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.to_string(), TagValue::String(value.to_string()));
    }

    pub fn remove(&mut self, key: &str) -> Option<TagValue> {
        self.entries.remove(key)
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, TagValue> {
        self.entries.keys()
    }
}
