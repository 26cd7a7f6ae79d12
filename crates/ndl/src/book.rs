use std::collections::{btree_map, BTreeMap, BTreeSet};

use serde::Serialize;

use crate::label::FieldEntry;

/// Bibliographic information of a single book as `label → distinct values`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BookInfo {
    fields: BTreeMap<String, BTreeSet<String>>,
}

impl BookInfo {
    /// Creates an empty [`BookInfo`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the entry's value under its label.
    ///
    /// Returns `false` when the label already held this exact value.
    pub fn insert(&mut self, entry: FieldEntry) -> bool {
        let FieldEntry { label, value } = entry;
        self.fields.entry(label).or_default().insert(value)
    }

    /// Values found for `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&BTreeSet<String>> {
        self.fields.get(label)
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// `true` when no fragment of the page matched a known label.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates labels with their values.
    #[must_use]
    pub fn iter(&self) -> btree_map::Iter<'_, String, BTreeSet<String>> {
        self.fields.iter()
    }
}

impl Extend<FieldEntry> for BookInfo {
    fn extend<T: IntoIterator<Item = FieldEntry>>(&mut self, iter: T) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl FromIterator<FieldEntry> for BookInfo {
    fn from_iter<T: IntoIterator<Item = FieldEntry>>(iter: T) -> Self {
        let mut info = Self::new();
        info.extend(iter);
        info
    }
}

impl<'a> IntoIterator for &'a BookInfo {
    type Item = (&'a String, &'a BTreeSet<String>);
    type IntoIter = btree_map::Iter<'a, String, BTreeSet<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
