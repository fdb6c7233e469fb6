//! An in-memory DICOM data set.
//!
//! A [`DataSet`] is an ordered multi-map from [`Tag`] to [`Value`].
//! Entries are kept sorted by tag,
//! and entries sharing a tag are contiguous and kept in insertion order.
//! Each run of equal tags forms the multiplicity of one data element.

use crate::header::Tag;
use crate::value::Value;
use std::iter::FromIterator;

/// An ordered collection of tagged values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    entries: Vec<(Tag, Value)>,
}

impl DataSet {
    /// Create an empty data set.
    pub fn new() -> Self {
        DataSet::default()
    }

    /// Insert a value under the given tag,
    /// after any existing values of the same tag.
    ///
    /// Inserting in non-decreasing tag order appends at the end,
    /// which is what decoding does.
    /// Out of order insertions are placed at their sorted position.
    pub fn put(&mut self, tag: Tag, value: Value) {
        match self.entries.last() {
            Some((last, _)) if *last > tag => {
                let at = self.entries.partition_point(|(t, _)| *t <= tag);
                self.entries.insert(at, (tag, value));
            }
            _ => self.entries.push((tag, value)),
        }
    }

    fn range(&self, tag: Tag) -> &[(Tag, Value)] {
        let start = self.entries.partition_point(|(t, _)| *t < tag);
        let end = start + self.entries[start..].partition_point(|(t, _)| *t == tag);
        &self.entries[start..end]
    }

    /// Get the first value of the given tag.
    pub fn get_first(&self, tag: Tag) -> Option<&Value> {
        self.range(tag).first().map(|(_, v)| v)
    }

    /// Get all values of the given tag, in order.
    pub fn get_all(&self, tag: Tag) -> impl Iterator<Item = &Value> + '_ {
        self.range(tag).iter().map(|(_, v)| v)
    }

    /// Whether at least one value exists under the given tag.
    pub fn exists(&self, tag: Tag) -> bool {
        !self.range(tag).is_empty()
    }

    /// The multiplicity of the given tag.
    pub fn count(&self, tag: Tag) -> usize {
        self.range(tag).len()
    }

    /// Remove all values of the given tag,
    /// returning how many were removed.
    pub fn remove(&mut self, tag: Tag) -> usize {
        let start = self.entries.partition_point(|(t, _)| *t < tag);
        let end = start + self.entries[start..].partition_point(|(t, _)| *t == tag);
        self.entries.drain(start..end).count()
    }

    /// Iterate over all entries in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (Tag, &Value)> + '_ {
        self.entries.iter().map(|(t, v)| (*t, v))
    }

    /// Iterate over the elements of the data set,
    /// each being a tag and its run of values.
    pub fn groups(&self) -> Groups<'_> {
        Groups {
            rest: &self.entries,
        }
    }

    /// The total number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the data set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Iterator over the elements of a data set.
/// See [`DataSet::groups`].
#[derive(Debug, Clone)]
pub struct Groups<'a> {
    rest: &'a [(Tag, Value)],
}

/// The values of one element, in order.
#[derive(Debug, Clone, Copy)]
pub struct Group<'a> {
    entries: &'a [(Tag, Value)],
}

impl<'a> Group<'a> {
    /// The number of values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the group holds no values. Never true for groups
    /// produced by [`DataSet::groups`].
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first value.
    pub fn first(&self) -> Option<&'a Value> {
        self.entries.first().map(|(_, v)| v)
    }

    /// Iterate over the values.
    pub fn values(&self) -> impl Iterator<Item = &'a Value> + 'a {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<'a> Iterator for Groups<'a> {
    type Item = (Tag, Group<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let (tag, _) = self.rest.first()?;
        let tag = *tag;
        let len = self.rest.iter().take_while(|(t, _)| *t == tag).count();
        let (group, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some((tag, Group { entries: group }))
    }
}

impl FromIterator<(Tag, Value)> for DataSet {
    fn from_iter<I: IntoIterator<Item = (Tag, Value)>>(iter: I) -> Self {
        let mut dataset = DataSet::new();
        dataset.extend(iter);
        dataset
    }
}

impl Extend<(Tag, Value)> for DataSet {
    fn extend<I: IntoIterator<Item = (Tag, Value)>>(&mut self, iter: I) {
        for (tag, value) in iter {
            self.put(tag, value);
        }
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a (Tag, Value);
    type IntoIter = std::slice::Iter<'a, (Tag, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
