use std::{ops::Index, slice};

use super::IterationRecord;

/// Ordered history of a quadratic fit search.
///
/// Index 0 is the seed record; index `k` is the state after step `k`.
/// A trace always holds at least the seed record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationTrace {
    records: Vec<IterationRecord>,
}

impl IterationTrace {
    pub(super) fn new(seed: IterationRecord) -> Self {
        Self {
            records: vec![seed],
        }
    }

    pub(super) fn push(&mut self, record: IterationRecord) {
        self.records.push(record);
    }

    /// Returns the record at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&IterationRecord> {
        self.records.get(index)
    }

    /// Returns the number of records, including the seed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; the seed record is present from the start.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the most recent record.
    #[must_use]
    pub fn last(&self) -> &IterationRecord {
        &self.records[self.records.len() - 1]
    }

    /// Returns the index of the first record containing a non-finite value.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<usize> {
        self.records.iter().position(|r| !r.is_finite())
    }

    /// Returns an iterator over the records in order.
    pub fn iter(&self) -> slice::Iter<'_, IterationRecord> {
        self.records.iter()
    }

    /// Returns the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[IterationRecord] {
        &self.records
    }
}

impl Index<usize> for IterationTrace {
    type Output = IterationRecord;

    fn index(&self, index: usize) -> &IterationRecord {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a IterationTrace {
    type Item = &'a IterationRecord;
    type IntoIter = slice::Iter<'a, IterationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
