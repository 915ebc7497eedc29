use std::collections::HashMap;
use std::collections::hash_map::Entry;
use crate::record::{Id, Record};

#[derive(Clone, Debug)]
pub struct Dataset<R> {
    records: Vec<R>,
    index:   HashMap<Id, usize>,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Merge {
    pub added:    usize,
    pub replaced: usize,
}

impl<R: Record> Dataset<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index:   HashMap::new(),
        }
    }

    /// Appends unseen records and replaces known ones in place. Within a
    /// batch the last occurrence of an identity wins.
    pub fn merge(&mut self, batch: Vec<R>) -> Merge {
        let mut merge = Merge::default();

        self.records.reserve(batch.len());

        for record in batch {
            match self.index.entry(record.id()) {
                Entry::Occupied(e) => {
                    self.records[*e.get()] = record;
                    merge.replaced += 1;
                }
                Entry::Vacant(e) => {
                    e.insert(self.records.len());
                    self.records.push(record);
                    merge.added += 1;
                }
            }
        }

        merge
    }

    pub fn get(&self, id: Id) -> Option<&R> {
        self.index.get(&id).map(|&n| &self.records[n])
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record> Default for Dataset<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl Merge {
    pub fn changed(&self) -> bool {
        self.added + self.replaced > 0
    }
}
