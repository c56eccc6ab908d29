//! Fixed-size chained hash table keyed by the numeric part of a course id.
//!
//! Buckets never move and the table never grows: a record lands in
//! `parse_key(id) mod table_size` and stays there. Collisions are appended to
//! the tail of that bucket's chain, so per-bucket order is insertion order.

use crate::consts::DEFAULT_TABLE_SIZE;
use crate::course::CourseRecord;
use crate::errors::{CourseError, Result};
use crate::key::{bucket_index, parse_key, parse_key_strict, KeyPolicy};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

struct Entry {
    record: CourseRecord,
    bucket_key: usize,
    next: Option<Box<Entry>>,
}

pub struct CourseTable {
    buckets: Vec<Option<Box<Entry>>>,
    len: usize,
    policy: KeyPolicy,
}

/// Occupancy snapshot, useful for spotting skew since the table never rehashes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableStats {
    pub table_size: usize,
    pub entries: usize,
    pub occupied_buckets: usize,
    pub longest_chain: usize,
    pub load_factor: f64,
}

impl CourseTable {
    pub fn new(table_size: usize) -> Result<Self> {
        Self::with_policy(table_size, KeyPolicy::Permissive)
    }

    pub fn with_policy(table_size: usize, policy: KeyPolicy) -> Result<Self> {
        if table_size == 0 {
            return Err(CourseError::InvalidTableSize);
        }
        Ok(Self::empty(table_size, policy))
    }

    fn empty(table_size: usize, policy: KeyPolicy) -> Self {
        let mut buckets = Vec::with_capacity(table_size);
        buckets.resize_with(table_size, || None);
        Self { buckets, len: 0, policy }
    }

    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    pub fn policy(&self) -> KeyPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bucket index for `id` under permissive parsing.
    pub fn hash(&self, id: &str) -> usize {
        bucket_index(parse_key(id), self.table_size())
    }

    /// Stores `record` at the tail of its bucket's chain and returns the bucket.
    ///
    /// Always permissive: ids without a numeric prefix go to `hash("0")`.
    /// Duplicate ids are kept; `find` returns the earliest one.
    pub fn insert(&mut self, record: CourseRecord) -> usize {
        let k = self.hash(&record.id);
        self.append(k, record);
        k
    }

    /// Like [`insert`](Self::insert), but honors the table's [`KeyPolicy`].
    pub fn try_insert(&mut self, record: CourseRecord) -> Result<usize> {
        let k = match self.policy {
            KeyPolicy::Permissive => self.hash(&record.id),
            KeyPolicy::Strict => bucket_index(parse_key_strict(&record.id)?, self.table_size()),
        };
        self.append(k, record);
        Ok(k)
    }

    fn append(&mut self, k: usize, record: CourseRecord) {
        trace!(id = %record.id, bucket = k, "insert");
        let mut slot = &mut self.buckets[k];
        while let Some(entry) = slot {
            slot = &mut entry.next;
        }
        *slot = Some(Box::new(Entry {
            record,
            bucket_key: k,
            next: None,
        }));
        self.len += 1;
    }

    /// First record in `id`'s bucket whose id is exactly `id`.
    pub fn find(&self, id: &str) -> Option<&CourseRecord> {
        let mut cur = self.buckets[self.hash(id)].as_deref();
        while let Some(entry) = cur {
            if entry.record.id == id {
                return Some(&entry.record);
            }
            cur = entry.next.as_deref();
        }
        None
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn for_each<F: FnMut(&CourseRecord)>(&self, mut f: F) {
        for record in self.iter() {
            f(record);
        }
    }

    /// Records in bucket order, each chain head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.entries())
    }

    /// Same order as [`iter`](Self::iter), paired with the bucket each record sits in.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            buckets: self.buckets.iter(),
            current: None,
        }
    }

    /// Number of records chained in `bucket`; 0 for out-of-range buckets.
    pub fn chain_len(&self, bucket: usize) -> usize {
        let mut n = 0;
        let mut cur = self.buckets.get(bucket).and_then(|b| b.as_deref());
        while let Some(entry) = cur {
            n += 1;
            cur = entry.next.as_deref();
        }
        n
    }

    pub fn stats(&self) -> TableStats {
        let mut occupied_buckets = 0;
        let mut longest_chain = 0;
        for bucket in 0..self.table_size() {
            let n = self.chain_len(bucket);
            if n > 0 {
                occupied_buckets += 1;
            }
            longest_chain = longest_chain.max(n);
        }
        TableStats {
            table_size: self.table_size(),
            entries: self.len,
            occupied_buckets,
            longest_chain,
            load_factor: self.len as f64 / self.table_size() as f64,
        }
    }
}

impl Default for CourseTable {
    fn default() -> Self {
        Self::empty(DEFAULT_TABLE_SIZE, KeyPolicy::Permissive)
    }
}

impl fmt::Debug for CourseTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CourseTable")
            .field("table_size", &self.table_size())
            .field("len", &self.len)
            .field("policy", &self.policy)
            .finish()
    }
}

// Unlink chains one node at a time; the default recursive drop can blow the
// stack on a single very long chain.
impl Drop for CourseTable {
    fn drop(&mut self) {
        for slot in &mut self.buckets {
            let mut cur = slot.take();
            while let Some(mut entry) = cur {
                cur = entry.next.take();
            }
        }
    }
}

pub struct Entries<'a> {
    buckets: std::slice::Iter<'a, Option<Box<Entry>>>,
    current: Option<&'a Entry>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (usize, &'a CourseRecord);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current {
                self.current = entry.next.as_deref();
                return Some((entry.bucket_key, &entry.record));
            }
            self.current = self.buckets.next()?.as_deref();
        }
    }
}

pub struct Iter<'a>(Entries<'a>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CourseRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, record)| record)
    }
}

impl<'a> IntoIterator for &'a CourseTable {
    type Item = &'a CourseRecord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
