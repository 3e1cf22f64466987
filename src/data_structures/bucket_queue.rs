use log::warn;

use crate::graph::NodeId;
use crate::{Error, Result};

/// Default ceiling on the bucket array length
pub const DEFAULT_MAX_BUCKETS: usize = 1 << 24;

/// Monotone bucket queue keyed by non-negative integer distance.
///
/// Bucket `d` holds nodes whose tentative distance was `d` when they were
/// inserted. A cursor walks the buckets in increasing order and each bucket is
/// drained LIFO. Pushing past the last bucket grows the array, so the initial
/// bucket count is only a capacity hint. Growth stops at `max_buckets`; a key
/// at or past that ceiling is rejected with [`Error::BucketLimit`].
#[derive(Debug)]
pub struct BucketQueue {
    buckets: Vec<Vec<NodeId>>,
    cursor: usize,
    pending: usize,
    initial_buckets: usize,
    max_buckets: usize,
    regrowths: usize,
}

impl BucketQueue {
    /// Creates a queue with buckets `0..=max_key` and the default growth ceiling
    pub fn with_max_key(max_key: usize) -> Self {
        BucketQueue {
            buckets: vec![Vec::new(); max_key + 1],
            cursor: 0,
            pending: 0,
            initial_buckets: max_key + 1,
            max_buckets: DEFAULT_MAX_BUCKETS.max(max_key + 1),
            regrowths: 0,
        }
    }

    /// Sets the largest bucket array the queue may grow to
    pub fn with_max_buckets(mut self, limit: usize) -> Self {
        self.max_buckets = limit.max(self.buckets.len());
        self
    }

    pub fn max_buckets(&self) -> usize {
        self.max_buckets
    }

    pub fn is_empty(&self) -> bool {
        self.pending == 0
    }

    /// Number of entries not yet popped, stale ones included
    pub fn len(&self) -> usize {
        self.pending
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// How many times a push had to extend the bucket array
    pub fn regrowths(&self) -> usize {
        self.regrowths
    }

    /// Inserts `node` into bucket `key`.
    ///
    /// Keys behind the cursor are a caller bug; they are clamped to the
    /// cursor so the entry is still processed. Fails without touching the
    /// queue when `key` is at or past the growth ceiling or the allocation
    /// cannot be made.
    pub fn push(&mut self, key: usize, node: NodeId) -> Result<()> {
        let key = key.max(self.cursor);
        if key >= self.buckets.len() {
            let limit = self.max_buckets;
            let limit_error = || Error::BucketLimit { key, limit };
            if key >= limit {
                return Err(limit_error());
            }
            self.buckets
                .try_reserve(key + 1 - self.buckets.len())
                .map_err(|_| limit_error())?;
            if self.regrowths == 0 {
                warn!(
                    "bucket key {} exceeds preallocated {} buckets; growing",
                    key, self.initial_buckets
                );
            }
            self.regrowths += 1;
            self.buckets.resize_with(key + 1, Vec::new);
        }
        self.buckets[key].push(node);
        self.pending += 1;
        Ok(())
    }

    /// Pops a node from the lowest non-empty bucket, returning `(key, node)`.
    ///
    /// Returns `None` once the cursor has passed the last bucket.
    pub fn pop(&mut self) -> Option<(usize, NodeId)> {
        while self.cursor < self.buckets.len() {
            if let Some(node) = self.buckets[self.cursor].pop() {
                self.pending -= 1;
                return Some((self.cursor, node));
            }
            if self.pending == 0 {
                self.cursor = self.buckets.len();
                break;
            }
            self.cursor += 1;
        }
        None
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
