/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Bounded store of the response metadata of recent calls.

use bytes::Bytes;
use serde::Serialize;
use smithy_http::operation::Metadata;
use smithy_http::response::ResponseMetadata;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

/// Number of calls whose metadata is retained unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 50;

/// An operation plus the exact JSON body its input serializes to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    metadata: Metadata,
    body: Bytes,
}

impl CacheKey {
    /// Key for a request body that has already been serialized.
    pub(crate) fn from_body(metadata: Metadata, body: Bytes) -> Self {
        CacheKey { metadata, body }
    }

    /// Key for `input`, or `None` when the input does not serialize.
    pub(crate) fn for_input<I: Serialize>(metadata: Metadata, input: &I) -> Option<Self> {
        let body = serde_json::to_vec(input).ok()?;
        Some(CacheKey::from_body(metadata, Bytes::from(body)))
    }
}

#[derive(Debug, Default)]
struct Entries {
    closed: bool,
    queue: VecDeque<(CacheKey, ResponseMetadata)>,
}

/// Keeps the metadata of the most recent `capacity` distinct inputs. Re-issuing an
/// equal input replaces its entry and makes it the newest.
///
/// Once closed the cache stays empty, including for calls that were still in flight.
#[derive(Debug)]
pub(crate) struct ResponseMetadataCache {
    capacity: usize,
    entries: Mutex<Entries>,
}

impl ResponseMetadataCache {
    pub(crate) fn new(capacity: usize) -> Self {
        ResponseMetadataCache {
            capacity,
            entries: Mutex::new(Entries::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub(crate) fn insert(&self, key: CacheKey, metadata: ResponseMetadata) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.lock();
        if entries.closed {
            return;
        }
        entries.queue.retain(|(existing, _)| existing != &key);
        while entries.queue.len() >= self.capacity {
            entries.queue.pop_front();
        }
        entries.queue.push_back((key, metadata));
    }

    pub(crate) fn get(&self, key: &CacheKey) -> Option<ResponseMetadata> {
        self.lock()
            .queue
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, metadata)| metadata.clone())
    }

    /// Drop every entry and refuse later inserts.
    pub(crate) fn close(&self) {
        let mut entries = self.lock();
        entries.closed = true;
        entries.queue = VecDeque::new();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.lock().queue.len()
    }
}

#[cfg(test)]
mod test {
    use super::{CacheKey, ResponseMetadataCache};
    use bytes::Bytes;
    use serde::Serialize;
    use smithy_http::operation::Metadata;
    use smithy_http::response::ResponseMetadata;

    #[derive(Serialize)]
    struct Lookup(u32);

    fn key(input: u32) -> CacheKey {
        CacheKey::for_input(lookup(), &Lookup(input)).unwrap()
    }

    fn lookup() -> Metadata {
        Metadata::new("Lookup", "test")
    }

    fn metadata(request_id: &str) -> ResponseMetadata {
        let response = http::Response::builder()
            .header("x-amzn-requestid", request_id)
            .body(Bytes::new())
            .unwrap();
        ResponseMetadata::new(lookup(), &response)
    }

    #[test]
    fn oldest_entries_are_evicted() {
        let cache = ResponseMetadataCache::new(2);
        cache.insert(key(1), metadata("one"));
        cache.insert(key(2), metadata("two"));
        cache.insert(key(3), metadata("three"));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&key(1)), None);
        assert_eq!(
            cache
                .get(&key(3))
                .and_then(|m| m.request_id().map(str::to_owned)),
            Some("three".to_owned())
        );
    }

    #[test]
    fn reissued_input_replaces_entry() {
        let cache = ResponseMetadataCache::new(2);
        cache.insert(key(1), metadata("first"));
        cache.insert(key(2), metadata("two"));
        cache.insert(key(1), metadata("second"));
        cache.insert(key(3), metadata("three"));
        assert_eq!(cache.get(&key(2)), None);
        assert_eq!(
            cache
                .get(&key(1))
                .and_then(|m| m.request_id().map(str::to_owned)),
            Some("second".to_owned())
        );
    }

    #[test]
    fn zero_capacity_disables_caching() {
        let cache = ResponseMetadataCache::new(0);
        cache.insert(key(1), metadata("one"));
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn huge_capacity_allocates_lazily() {
        let cache = ResponseMetadataCache::new(usize::MAX);
        cache.insert(key(1), metadata("one"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn closed_cache_refuses_inserts() {
        let cache = ResponseMetadataCache::new(2);
        cache.insert(key(1), metadata("one"));
        cache.close();
        assert_eq!(cache.len(), 0);
        cache.insert(key(2), metadata("two"));
        assert_eq!(cache.get(&key(2)), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn keys_compare_serialized_inputs() {
        assert_eq!(key(7), key(7));
        assert_ne!(key(7), key(8));
        let body = Bytes::from_static(b"7");
        assert_eq!(CacheKey::from_body(lookup(), body), key(7));
        let other_op = CacheKey::for_input(Metadata::new("Other", "test"), &Lookup(7));
        assert_ne!(other_op, Some(key(7)));
    }
}
