//! In-Memory Record Store
//!
//! A process-lifetime mapping from generated identifiers to arbitrary
//! JSON objects. No persistence, no eviction. The store is owned by the
//! application state and shared behind a lock, never accessed through a
//! global.

use std::collections::HashMap;

use chrono::Utc;
use serde_json::{Map, Value};

/// An arbitrary JSON object stored under a generated key.
pub type Record = Map<String, Value>;

// == Record Store ==
/// Identifier-keyed storage for JSON records.
#[derive(Debug, Default)]
pub struct RecordStore {
    /// Identifier to record mapping
    records: HashMap<String, Record>,
    /// Monotonic sequence appended to identifiers
    next_seq: u64,
}

impl RecordStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Stores a record and returns its generated identifier.
    ///
    /// Identifiers combine the seconds-precision wall-clock timestamp
    /// with a process-wide monotonic sequence, so inserts within the
    /// same second never collide.
    pub fn insert(&mut self, record: Record) -> String {
        let seq = self.next_seq;
        self.next_seq += 1;
        let id = format!("{}-{}", Utc::now().timestamp(), seq);
        self.records.insert(id.clone(), record);
        id
    }

    // == Get ==
    /// Returns the record stored under `id`, if any.
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    // == Snapshot ==
    /// Returns the entire store contents as a JSON object keyed by
    /// identifier.
    pub fn snapshot(&self) -> Value {
        Value::Object(
            self.records
                .iter()
                .map(|(id, record)| (id.clone(), Value::Object(record.clone())))
                .collect(),
        )
    }

    // == Length ==
    /// Returns the current number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
