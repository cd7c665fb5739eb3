//! Thread-safe wrapper for concurrent index access.
//!
//! `KdIndex` has no internal locking. `SyncIndex` puts the whole tree behind a
//! single read-write lock so any number of queries can run while inserts wait
//! for exclusive access.

use crate::config::Config;
use crate::error::Result;
use crate::index::{KdIndex, NeighborIndex, QueryResult, RangeQuery};
use geokd_types::point::LabeledPoint;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable, thread-safe handle to a shared `KdIndex`.
#[derive(Clone, Default)]
pub struct SyncIndex {
    inner: Arc<RwLock<KdIndex>>,
}

impl SyncIndex {
    /// Create an empty shared index with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty shared index with custom configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self::from_index(KdIndex::with_config(config)?))
    }

    /// Share an already populated index.
    pub fn from_index(index: KdIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    pub fn insert(&self, latitude: f64, longitude: f64, label: impl Into<String>) {
        self.inner.write().insert(latitude, longitude, label);
    }

    pub fn insert_point(&self, point: LabeledPoint) {
        self.inner.write().insert_point(point);
    }

    pub fn range_query(
        &self,
        latitude: f64,
        longitude: f64,
        radius: f64,
        filter: &str,
    ) -> QueryResult {
        self.inner
            .read()
            .range_query(latitude, longitude, radius, filter)
    }

    pub fn query(&self, query: &RangeQuery<'_>) -> QueryResult {
        self.inner.read().query(query)
    }

    pub fn size(&self) -> usize {
        self.inner.read().size()
    }

    /// Run a closure with shared access to the underlying index.
    pub fn with_read<R>(&self, f: impl FnOnce(&KdIndex) -> R) -> R {
        f(&self.inner.read())
    }
}
