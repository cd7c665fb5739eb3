//! In-memory geographic neighbor index with radius and label filtering.
//!
//! ## Features
//! - **k-d tree**: latitude/longitude partitioning built by sequential insertion
//! - **Pruned range queries**: splitting-plane bounds skip whole subtrees
//! - **Great-circle distance**: haversine on a 3956 mile sphere
//! - **Linear baseline**: an unpruned scan with the identical predicate
//!
//! A point matches a query when its distance to the center is strictly less
//! than the radius and its label contains the filter string. Matches are
//! returned in traversal order, not sorted by distance.
//!
//! ```rust
//! use geokd::{KdIndex, prelude::*};
//!
//! let mut index = KdIndex::new();
//! index.insert(40.0, -75.0, "Philadelphia");
//! index.insert(40.0, -75.0, "Philadelphia Zoo");
//! index.insert(40.7128, -74.0060, "New York");
//!
//! let result = index.range_query(40.0, -75.0, 5.0, "Zoo");
//! assert_eq!(result.count(), 1);
//! assert_eq!(index.len(), 3);
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod index;

#[cfg(feature = "sync")]
pub mod sync;

#[cfg(test)]
mod testing;

pub use builder::IndexBuilder;
pub use config::{Axis, Config, SplitRule};
pub use error::{GeoKdError, Result};
pub use index::{KdIndex, LinearIndex, NeighborIndex, QueryResult, QueryStats, RangeQuery};

#[cfg(feature = "sync")]
pub use sync::SyncIndex;

pub use compute::distance::{EARTH_RADIUS_MILES, distance_between, haversine_miles};
pub use geo::Point;
pub use geokd_types::point::{LabeledPoint, Neighbor};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{GeoKdError, IndexBuilder, Result};

    pub use crate::{KdIndex, LinearIndex, NeighborIndex, QueryResult, RangeQuery};

    pub use crate::{Config, LabeledPoint, Neighbor, SplitRule};

    #[cfg(feature = "sync")]
    pub use crate::SyncIndex;

    pub use geo::Point;
}
