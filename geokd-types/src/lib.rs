//! # geokd-types
//!
//! Plain data types shared by the geokd indexes:
//!
//! - **Point types**: `LabeledPoint`, `Neighbor`
//! - **Partitioning**: `Axis`, `SplitRule`
//!
//! All types are serializable with Serde and built on top of the `geo` crate's
//! `Point`, which stores longitude as `x` and latitude as `y`.
//!
//! ## Examples
//!
//! ```rust
//! use geokd_types::point::LabeledPoint;
//!
//! let philly = LabeledPoint::new(39.9526, -75.1652, "Philadelphia");
//! assert_eq!(philly.latitude(), 39.9526);
//! assert_eq!(philly.longitude(), -75.1652);
//! ```

pub mod point;
pub mod split;
