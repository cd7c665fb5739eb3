//! Two-dimensional k-d tree over latitude and longitude.
//!
//! Points are placed by sequential insertion: starting at the root, each level
//! compares one coordinate of the new point against the visited node (latitude
//! at even depths, longitude at odd depths) and descends left on ties or
//! smaller values. Nothing is ever moved or rebalanced, so the shape and query
//! cost depend on insertion order.
//!
//! Range queries walk the tree in pre-order. At every node the query center's
//! coordinate on the active axis, widened by the radius, is compared against
//! the node's coordinate:
//!
//! - `q + r < v`: only the left subtree is visited;
//! - `q - r > v`: only the right subtree is visited;
//! - otherwise the node is tested against the full predicate and both
//!   subtrees are visited.
//!
//! The bound compares a radius in miles against coordinates in degrees. One
//! degree is at least a mile everywhere except within a degree of the poles,
//! so away from the poles and from the antimeridian the bound never skips a
//! true match when the tree splits on signed coordinates. Under
//! [`SplitRule::Magnitude`] placement uses absolute values while pruning uses
//! signed values, and subtrees that mix signs can lose matches.
//!
//! # Example
//!
//! ```rust
//! use geokd::KdIndex;
//!
//! let mut index = KdIndex::new();
//! index.insert(40.0, -75.0, "Philadelphia");
//! index.insert(40.7128, -74.0060, "New York");
//!
//! let result = index.range_query(40.0, -75.0, 1.0, "");
//! assert_eq!(result.count(), 1);
//! assert_eq!(result.matches[0].label(), "Philadelphia");
//! ```

use super::{NeighborIndex, QueryResult, RangeQuery};
use crate::compute::distance::haversine;
use crate::compute::validation::{validate_coordinates, validate_radius};
use crate::config::{Axis, Config, SplitRule};
use crate::error::Result;
use geokd_types::point::{LabeledPoint, Neighbor};

type NodeId = usize;

/// Depth at which a single warning about an unbalanced tree is logged.
const DEEP_TREE_WARNING: usize = 10_000;

#[derive(Debug, Clone)]
struct Node {
    point: LabeledPoint,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl Node {
    fn leaf(point: LabeledPoint) -> Self {
        Self {
            point,
            left: None,
            right: None,
        }
    }
}

/// Radius and label filtered neighbor index backed by a k-d tree.
///
/// Nodes live in an arena in insertion order and link to their children by
/// index. Every node has exactly one parent link pointing at it, except the
/// root.
#[derive(Debug, Clone, Default)]
pub struct KdIndex {
    nodes: Vec<Node>,
    root: Option<NodeId>,
    height: usize,
    config: Config,
}

impl KdIndex {
    /// Create an empty index with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with a validated configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Create an empty index using the given split rule.
    pub fn with_split_rule(rule: SplitRule) -> Self {
        let config = Config::default().with_split_rule(rule);
        config.warn_on_lossy_split_rule();
        Self::from_validated(config)
    }

    /// Caller has already run `Config::validate`.
    pub(crate) fn from_validated(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn split_rule(&self) -> SplitRule {
        self.config.split_rule
    }

    /// Insert a point. Never fails and never rejects duplicates or
    /// out-of-range coordinates.
    pub fn insert(&mut self, latitude: f64, longitude: f64, label: impl Into<String>) {
        self.insert_point(LabeledPoint::new(latitude, longitude, label));
    }

    /// Insert a point after checking its coordinates are finite and in range.
    pub fn try_insert(
        &mut self,
        latitude: f64,
        longitude: f64,
        label: impl Into<String>,
    ) -> Result<()> {
        validate_coordinates(latitude, longitude)?;
        self.insert(latitude, longitude, label);
        Ok(())
    }

    /// Place `point` and return the depth it landed at (the root is depth 0).
    fn place(&mut self, point: LabeledPoint) -> usize {
        let id = self.nodes.len();

        let Some(mut current) = self.root else {
            self.nodes.push(Node::leaf(point));
            self.root = Some(id);
            return 0;
        };

        let rule = self.config.split_rule;
        let mut axis = Axis::ROOT;
        let mut depth = 1;

        loop {
            let node = &mut self.nodes[current];
            let left = rule.goes_left(
                axis.coordinate(&point.point),
                axis.coordinate(&node.point.point),
            );
            let slot = if left { &mut node.left } else { &mut node.right };

            match *slot {
                Some(next) => {
                    current = next;
                    axis = axis.flip();
                    depth += 1;
                }
                None => {
                    *slot = Some(id);
                    break;
                }
            }
        }

        self.nodes.push(Node::leaf(point));
        depth
    }

    /// Every stored point within `radius` miles of the center whose label
    /// contains `filter`, in traversal order.
    pub fn range_query(
        &self,
        latitude: f64,
        longitude: f64,
        radius: f64,
        filter: &str,
    ) -> QueryResult {
        self.query(&RangeQuery::new(latitude, longitude, radius).with_filter(filter))
    }

    /// Same as [`range_query`](Self::range_query) but rejects out-of-range
    /// centers and negative or non-finite radii.
    pub fn try_range_query(
        &self,
        latitude: f64,
        longitude: f64,
        radius: f64,
        filter: &str,
    ) -> Result<QueryResult> {
        validate_coordinates(latitude, longitude)?;
        validate_radius(radius)?;
        Ok(self.range_query(latitude, longitude, radius, filter))
    }

    /// Walk the tree with an explicit stack in the same order as a recursive
    /// pre-order traversal: node, left subtree, right subtree.
    fn search(&self, query: &RangeQuery<'_>) -> QueryResult {
        let mut result = QueryResult::default();
        let Some(root) = self.root else {
            return result;
        };

        let earth_radius = self.config.earth_radius;
        let radius = query.radius;
        let stats = &mut result.stats;
        let mut stack: Vec<(NodeId, Axis)> = vec![(root, Axis::ROOT)];

        while let Some((id, axis)) = stack.pop() {
            stats.visited += 1;

            let node = &self.nodes[id];
            let split = axis.coordinate(&node.point.point);
            let center = axis.coordinate(&query.center);
            let next = axis.flip();

            if center + radius < split {
                if node.right.is_some() {
                    stats.pruned += 1;
                }
                if let Some(left) = node.left {
                    stack.push((left, next));
                }
            } else if center - radius > split {
                if node.left.is_some() {
                    stats.pruned += 1;
                }
                if let Some(right) = node.right {
                    stack.push((right, next));
                }
            } else {
                stats.evaluated += 1;
                let distance = haversine(&node.point.point, &query.center, earth_radius);
                if query.accepts(&node.point, distance) {
                    result
                        .matches
                        .push(Neighbor::new(node.point.clone(), distance));
                }

                // Right first so the left subtree is finished before it.
                if let Some(right) = node.right {
                    stack.push((right, next));
                }
                if let Some(left) = node.left {
                    stack.push((left, next));
                }
            }
        }

        result
    }

    /// Number of stored points, in O(1).
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Number of levels in the tree (0 when empty).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Stored points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LabeledPoint> + '_ {
        self.nodes.iter().map(|node| &node.point)
    }

    /// Left/right path from the root to the first stored point equal to
    /// `point`, `false` meaning left. `None` if no such point is stored.
    pub fn path_to(&self, point: &LabeledPoint) -> Option<Vec<bool>> {
        let target = self.nodes.iter().position(|node| &node.point == point)?;
        let mut path = Vec::new();
        let mut current = self.root?;

        // Re-run the insertion descent; the stored point is reached before any
        // later duplicate because ties always go left.
        let rule = self.config.split_rule;
        let mut axis = Axis::ROOT;
        while current != target {
            let node = &self.nodes[current];
            let left = rule.goes_left(
                axis.coordinate(&point.point),
                axis.coordinate(&node.point.point),
            );
            path.push(!left);
            current = if left { node.left? } else { node.right? };
            axis = axis.flip();
        }

        Some(path)
    }
}

impl NeighborIndex for KdIndex {
    fn insert_point(&mut self, point: LabeledPoint) {
        let depth = self.place(point);
        if depth + 1 > self.height {
            self.height = depth + 1;
            if depth == DEEP_TREE_WARNING {
                log::warn!(
                    "k-d tree depth reached {}; insertion order is producing an unbalanced tree",
                    depth
                );
            }
        }
        log::trace!("Inserted point #{} at depth {}", self.nodes.len(), depth);
    }

    fn query(&self, query: &RangeQuery<'_>) -> QueryResult {
        query.warn_if_degenerate();
        let result = self.search(query);
        log::debug!(
            "k-d range query: {} matches, {} visited, {} evaluated, {} subtrees pruned",
            result.count(),
            result.stats.visited,
            result.stats.evaluated,
            result.stats.pruned
        );
        result
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl Extend<LabeledPoint> for KdIndex {
    fn extend<I: IntoIterator<Item = LabeledPoint>>(&mut self, iter: I) {
        for point in iter {
            self.insert_point(point);
        }
    }
}

impl FromIterator<LabeledPoint> for KdIndex {
    fn from_iter<I: IntoIterator<Item = LabeledPoint>>(iter: I) -> Self {
        let mut index = KdIndex::new();
        index.extend(iter);
        index
    }
}
