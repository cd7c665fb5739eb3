use geokd::{
    IndexBuilder, KdIndex, LabeledPoint, LinearIndex, NeighborIndex, QueryResult, RangeQuery,
    SplitRule, distance_between,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CATEGORIES: [&str; 4] = ["cafe", "park", "museum", "station"];

fn random_points(
    rng: &mut StdRng,
    count: usize,
    lat: std::ops::Range<f64>,
    lon: std::ops::Range<f64>,
) -> Vec<LabeledPoint> {
    (0..count)
        .map(|i| {
            let category = CATEGORIES[i % CATEGORIES.len()];
            LabeledPoint::new(
                rng.random_range(lat.clone()),
                rng.random_range(lon.clone()),
                format!("{category}-{i}"),
            )
        })
        .collect()
}

fn sorted_labels(result: &QueryResult) -> Vec<String> {
    let mut labels: Vec<String> = result.labels().into_iter().map(String::from).collect();
    labels.sort();
    labels
}

/// Compares the pruned tree against a full scan for a batch of random queries
/// inside the same region as the points.
fn assert_equivalent(
    rule: SplitRule,
    seed: u64,
    lat: std::ops::Range<f64>,
    lon: std::ops::Range<f64>,
) {
    let mut rng = StdRng::seed_from_u64(seed);
    let points = random_points(&mut rng, 500, lat.clone(), lon.clone());

    let tree = IndexBuilder::new()
        .split_rule(rule)
        .points(points.clone())
        .build()
        .unwrap();
    let linear: LinearIndex = points.into_iter().collect();
    assert_eq!(tree.len(), linear.len());

    let mut total_pruned = 0;
    for _ in 0..50 {
        let center_lat = rng.random_range(lat.clone());
        let center_lon = rng.random_range(lon.clone());
        let radius = rng.random_range(1.0..150.0);
        let filter = CATEGORIES[rng.random_range(0..CATEGORIES.len())];

        for filter in ["", filter] {
            let query = RangeQuery::new(center_lat, center_lon, radius).with_filter(filter);
            let from_tree = tree.query(&query);
            let from_scan = linear.query(&query);

            assert_eq!(
                sorted_labels(&from_tree),
                sorted_labels(&from_scan),
                "rule {rule:?}, center ({center_lat}, {center_lon}), radius {radius}, filter {filter:?}"
            );
            assert_eq!(from_tree.count(), from_tree.matches.len());
            total_pruned += from_tree.stats.pruned;
        }
    }

    assert!(total_pruned > 0, "expected the tree to skip some subtrees");
}

#[test]
fn test_signed_tree_matches_linear_scan() {
    // Continental US: positive latitudes, negative longitudes.
    assert_equivalent(SplitRule::Signed, 7, 25.0..50.0, -125.0..-65.0);
}

#[test]
fn test_signed_tree_matches_linear_scan_across_equator() {
    // Mixed signs on both axes, away from the poles and the antimeridian.
    assert_equivalent(SplitRule::Signed, 11, -40.0..40.0, -60.0..60.0);
}

#[test]
fn test_magnitude_tree_matches_linear_scan_with_positive_coordinates() {
    // With one sign per axis the magnitude rule agrees with signed pruning.
    assert_equivalent(SplitRule::Magnitude, 23, 10.0..50.0, 60.0..120.0);
}

#[test]
fn test_magnitude_tree_diverges_on_mixed_signs() {
    let mut rng = StdRng::seed_from_u64(99);
    let points = random_points(&mut rng, 300, -60.0..60.0, -60.0..60.0);

    let tree = IndexBuilder::new()
        .split_rule(SplitRule::Magnitude)
        .points(points.clone())
        .build()
        .unwrap();
    let linear: LinearIndex = points.iter().cloned().collect();

    let mut missed = 0;
    for point in &points {
        let query = RangeQuery::new(point.latitude(), point.longitude(), 1.0);
        let from_tree = tree.query(&query);
        let from_scan = linear.query(&query);

        // Pruning can only drop matches, never invent them.
        assert!(from_tree.count() <= from_scan.count());
        for hit in &from_tree {
            assert!(from_scan.iter().any(|n| n.point == hit.point));
        }
        if from_tree.count() < from_scan.count() {
            missed += 1;
        }
    }

    assert!(missed > 0, "mixed-sign data should expose the magnitude split");
}

#[test]
fn test_size_invariant() {
    let mut index = KdIndex::new();
    let mut rng = StdRng::seed_from_u64(1);
    for n in 1..=250 {
        index.insert(
            rng.random_range(-90.0..90.0),
            rng.random_range(-180.0..180.0),
            "",
        );
        assert_eq!(index.size(), n);
    }
}

#[test]
fn test_philadelphia_exact_match() {
    let mut index = KdIndex::new();
    index.insert(40.0, -75.0, "Philadelphia");

    let result = index.range_query(40.0, -75.0, 1.0, "");
    assert_eq!(result.count(), 1);
    assert_eq!(result.matches[0].point, LabeledPoint::new(40.0, -75.0, "Philadelphia"));
}

#[test]
fn test_substring_filter_exclusion() {
    let mut index = KdIndex::new();
    index.insert(12.5, 45.0, "Alpha");
    index.insert(12.5, 45.0, "Beta");

    let result = index.range_query(12.5, 45.0, 100.0, "Alpha");
    assert_eq!(result.labels(), vec!["Alpha"]);
}

#[test]
fn test_radius_exclusion_ten_miles_apart() {
    // Two points on the same meridian 10 miles apart.
    let delta = 10.0 / (geokd::EARTH_RADIUS_MILES * std::f64::consts::PI / 180.0);
    let mut index = KdIndex::new();
    index.insert(35.0, -90.0, "first");
    index.insert(35.0 + delta, -90.0, "second");

    let gap = distance_between(35.0, -90.0, 35.0 + delta, -90.0);
    assert!((gap - 10.0).abs() < 1e-6);

    assert_eq!(index.range_query(35.0, -90.0, 5.0, "").labels(), vec!["first"]);
    assert_eq!(index.range_query(35.0, -90.0, 15.0, "").count(), 2);
}

#[test]
fn test_tree_and_linear_agree_on_city_set() {
    let cities = [
        (39.9526, -75.1652, "Philadelphia"),
        (40.7128, -74.0060, "New York"),
        (39.2904, -76.6122, "Baltimore"),
        (38.9072, -77.0369, "Washington"),
        (42.3601, -71.0589, "Boston"),
        (41.8240, -71.4128, "Providence"),
        (40.2206, -74.7597, "Trenton"),
        (39.7391, -75.5398, "Wilmington"),
    ];

    let mut tree = KdIndex::new();
    let mut linear = LinearIndex::new();
    for (lat, lon, name) in cities {
        tree.insert(lat, lon, name);
        linear.insert(lat, lon, name);
    }

    let near_philly = tree.range_query(39.9526, -75.1652, 40.0, "");
    let mut labels = near_philly.labels();
    labels.sort();
    assert_eq!(labels, vec!["Philadelphia", "Trenton", "Wilmington"]);
    assert_eq!(
        sorted_labels(&near_philly),
        sorted_labels(&linear.range_query(39.9526, -75.1652, 40.0, ""))
    );

    let everything = tree.range_query(40.0, -74.0, 1_000.0, "o");
    assert_eq!(
        sorted_labels(&everything),
        vec![
            "Baltimore",
            "Boston",
            "New York",
            "Providence",
            "Trenton",
            "Washington",
            "Wilmington",
        ]
    );
}

#[test]
fn test_dyn_dispatch_over_both_indexes() {
    let mut indexes: Vec<Box<dyn NeighborIndex>> =
        vec![Box::new(KdIndex::new()), Box::new(LinearIndex::new())];

    for index in indexes.iter_mut() {
        index.insert_point(LabeledPoint::new(51.5074, -0.1278, "London"));
        index.insert_point(LabeledPoint::new(48.8566, 2.3522, "Paris"));
    }

    for index in &indexes {
        let result = index.query(&RangeQuery::new(51.5, -0.12, 10.0));
        assert_eq!(result.labels(), vec!["London"]);
        assert_eq!(index.len(), 2);
    }
}
