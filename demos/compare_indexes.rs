use geokd::{KdIndex, LabeledPoint, LinearIndex, NeighborIndex, RangeQuery, SplitRule};
use std::time::Instant;

fn grid(count_per_axis: usize) -> Vec<LabeledPoint> {
    // Deterministic scatter over the continental US.
    let mut points = Vec::with_capacity(count_per_axis * count_per_axis);
    for i in 0..count_per_axis {
        for j in 0..count_per_axis {
            let lat = 25.0 + 25.0 * ((i * 7919 + j * 104_729) % 1000) as f64 / 1000.0;
            let lon = -125.0 + 60.0 * ((j * 7919 + i * 15_485_863) % 1000) as f64 / 1000.0;
            points.push(LabeledPoint::new(lat, lon, format!("site-{i}-{j}")));
        }
    }
    points
}

fn run(name: &str, index: &dyn NeighborIndex, query: &RangeQuery<'_>) {
    let start = Instant::now();
    let result = index.query(query);
    println!(
        "   {:<22} {:>5} matches  {:>7} visited  {:>6} pruned  {:?}",
        name,
        result.count(),
        result.stats.visited,
        result.stats.pruned,
        start.elapsed()
    );
}

fn main() {
    env_logger::init();

    let points = grid(200);
    println!("=== Comparing indexes over {} points ===\n", points.len());

    let signed: KdIndex = points.iter().cloned().collect();
    let mut magnitude = KdIndex::with_split_rule(SplitRule::Magnitude);
    magnitude.extend(points.iter().cloned());
    let linear: LinearIndex = points.into_iter().collect();

    println!(
        "   k-d heights: signed {}, magnitude {}\n",
        signed.height(),
        magnitude.height()
    );

    for radius in [5.0, 25.0, 100.0] {
        let query = RangeQuery::new(39.9526, -75.1652, radius).with_filter("site-1");
        println!("Radius {} miles, filter {:?}", radius, query.filter);
        run("k-d tree (signed)", &signed, &query);
        run("k-d tree (magnitude)", &magnitude, &query);
        run("linear scan", &linear, &query);
        println!();
    }
}
