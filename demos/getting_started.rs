use geokd::{IndexBuilder, KdIndex, SplitRule};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug to see query statistics)
    env_logger::init();

    println!("=== geokd - Getting Started ===\n");

    // === BASIC INSERTS ===
    println!("1. Inserting Points");
    println!("-------------------");

    let mut index = KdIndex::new();
    index.insert(39.9526, -75.1652, "Philadelphia City Hall");
    index.insert(39.9496, -75.1503, "Independence Hall");
    index.insert(39.9656, -75.1810, "Philadelphia Museum of Art");
    index.insert(39.9489, -75.1500, "Liberty Bell");
    index.insert(40.7128, -74.0060, "New York City Hall");
    index.insert(38.9072, -77.0369, "Washington Monument");
    println!("   Stored {} points, tree height {}\n", index.size(), index.height());

    // === RANGE QUERIES ===
    println!("2. Range Queries");
    println!("----------------");

    let result = index.range_query(39.9526, -75.1652, 2.0, "");
    println!("   Within 2 miles of City Hall: {}", result.count());
    for neighbor in &result {
        println!(
            "     - {} ({:.4}, {:.4}) {:.2} mi",
            neighbor.label(),
            neighbor.latitude(),
            neighbor.longitude(),
            neighbor.distance
        );
    }

    let halls = index.range_query(39.9526, -75.1652, 150.0, "Hall");
    println!("   Labels containing \"Hall\" within 150 miles: {:?}", halls.labels());
    println!(
        "   Visited {} nodes, pruned {} subtrees\n",
        halls.stats.visited, halls.stats.pruned
    );

    // === BUILDER ===
    println!("3. Builder With Validation");
    println!("--------------------------");

    let built = IndexBuilder::new()
        .split_rule(SplitRule::Signed)
        .validate_coordinates(true)
        .point(51.5074, -0.1278, "London")
        .point(48.8566, 2.3522, "Paris")
        .build()?;
    println!(
        "   Built index with {} points ({:?} split, {} mile sphere)",
        built.size(),
        built.config().split_rule,
        built.config().earth_radius
    );

    let rejected = IndexBuilder::new()
        .validate_coordinates(true)
        .point(123.0, 0.0, "Nowhere")
        .build();
    if let Err(e) = rejected {
        println!("   Rejected bad input: {}", e);
    }

    println!("\n=== Done ===");
    Ok(())
}
