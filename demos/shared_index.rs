use geokd::SyncIndex;
use std::thread;

fn main() {
    env_logger::init();

    let index = SyncIndex::new();

    let writers: Vec<_> = (0..4)
        .map(|w| {
            let index = index.clone();
            thread::spawn(move || {
                for i in 0..1_000 {
                    let lat = 40.0 + (w as f64) * 0.5 + (i as f64) * 0.0005;
                    let lon = -75.0 + (i as f64) * 0.0005;
                    index.insert(lat, lon, format!("writer-{w}-{i}"));
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().expect("writer thread panicked");
    }

    let readers: Vec<_> = (0..4)
        .map(|w| {
            let index = index.clone();
            thread::spawn(move || {
                let filter = format!("writer-{w}-");
                let result = index.range_query(40.0 + (w as f64) * 0.5, -75.0, 10.0, &filter);
                (w, result.count())
            })
        })
        .collect();

    for reader in readers {
        let (w, count) = reader.join().expect("reader thread panicked");
        println!("writer {w}: {count} points within 10 miles of its start");
    }
    println!("total points: {}", index.size());
}
