use catalog::Catalog;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data");

    println!("Loading shelf files from {:?}...\n", data_dir);

    let start = Instant::now();
    let catalog = Catalog::load_from_dir(data_dir).expect("failed to load catalog");
    let elapsed = start.elapsed();

    let (titles, trending) = catalog.counts();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Language titles: {}", titles);
    println!("Trending titles: {}", trending);
}
