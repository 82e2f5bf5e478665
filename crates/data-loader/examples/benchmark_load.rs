use data_loader::MovieCatalog;
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let mut args = std::env::args().skip(1);
    let movies_path = PathBuf::from(args.next().unwrap_or_else(|| "data/movies.csv".to_string()));
    let reviews_path = PathBuf::from(args.next().unwrap_or_else(|| "data/reviews.csv".to_string()));

    println!(
        "Loading {} and {}...\n",
        movies_path.display(),
        reviews_path.display()
    );

    let start = Instant::now();
    let catalog = MovieCatalog::load_from_files(&movies_path, &reviews_path)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", catalog.movie_count());
    println!("Reviews seen: {}", catalog.reviews_seen());
    println!("Reviews matched: {}", catalog.reviews_matched());
    println!(
        "\nPerformance: {:.0} reviews/second",
        catalog.reviews_seen() as f64 / elapsed.as_secs_f64()
    );
}
