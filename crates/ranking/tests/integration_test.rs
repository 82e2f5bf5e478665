//! Integration tests for loading, ranking and reporting.
//!
//! These run the whole path from CSV text to the final report and check
//! the ordering rules on a larger catalog.

use data_loader::{MovieAggregate, MovieCatalog};
use ranking::{
    AverageRatingRanker, DEFAULT_TOP, Metric, Ranker, RankingEngine, Report, ReviewCountRanker,
};
use std::cmp::Ordering;

const MOVIES: &str = "MovieID,MovieName,PubYear\n\
                      1,A,2000\n\
                      2,B,2001\n";

const REVIEWS: &str = "MovieID,UserID,Rating,ReviewDate\n\
                       1,100,5,2017-01-01\n\
                       1,101,3,2017-01-02\n\
                       2,102,4,2017-01-03\n\
                       9,103,1,2017-01-04\n";

/// Fifteen movies with a spread of averages and counts, including ties
fn create_test_catalog() -> MovieCatalog {
    let mut movies = String::from("MovieID,MovieName,PubYear\n");
    let mut reviews = String::from("MovieID,UserID,Rating,ReviewDate\n");

    for id in 1..=15 {
        let letter = (b'A' + (15 - id) as u8) as char;
        movies.push_str(&format!("{},Movie {},{}\n", id, letter, 1990 + id));
        for n in 0..(id % 5) {
            let rating = 1 + (id + n) % 5;
            reviews.push_str(&format!("{},{},{},2017-01-01\n", id, n, rating));
        }
    }
    reviews.push_str("99,1,5,2017-01-01\n");

    MovieCatalog::load_from_readers(movies.as_bytes(), reviews.as_bytes()).unwrap()
}

#[test]
fn test_two_movie_scenario() {
    let catalog = MovieCatalog::load_from_readers(MOVIES.as_bytes(), REVIEWS.as_bytes()).unwrap();

    assert_eq!(catalog.reviews_seen(), 4);

    let a = catalog.get_movie(1).unwrap();
    assert_eq!(a.review_count(), 2);
    assert_eq!(a.average_rating(), 4.0);

    let b = catalog.get_movie(2).unwrap();
    assert_eq!(b.review_count(), 1);
    assert_eq!(b.average_rating(), 4.0);

    let by_rating = AverageRatingRanker.rank(catalog.movies());
    assert_eq!(by_rating[0].name, "A");
    assert_eq!(by_rating[1].name, "B");

    let by_count = ReviewCountRanker.rank(catalog.movies());
    assert_eq!(by_count[0].id, 1);
    assert_eq!(by_count[1].id, 2);
}

#[test]
fn test_average_matches_accumulators() {
    let catalog = create_test_catalog();
    for movie in catalog.movies() {
        if movie.review_count() > 0 {
            assert_eq!(
                movie.average_rating(),
                movie.rating_sum() as f64 / movie.review_count() as f64
            );
        } else {
            assert_eq!(movie.average_rating(), 0.0);
        }
    }
}

#[test]
fn test_matched_reviews_never_exceed_seen() {
    let catalog = create_test_catalog();
    let matched: usize = catalog.movies().iter().map(|m| m.review_count() as usize).sum();

    // The review for movie 99 is seen but not matched
    assert_eq!(matched + 1, catalog.reviews_seen());
}

#[test]
fn test_rankings_are_total_orders() {
    let catalog = create_test_catalog();

    let by_rating = AverageRatingRanker.rank(catalog.movies());
    for pair in by_rating.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(
            a.average_rating() > b.average_rating()
                || (a.average_rating() == b.average_rating() && a.name <= b.name),
            "{:?} ranked before {:?}",
            a,
            b
        );
    }

    let by_count = ReviewCountRanker.rank(catalog.movies());
    for pair in by_count.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(
            a.review_count() > b.review_count()
                || (a.review_count() == b.review_count() && a.name <= b.name),
            "{:?} ranked before {:?}",
            a,
            b
        );
    }
}

#[test]
fn test_reranking_is_idempotent() {
    let catalog = create_test_catalog();

    for ranker in RankingEngine::standard().rankers() {
        let once: Vec<MovieAggregate> =
            ranker.rank(catalog.movies()).into_iter().cloned().collect();
        let twice: Vec<MovieAggregate> = ranker.rank(&once).into_iter().cloned().collect();
        assert_eq!(once, twice, "{} is not stable under re-sort", ranker.name());
    }
}

#[test]
fn test_compare_agrees_with_rank() {
    let catalog = create_test_catalog();
    let ranked = ReviewCountRanker.rank(catalog.movies());
    for pair in ranked.windows(2) {
        assert_ne!(ReviewCountRanker.compare(pair[0], pair[1]), Ordering::Greater);
    }
}

#[test]
fn test_report_for_short_catalog() {
    let catalog = MovieCatalog::load_from_readers(MOVIES.as_bytes(), REVIEWS.as_bytes()).unwrap();
    let report = Report::build(&catalog, &RankingEngine::standard(), DEFAULT_TOP);

    assert_eq!(report.movies, 2);
    assert_eq!(report.reviews, 4);
    for section in &report.rankings {
        assert_eq!(section.entries.len(), 2);
    }
    assert_eq!(report.rankings[1].entries[0].metric, Metric::Count(2));
}

#[test]
fn test_report_for_large_catalog_caps_at_ten() {
    let catalog = create_test_catalog();
    let report = Report::build(&catalog, &RankingEngine::standard(), DEFAULT_TOP);

    assert_eq!(report.movies, 15);
    for section in &report.rankings {
        assert_eq!(section.entries.len(), 10);
        let ranks: Vec<usize> = section.entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, (1..=10).collect::<Vec<_>>());
    }

    let mut out = Vec::new();
    report.write_text(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 2 + 2 * (1 + 10));
}
