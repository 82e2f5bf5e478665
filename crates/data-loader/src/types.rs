//! Core domain types for the movie catalog and review stream.
//!
//! This module defines the records parsed from the two CSV inputs and the
//! per-movie aggregate that reviews are folded into.

use serde::Serialize;

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of a movie, as it appears in both input files
pub type MovieId = i32;

/// Identifier of the user who wrote a review
pub type UserId = i32;

// =============================================================================
// Movie Aggregate
// =============================================================================

/// One movie from the catalog plus the running totals of its reviews.
///
/// The identifying fields are fixed at load time; only `review_count` and
/// `rating_sum` change afterwards, and only through [`MovieAggregate::record_rating`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieAggregate {
    pub id: MovieId,
    pub name: String,
    /// Publication year from the catalog. Not used for ranking.
    pub publication_year: i32,
    review_count: u64,
    rating_sum: i64,
}

impl MovieAggregate {
    /// Create an aggregate with no reviews yet
    pub fn new(id: MovieId, name: impl Into<String>, publication_year: i32) -> Self {
        Self {
            id,
            name: name.into(),
            publication_year,
            review_count: 0,
            rating_sum: 0,
        }
    }

    /// Number of reviews folded into this movie so far
    pub fn review_count(&self) -> u64 {
        self.review_count
    }

    /// Sum of all ratings folded into this movie so far
    pub fn rating_sum(&self) -> i64 {
        self.rating_sum
    }

    /// Average rating, or `0.0` for a movie without reviews.
    ///
    /// Always derived from the accumulators, so it can never go stale.
    pub fn average_rating(&self) -> f64 {
        if self.review_count > 0 {
            self.rating_sum as f64 / self.review_count as f64
        } else {
            0.0
        }
    }

    /// Fold one review's rating into the totals.
    ///
    /// Any integer is accepted, including values outside the usual 1-5 scale.
    pub fn record_rating(&mut self, rating: i32) {
        self.review_count += 1;
        self.rating_sum += i64::from(rating);
    }
}

// =============================================================================
// Review
// =============================================================================

/// A single parsed line of the review file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub movie_id: MovieId,
    pub user_id: UserId,
    pub rating: i32,
    /// Kept verbatim; nothing interprets it.
    pub review_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_without_reviews_is_zero() {
        let movie = MovieAggregate::new(1, "Heat", 1995);
        assert_eq!(movie.review_count(), 0);
        assert_eq!(movie.rating_sum(), 0);
        assert_eq!(movie.average_rating(), 0.0);
    }

    #[test]
    fn test_average_follows_accumulators() {
        let mut movie = MovieAggregate::new(1, "Heat", 1995);
        movie.record_rating(5);
        assert_eq!(movie.average_rating(), 5.0);

        movie.record_rating(2);
        assert_eq!(movie.review_count(), 2);
        assert_eq!(movie.rating_sum(), 7);
        assert_eq!(movie.average_rating(), 3.5);
    }

    #[test]
    fn test_out_of_scale_ratings_are_accepted() {
        let mut movie = MovieAggregate::new(7, "Odd", 2001);
        movie.record_rating(-4);
        movie.record_rating(10);
        assert_eq!(movie.rating_sum(), 6);
        assert_eq!(movie.average_rating(), 3.0);
    }

    #[test]
    fn test_review_count_goes_past_u32() {
        let mut movie = MovieAggregate::new(3, "Blockbuster", 2010);
        movie.review_count = u64::from(u32::MAX);
        movie.rating_sum = i64::from(u32::MAX) * 4;

        movie.record_rating(4);
        assert_eq!(movie.review_count(), u64::from(u32::MAX) + 1);
        assert_eq!(movie.average_rating(), 4.0);
    }
}
