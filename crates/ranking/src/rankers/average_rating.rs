//! Rank movies by their average rating.

use super::by_name;
use crate::traits::{Metric, Ranker};
use data_loader::MovieAggregate;
use std::cmp::Ordering;

/// Highest average rating first; equal averages are ordered by name.
///
/// Movies without reviews have an average of zero and rank accordingly,
/// which puts them below any movie with positive ratings.
pub struct AverageRatingRanker;

impl Ranker for AverageRatingRanker {
    fn name(&self) -> &str {
        "Rating"
    }

    fn compare(&self, a: &MovieAggregate, b: &MovieAggregate) -> Ordering {
        b.average_rating()
            .total_cmp(&a.average_rating())
            .then_with(|| by_name(a, b))
    }

    fn metric(&self, movie: &MovieAggregate) -> Metric {
        Metric::Average(movie.average_rating())
    }
}
