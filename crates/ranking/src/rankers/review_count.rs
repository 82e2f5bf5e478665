//! Rank movies by how many reviews they received.

use super::by_name;
use crate::traits::{Metric, Ranker};
use data_loader::MovieAggregate;
use std::cmp::Ordering;

/// Most reviewed first; equal counts are ordered by name.
pub struct ReviewCountRanker;

impl Ranker for ReviewCountRanker {
    fn name(&self) -> &str {
        "Num Reviews"
    }

    fn compare(&self, a: &MovieAggregate, b: &MovieAggregate) -> Ordering {
        b.review_count()
            .cmp(&a.review_count())
            .then_with(|| by_name(a, b))
    }

    fn metric(&self, movie: &MovieAggregate) -> Metric {
        Metric::Count(movie.review_count())
    }
}
