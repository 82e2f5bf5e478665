//! Core traits for ranking movies.
//!
//! A `Ranker` is one way of ordering the catalog: it knows which number it
//! ranks by and how two movies compare. The `RankingEngine` runs any number
//! of them over the same catalog.

use data_loader::MovieAggregate;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// The value a ranker orders movies by, as shown in reports
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Metric {
    /// Mean rating, printed with six decimals
    Average(f64),
    /// Plain integer count
    Count(u64),
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Average(value) => write!(f, "{:.6}", value),
            Metric::Count(value) => write!(f, "{}", value),
        }
    }
}

/// Core trait for ordering movies.
///
/// `compare` must be a total order: whenever it returns `Equal` the two
/// movies are indistinguishable for this ranker.
pub trait Ranker: Send + Sync {
    /// Short label used in report headings, e.g. "Rating"
    fn name(&self) -> &str;

    /// `Less` means `a` is ranked ahead of `b`
    fn compare(&self, a: &MovieAggregate, b: &MovieAggregate) -> Ordering;

    /// The number this ranker orders by
    fn metric(&self, movie: &MovieAggregate) -> Metric;

    /// Sorted view over `movies`, best first.
    ///
    /// The input is left untouched; the sort is stable, so movies that
    /// compare equal keep their relative input order.
    fn rank<'a>(&self, movies: &'a [MovieAggregate]) -> Vec<&'a MovieAggregate> {
        let mut ranked: Vec<&MovieAggregate> = movies.iter().collect();
        ranked.sort_by(|a, b| self.compare(a, b));
        ranked
    }
}
