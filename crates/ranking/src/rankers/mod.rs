//! Ranker implementations for the ranking engine.
//!
//! Both rankers put the larger metric first and fall back to the movie name
//! (ascending, byte order) when the metric is equal.

pub mod average_rating;
pub mod review_count;

// Re-export for convenience
pub use average_rating::AverageRatingRanker;
pub use review_count::ReviewCountRanker;

use data_loader::MovieAggregate;
use std::cmp::Ordering;

/// Tie-break shared by every ranker
fn by_name(a: &MovieAggregate, b: &MovieAggregate) -> Ordering {
    a.name.cmp(&b.name)
}
