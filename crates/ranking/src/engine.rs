//! The RankingEngine runs several rankers over one catalog.
//!
//! Each ranker gets its own sorted view, so the rankings never interfere
//! with each other and the catalog keeps its load order.

use crate::rankers::{AverageRatingRanker, ReviewCountRanker};
use crate::traits::Ranker;
use data_loader::MovieAggregate;

/// One ranker's ordering of the whole catalog
pub struct Ranking<'a> {
    pub ranker: &'a dyn Ranker,
    /// Every movie, best first
    pub movies: Vec<&'a MovieAggregate>,
}

impl<'a> Ranking<'a> {
    /// The first `limit` movies, or all of them when there are fewer
    pub fn top(&self, limit: usize) -> &[&'a MovieAggregate] {
        let end = limit.min(self.movies.len());
        &self.movies[..end]
    }
}

/// Holds the rankers to run, in report order.
///
/// ## Usage
/// ```ignore
/// let engine = RankingEngine::new()
///     .add_ranker(AverageRatingRanker)
///     .add_ranker(ReviewCountRanker);
///
/// for ranking in engine.rank_all(catalog.movies()) {
///     println!("{}: {:?}", ranking.ranker.name(), ranking.top(10));
/// }
/// ```
pub struct RankingEngine {
    rankers: Vec<Box<dyn Ranker>>,
}

impl RankingEngine {
    /// Create an engine with no rankers.
    pub fn new() -> Self {
        Self {
            rankers: Vec::new(),
        }
    }

    /// By average rating, then by review count
    pub fn standard() -> Self {
        Self::new()
            .add_ranker(AverageRatingRanker)
            .add_ranker(ReviewCountRanker)
    }

    /// Add a ranker (builder pattern).
    pub fn add_ranker(mut self, ranker: impl Ranker + 'static) -> Self {
        self.rankers.push(Box::new(ranker));
        self
    }

    pub fn rankers(&self) -> impl Iterator<Item = &dyn Ranker> {
        self.rankers.iter().map(|r| r.as_ref())
    }

    /// Run every ranker over `movies`, in the order they were added.
    pub fn rank_all<'a>(&'a self, movies: &'a [MovieAggregate]) -> Vec<Ranking<'a>> {
        self.rankers
            .iter()
            .map(|ranker| {
                tracing::debug!("Ranking {} movies by {}", movies.len(), ranker.name());
                Ranking {
                    ranker: ranker.as_ref(),
                    movies: ranker.rank(movies),
                }
            })
            .collect()
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::standard()
    }
}
