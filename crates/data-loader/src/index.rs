//! MovieCatalog building and review aggregation.
//!
//! The catalog owns every `MovieAggregate` in load order and an id index
//! built once after loading, so folding a review in is a single hash lookup
//! instead of a scan over all movies.

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// All movies of one run together with their review totals.
///
/// The set of movies is fixed once the catalog is built; reviews only change
/// the counters inside existing aggregates.
#[derive(Debug, Default)]
pub struct MovieCatalog {
    /// Aggregates in catalog file order
    movies: Vec<MovieAggregate>,
    /// Position in `movies` of the first aggregate carrying each id
    id_index: HashMap<MovieId, usize>,
    /// Review lines processed so far, matched or not
    reviews_seen: usize,
}

impl MovieCatalog {
    /// Build a catalog from already parsed movies.
    ///
    /// When an id appears more than once, the first occurrence is the one
    /// that receives reviews. Later duplicates stay in the catalog with no
    /// reviews.
    pub fn new(movies: Vec<MovieAggregate>) -> Self {
        let mut id_index = HashMap::with_capacity(movies.len());
        for (position, movie) in movies.iter().enumerate() {
            if id_index.contains_key(&movie.id) {
                warn!(
                    movie_id = movie.id,
                    name = %movie.name,
                    "Duplicate movie id in catalog; reviews go to the first occurrence"
                );
                continue;
            }
            id_index.insert(movie.id, position);
        }

        Self {
            movies,
            id_index,
            reviews_seen: 0,
        }
    }

    /// Load the catalog and fold in the reviews from the two input files.
    ///
    /// Fails on the first file that cannot be opened or line that cannot be
    /// parsed; nothing is returned for a partially read input.
    #[instrument]
    pub fn load_from_files(movies_path: &Path, reviews_path: &Path) -> Result<Self> {
        let movies = parser::parse_movies_file(movies_path)?;
        info!("Loaded {} movies from {}", movies.len(), movies_path.display());

        let mut catalog = Self::new(movies);

        let reviews = parser::parse_reviews_file(reviews_path)?;
        catalog.apply_reviews(&reviews);
        info!(
            "Processed {} reviews from {}",
            catalog.reviews_seen(),
            reviews_path.display()
        );

        Ok(catalog)
    }

    /// Same as [`MovieCatalog::load_from_files`], from arbitrary readers.
    pub fn load_from_readers<M: BufRead, R: BufRead>(
        movies: M,
        reviews: R,
    ) -> Result<Self> {
        let mut catalog = Self::new(parser::parse_movies(movies, "movies")?);
        let reviews = parser::parse_reviews(reviews, "reviews")?;
        catalog.apply_reviews(&reviews);
        Ok(catalog)
    }

    /// Fold a batch of reviews into the matching movies.
    ///
    /// Every review counts towards `reviews_seen`; reviews whose movie id is
    /// not in the catalog change nothing else. Returns how many reviews were
    /// seen in this batch.
    pub fn apply_reviews(&mut self, reviews: &[Review]) -> usize {
        let mut matched = 0usize;
        for review in reviews {
            if self.record_review(review) {
                matched += 1;
            }
        }

        debug!(
            seen = reviews.len(),
            matched,
            unmatched = reviews.len() - matched,
            "Applied review batch"
        );
        reviews.len()
    }

    /// Fold a single review in. Returns whether its movie was found.
    pub fn record_review(&mut self, review: &Review) -> bool {
        self.reviews_seen += 1;
        match self.id_index.get(&review.movie_id) {
            Some(&position) => {
                self.movies[position].record_rating(review.rating);
                true
            }
            None => false,
        }
    }

    /// Look up the aggregate that receives reviews for `id`
    pub fn get_movie(&self, id: MovieId) -> Option<&MovieAggregate> {
        self.id_index.get(&id).map(|&position| &self.movies[position])
    }

    /// All aggregates in catalog file order
    pub fn movies(&self) -> &[MovieAggregate] {
        &self.movies
    }

    /// Number of aggregates (one per catalog line, duplicates included)
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Review lines processed so far, whether or not they matched a movie
    pub fn reviews_seen(&self) -> usize {
        self.reviews_seen
    }

    /// Reviews that were folded into some movie
    pub fn reviews_matched(&self) -> usize {
        self.movies.iter().map(|m| m.review_count() as usize).sum()
    }
}
