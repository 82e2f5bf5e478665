//! # Data Loader Crate
//!
//! Loads a movie catalog and a review stream (both CSV with a header line)
//! and folds the reviews into per-movie aggregates.
//!
//! ## Main Components
//!
//! - **types**: `MovieAggregate`, `Review` and the id aliases
//! - **parser**: turn CSV lines into those types
//! - **index**: `MovieCatalog`, the aggregate store with its id index
//! - **error**: `DataLoadError` and the crate `Result` alias
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::MovieCatalog;
//! use std::path::Path;
//!
//! let catalog = MovieCatalog::load_from_files(
//!     Path::new("movies.csv"),
//!     Path::new("reviews.csv"),
//! )?;
//!
//! println!("Movies: {}", catalog.movie_count());
//! println!("Reviews {}", catalog.reviews_seen());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::MovieCatalog;
pub use types::{MovieAggregate, MovieId, Review, UserId};
