//! Ranking and reporting over an aggregated movie catalog.
//!
//! This crate provides:
//! - the `Ranker` trait and the two standard rankers
//! - `RankingEngine` for running several rankers over one catalog
//! - `Report` for the top-N text and JSON output
//!
//! ## Example Usage
//! ```ignore
//! use ranking::{RankingEngine, Report, DEFAULT_TOP};
//!
//! let engine = RankingEngine::standard();
//! let report = Report::build(&catalog, &engine, DEFAULT_TOP);
//! report.write_text(&mut std::io::stdout().lock())?;
//! ```

pub mod traits;
pub mod rankers;
pub mod engine;
pub mod report;

// Re-export main types
pub use traits::{Metric, Ranker};
pub use engine::{Ranking, RankingEngine};
pub use rankers::{AverageRatingRanker, ReviewCountRanker};
pub use report::{DEFAULT_TOP, Report, ReportEntry, ReportSection};
