//! Top-N reports over a ranked catalog.
//!
//! A `Report` is plain data: counts plus one section per ranker. It can be
//! written in the classic text layout or as JSON.

use crate::engine::RankingEngine;
use crate::traits::Metric;
use data_loader::{MovieCatalog, MovieId};
use serde::Serialize;
use std::io::{self, Write};

/// Default number of movies listed per ranking
pub const DEFAULT_TOP: usize = 10;

/// One line of a ranking section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    /// 1-based position
    pub rank: usize,
    pub id: MovieId,
    pub name: String,
    pub publication_year: i32,
    pub metric: Metric,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub title: String,
    pub entries: Vec<ReportEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Movies in the catalog
    pub movies: usize,
    /// Reviews seen, matched or not
    pub reviews: usize,
    pub rankings: Vec<ReportSection>,
}

impl Report {
    /// Rank the catalog with every ranker of `engine` and keep the top `limit`
    /// of each. A catalog smaller than `limit` yields shorter sections.
    pub fn build(catalog: &MovieCatalog, engine: &RankingEngine, limit: usize) -> Self {
        let rankings = engine
            .rank_all(catalog.movies())
            .iter()
            .map(|ranking| ReportSection {
                title: format!("Top-{} by {}", limit, ranking.ranker.name()),
                entries: ranking
                    .top(limit)
                    .iter()
                    .enumerate()
                    .map(|(idx, movie)| ReportEntry {
                        rank: idx + 1,
                        id: movie.id,
                        name: movie.name.clone(),
                        publication_year: movie.publication_year,
                        metric: ranking.ranker.metric(movie),
                    })
                    .collect(),
            })
            .collect();

        Self {
            movies: catalog.movie_count(),
            reviews: catalog.reviews_seen(),
            rankings,
        }
    }

    /// Write the text report:
    ///
    /// ```text
    /// Movies: 2
    /// Reviews 4
    /// **Top-10 by Rating**
    /// 1: 4.000000,'A'
    /// ```
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Movies: {}", self.movies)?;
        writeln!(out, "Reviews {}", self.reviews)?;
        for section in &self.rankings {
            writeln!(out, "**{}**", section.title)?;
            for entry in &section.entries {
                writeln!(out, "{}: {},'{}'", entry.rank, entry.metric, entry.name)?;
            }
        }
        Ok(())
    }

    /// Write the report as pretty-printed JSON followed by a newline
    pub fn write_json<W: Write>(&self, out: &mut W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out).map_err(serde_json::Error::io)
    }
}
