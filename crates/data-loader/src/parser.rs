//! Parser for the catalog and review CSV files.
//!
//! - movies:  `MovieID,MovieName,PubYear`
//! - reviews: `MovieID,UserID,Rating,ReviewDate`
//!
//! Both files start with a header line that is skipped without inspection.
//! Every later line is a record; a blank line is malformed like any other.
//! There is no quoting or escaping: the last field of each format takes the
//! rest of the line, so it is the only one that could ever hold a comma.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::{FromStr, SplitN};

/// Open an input file, naming it in the error if that fails
pub fn open_source(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| DataLoadError::SourceUnavailable {
            path: path.display().to_string(),
            source,
        })
}

/// Read every line of `reader`, decoding invalid UTF-8 lossily.
///
/// Catalog exports are not always UTF-8 (Latin-1 titles are common), and a
/// mangled character in a title is better than refusing the whole file.
fn read_lines_lossy<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for chunk in reader.split(b'\n') {
        let mut bytes = chunk?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        lines.push(String::from_utf8_lossy(&bytes).into_owned());
    }
    Ok(lines)
}

/// Data lines of a file: everything after the header, blank lines included.
/// Yields `(line_no, line)` with 1-based physical line numbers.
fn data_lines(lines: &[String]) -> impl Iterator<Item = (usize, &str)> {
    lines
        .iter()
        .enumerate()
        .skip(1)
        .map(|(idx, line)| (idx + 1, line.as_str()))
}

/// Pulls named fields out of one line and reports problems with file/line context
struct FieldReader<'a> {
    parts: SplitN<'a, char>,
    file: &'a str,
    line: usize,
}

impl<'a> FieldReader<'a> {
    fn new(text: &'a str, field_count: usize, file: &'a str, line: usize) -> Self {
        Self {
            parts: text.splitn(field_count, ','),
            file,
            line,
        }
    }

    fn error(&self, reason: String) -> DataLoadError {
        DataLoadError::FormatError {
            file: self.file.to_string(),
            line: self.line,
            reason,
        }
    }

    /// Next raw field, untouched
    fn text(&mut self, name: &str) -> Result<&'a str> {
        match self.parts.next() {
            Some(field) => Ok(field),
            None => Err(self.error(format!("Missing {}", name))),
        }
    }

    /// Next field parsed as an integer, surrounding whitespace ignored
    fn integer<T>(&mut self, name: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.text(name)?;
        raw.trim()
            .parse()
            .map_err(|e| self.error(format!("Invalid {} {:?}: {}", name, raw, e)))
    }
}

/// Parse a movie catalog.
///
/// Produces one aggregate per data line, in file order. Duplicate ids are
/// kept as separate aggregates.
pub fn parse_movies<R: BufRead>(reader: R, file: &str) -> Result<Vec<MovieAggregate>> {
    let lines = read_lines_lossy(reader)?;
    let mut movies = Vec::new();

    for (line_no, line) in data_lines(&lines) {
        let mut fields = FieldReader::new(line, 3, file, line_no);

        let id = fields.integer("MovieID")?;
        let name = fields.text("MovieName")?;
        let year = fields.integer("PubYear")?;

        movies.push(MovieAggregate::new(id, name, year));
    }

    Ok(movies)
}

/// Parse a review stream.
pub fn parse_reviews<R: BufRead>(reader: R, file: &str) -> Result<Vec<Review>> {
    let lines = read_lines_lossy(reader)?;
    let mut reviews = Vec::new();

    for (line_no, line) in data_lines(&lines) {
        let mut fields = FieldReader::new(line, 4, file, line_no);

        let review = Review {
            movie_id: fields.integer("MovieID")?,
            user_id: fields.integer("UserID")?,
            rating: fields.integer("Rating")?,
            review_date: fields.text("ReviewDate")?.trim().to_string(),
        };

        reviews.push(review);
    }

    Ok(reviews)
}

/// Open and parse a movie catalog file
pub fn parse_movies_file(path: &Path) -> Result<Vec<MovieAggregate>> {
    let reader = open_source(path)?;
    parse_movies(reader, &path.display().to_string())
}

/// Open and parse a review file
pub fn parse_reviews_file(path: &Path) -> Result<Vec<Review>> {
    let reader = open_source(path)?;
    parse_reviews(reader, &path.display().to_string())
}
