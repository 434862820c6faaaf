use std::collections::HashSet;

use crate::error::{AppError, AppResult};

use super::{Movie, MovieRecord};

/// Ordered, read-only collection of movies. Order is source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Builds a catalog, assigning each movie its position as id.
    ///
    /// Ratings must be finite and within `[0, 10]`. Duplicate titles are kept
    /// but logged, since lookups resolve to the first match.
    pub fn from_records(records: Vec<MovieRecord>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        let mut movies = Vec::with_capacity(records.len());

        for (id, record) in records.into_iter().enumerate() {
            if !record.rating.is_finite() || !(0.0..=10.0).contains(&record.rating) {
                return Err(AppError::Catalog(format!(
                    "Rating {} for '{}' is outside 0-10",
                    record.rating, record.title
                )));
            }

            if !seen.insert(record.title.clone()) {
                tracing::warn!(
                    title = %record.title,
                    id,
                    "Duplicate title in catalog, lookups resolve to the first entry"
                );
            }

            movies.push(record.into_movie(id));
        }

        Ok(Self { movies })
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Exact, case-sensitive title lookup. First match wins.
    pub fn find_by_title(&self, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.title == title)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
