use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt::Display};

/// A movie in the catalog. Immutable once the catalog is built.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Movie {
    /// Position in the catalog, stable for the lifetime of the process
    pub id: usize,
    pub title: String,
    pub description: String,
    pub genres: BTreeSet<String>,
    /// Rating in `[0, 10]`
    pub rating: f64,
    pub year: i32,
    /// Path of the poster image relative to the image host
    pub poster_path: String,
}

impl Movie {
    pub fn has_any_genre(&self, genres: &BTreeSet<String>) -> bool {
        genres.iter().any(|g| self.genres.contains(g))
    }
}

impl Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.year)
    }
}

/// Genres as they appear in a catalog source: either a list or a
/// comma-separated string such as `"Action, Crime, Drama"`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GenreField {
    List(Vec<String>),
    Csv(String),
}

impl GenreField {
    pub fn into_set(self) -> BTreeSet<String> {
        let raw: Vec<String> = match self {
            GenreField::List(list) => list,
            GenreField::Csv(csv) => csv.split(',').map(str::to_string).collect(),
        };

        raw.into_iter()
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty())
            .collect()
    }
}

/// Raw movie entry read from a catalog source, before ids are assigned
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub genres: GenreField,
    pub rating: f64,
    pub year: i32,
    #[serde(default)]
    pub poster_path: String,
}

impl MovieRecord {
    pub(crate) fn into_movie(self, id: usize) -> Movie {
        Movie {
            id,
            title: self.title,
            description: self.description,
            genres: self.genres.into_set(),
            rating: self.rating,
            year: self.year,
            poster_path: self.poster_path,
        }
    }
}
