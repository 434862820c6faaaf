//! Content-based "similar movies" lookup.
//!
//! Each call builds a term-frequency matrix over every description in the
//! catalog, then ranks movies by cosine similarity to the target's row.
//! Nothing is cached between calls.

use std::collections::BTreeMap;

use crate::{
    error::{AppError, AppResult},
    models::{Catalog, Movie},
    services::tokenizer::tokenize,
};

/// Raw term counts, one row per document, one column per vocabulary term
#[derive(Debug, Clone, PartialEq)]
pub struct TermFrequencyMatrix {
    vocabulary: Vec<String>,
    rows: Vec<Vec<u32>>,
}

impl TermFrequencyMatrix {
    pub fn build<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let tokenized: Vec<Vec<String>> = documents.into_iter().map(tokenize).collect();

        // Sorted vocabulary gives deterministic column order.
        let mut columns: BTreeMap<&str, usize> = BTreeMap::new();
        for term in tokenized.iter().flatten() {
            columns.entry(term.as_str()).or_default();
        }
        for (column, index) in columns.values_mut().enumerate() {
            *index = column;
        }

        let rows = tokenized
            .iter()
            .map(|terms| {
                let mut row = vec![0u32; columns.len()];
                for term in terms {
                    row[columns[term.as_str()]] += 1;
                }
                row
            })
            .collect();

        let vocabulary = columns.keys().map(|t| t.to_string()).collect();

        Self { vocabulary, rows }
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn row(&self, index: usize) -> Option<&[u32]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cosine similarity between rows `a` and `b`
    pub fn similarity(&self, a: usize, b: usize) -> f64 {
        match (self.row(a), self.row(b)) {
            (Some(a), Some(b)) => cosine_similarity(a, b),
            _ => 0.0,
        }
    }
}

/// `dot(a, b) / (|a| * |b|)`, or 0 when either vector is all zeros.
pub fn cosine_similarity(a: &[u32], b: &[u32]) -> f64 {
    let squared_a = dot(a, a);
    let squared_b = dot(b, b);

    if squared_a == 0 || squared_b == 0 {
        return 0.0;
    }

    // A single square root over the product keeps identical rows at exactly 1.0
    let denominator = ((squared_a as u128 * squared_b as u128) as f64).sqrt();
    (dot(a, b) as f64 / denominator).min(1.0)
}

fn dot(a: &[u32], b: &[u32]) -> u64 {
    a.iter().zip(b).map(|(&x, &y)| x as u64 * y as u64).sum()
}

/// A movie paired with its similarity to the requested target
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<'a> {
    pub movie: &'a Movie,
    pub similarity: f64,
}

/// Every movie except the target, most similar first.
///
/// Ties keep catalog order. The target is resolved by exact title; with
/// duplicate titles the first one is used.
pub fn rank_similar<'a>(
    catalog: &'a Catalog,
    target_title: &str,
) -> AppResult<Vec<Recommendation<'a>>> {
    if catalog.is_empty() {
        return Err(AppError::EmptyCatalog);
    }

    let target = catalog.find_by_title(target_title).ok_or_else(|| {
        AppError::NotFound(format!("Movie '{}' is not in the catalog", target_title))
    })?;

    let matrix = TermFrequencyMatrix::build(catalog.iter().map(|m| m.description.as_str()));

    tracing::debug!(
        target = %target.title,
        vocabulary = matrix.vocabulary().len(),
        movies = matrix.len(),
        "Built term-frequency matrix"
    );

    let mut ranked: Vec<Recommendation<'a>> = catalog
        .iter()
        .filter(|movie| movie.id != target.id)
        .map(|movie| Recommendation {
            movie,
            similarity: matrix.similarity(target.id, movie.id),
        })
        .collect();

    // sort_by is stable, so equal scores stay in catalog order
    ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    Ok(ranked)
}

/// The `k` movies most similar to `target_title`.
pub fn recommend<'a>(
    catalog: &'a Catalog,
    target_title: &str,
    k: usize,
) -> AppResult<Vec<Recommendation<'a>>> {
    let mut ranked = rank_similar(catalog, target_title)?;
    ranked.truncate(k);
    Ok(ranked)
}
