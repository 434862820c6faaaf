use std::collections::BTreeSet;

use crate::models::{Catalog, Movie};

/// Movies whose title or description contains `query`, ignoring case.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Movie> {
    let needle = query.to_lowercase();

    catalog
        .iter()
        .filter(|movie| {
            movie.title.to_lowercase().contains(&needle)
                || movie.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Movies rated at least `min_rating` that carry one of `genres`.
/// An empty genre set accepts every genre.
pub fn filter_by_genre_and_rating<'a>(
    catalog: &'a Catalog,
    genres: &BTreeSet<String>,
    min_rating: f64,
) -> Vec<&'a Movie> {
    catalog
        .iter()
        .filter(|movie| movie.rating >= min_rating)
        .filter(|movie| genres.is_empty() || movie.has_any_genre(genres))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sources::embedded;

    fn titles(movies: &[&Movie]) -> Vec<String> {
        movies.iter().map(|m| m.title.clone()).collect()
    }

    fn genres(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|g| g.to_string()).collect()
    }

    #[test]
    fn test_search_title_case_insensitive() {
        let catalog = embedded::catalog().unwrap();
        let results = search(&catalog, "dark knight");
        assert_eq!(titles(&results), vec!["The Dark Knight"]);
    }

    #[test]
    fn test_search_matches_description() {
        let catalog = embedded::catalog().unwrap();
        let results = search(&catalog, "MOB");
        assert_eq!(titles(&results), vec!["Pulp Fiction", "Goodfellas"]);
    }

    #[test]
    fn test_search_no_match() {
        let catalog = embedded::catalog().unwrap();
        assert!(search(&catalog, "zombie").is_empty());
    }

    #[test]
    fn test_filter_by_rating_only() {
        let catalog = embedded::catalog().unwrap();
        let results = filter_by_genre_and_rating(&catalog, &BTreeSet::new(), 9.0);
        assert_eq!(
            titles(&results),
            vec!["The Shawshank Redemption", "The Godfather", "The Dark Knight"]
        );
    }

    #[test]
    fn test_filter_by_genre_intersection() {
        let catalog = embedded::catalog().unwrap();
        let wanted = genres(&["Sci-Fi", "Thriller"]);
        let results = filter_by_genre_and_rating(&catalog, &wanted, 0.0);
        assert_eq!(
            titles(&results),
            vec![
                "Inception",
                "The Matrix",
                "The Silence of the Lambs",
                "Interstellar"
            ]
        );
    }

    #[test]
    fn test_filter_genre_and_rating_combined() {
        let catalog = embedded::catalog().unwrap();
        let results = filter_by_genre_and_rating(&catalog, &genres(&["Crime"]), 9.0);
        assert_eq!(titles(&results), vec!["The Godfather", "The Dark Knight"]);
    }

    #[test]
    fn test_filter_unknown_genre_empty() {
        let catalog = embedded::catalog().unwrap();
        assert!(filter_by_genre_and_rating(&catalog, &genres(&["Western"]), 0.0).is_empty());
    }
}
