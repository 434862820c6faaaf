use std::collections::BTreeSet;

use crate::{
    error::{AppError, AppResult},
    models::{Catalog, Movie},
    services::search::filter_by_genre_and_rating,
};

const STAR: &str = "\u{2b50}";
const HALF_STAR: &str = "\u{bd}";

/// Every genre in the catalog, sorted and de-duplicated
pub fn all_genres(catalog: &Catalog) -> Vec<String> {
    catalog
        .iter()
        .flat_map(|movie| movie.genres.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Rejects ratings that cannot be compared against the 0-10 scale
pub fn validate_rating(rating: f64) -> AppResult<f64> {
    if rating.is_finite() && (0.0..=10.0).contains(&rating) {
        Ok(rating)
    } else {
        Err(AppError::InvalidInput(format!(
            "min_rating must be between 0 and 10, got {}",
            rating
        )))
    }
}

/// The first `limit` movies passing the genre and rating filter, in catalog order.
pub fn top_rated<'a>(
    catalog: &'a Catalog,
    genres: &BTreeSet<String>,
    min_rating: f64,
    limit: usize,
) -> AppResult<Vec<&'a Movie>> {
    let min_rating = validate_rating(min_rating)?;
    let mut movies = filter_by_genre_and_rating(catalog, genres, min_rating);
    movies.truncate(limit);
    Ok(movies)
}

/// One star per whole rating point, plus a half star when the fraction is at least .5
pub fn rating_stars(rating: f64) -> String {
    if !rating.is_finite() || rating <= 0.0 {
        return String::new();
    }

    let mut stars = STAR.repeat(rating.floor() as usize);
    if rating.fract() >= 0.5 {
        stars.push_str(HALF_STAR);
    }
    stars
}

pub fn poster_url(image_base_url: &str, poster_path: &str) -> String {
    format!("{}{}", image_base_url, poster_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sources::embedded;

    #[test]
    fn test_all_genres_sorted_unique() {
        let catalog = embedded::catalog().unwrap();
        assert_eq!(
            all_genres(&catalog),
            vec![
                "Action",
                "Adventure",
                "Biography",
                "Crime",
                "Drama",
                "Sci-Fi",
                "Thriller"
            ]
        );
    }

    #[test]
    fn test_top_rated_respects_limit() {
        let catalog = embedded::catalog().unwrap();
        let movies = top_rated(&catalog, &BTreeSet::new(), 8.0, 5).unwrap();
        assert_eq!(movies.len(), 5);
        assert_eq!(movies[0].title, "The Shawshank Redemption");
        assert_eq!(movies[4].title, "Fight Club");
    }

    #[test]
    fn test_top_rated_rejects_bad_rating() {
        let catalog = embedded::catalog().unwrap();
        assert!(matches!(
            top_rated(&catalog, &BTreeSet::new(), 11.0, 5),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            top_rated(&catalog, &BTreeSet::new(), -0.1, 5),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rating_stars() {
        assert_eq!(rating_stars(8.7), format!("{}{}", STAR.repeat(8), HALF_STAR));
        assert_eq!(rating_stars(9.3), STAR.repeat(9));
        assert_eq!(rating_stars(0.0), "");
    }

    #[test]
    fn test_poster_url() {
        assert_eq!(
            poster_url("https://image.tmdb.org/t/p/w500", "/abc.jpg"),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
    }
}
