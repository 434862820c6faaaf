use crate::{
    error::AppResult,
    models::{Catalog, GenreField, MovieRecord},
    services::sources::CatalogSource,
};

/// (title, genres, rating, description, year, poster path)
const MOVIES: &[(&str, &str, f64, &str, i32, &str)] = &[
    (
        "The Shawshank Redemption",
        "Drama",
        9.3,
        "Two imprisoned men bond over a number of years.",
        1994,
        "/q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg",
    ),
    (
        "The Godfather",
        "Crime, Drama",
        9.2,
        "The aging patriarch of an organized crime dynasty transfers control.",
        1972,
        "/3bhkrj58Vtu7enYsRolD1fZdja1.jpg",
    ),
    (
        "The Dark Knight",
        "Action, Crime, Drama",
        9.0,
        "The Dark Knight of Gotham City begins his war on crime.",
        2008,
        "/qJ2tW6WMUDux911r6m7haRef0WH.jpg",
    ),
    (
        "Pulp Fiction",
        "Crime, Drama",
        8.9,
        "The lives of two mob hitmen, a boxer, and a pair of diner bandits intertwine.",
        1994,
        "/d5iIlFn5s0ImszYzBPb8JPIfbXD.jpg",
    ),
    (
        "Fight Club",
        "Drama",
        8.8,
        "An insomniac office worker and a devil-may-care soapmaker form an underground fight club.",
        1999,
        "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
    ),
    (
        "Inception",
        "Action, Adventure, Sci-Fi",
        8.8,
        "A thief who steals corporate secrets through dream-sharing technology.",
        2010,
        "/9gk7adHYeDvHkCSEqAvQNLV5Uge.jpg",
    ),
    (
        "The Matrix",
        "Action, Sci-Fi",
        8.7,
        "A computer programmer discovers a mysterious world.",
        1999,
        "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
    ),
    (
        "Goodfellas",
        "Biography, Crime, Drama",
        8.7,
        "The story of Henry Hill and his life in the mob.",
        1990,
        "/aKuFiU82s5ISJpGZp7YkIr3kCUd.jpg",
    ),
    (
        "The Silence of the Lambs",
        "Crime, Drama, Thriller",
        8.6,
        "A young FBI cadet must receive help from an incarcerated cannibal killer.",
        1991,
        "/rplLJ2hPcOQmkFhTqUte0MkEaO2.jpg",
    ),
    (
        "Interstellar",
        "Adventure, Drama, Sci-Fi",
        8.6,
        "A team of explorers travel through a wormhole in space.",
        2014,
        "/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg",
    ),
];

/// Built-in ten-movie catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

pub fn movie_records() -> Vec<MovieRecord> {
    MOVIES
        .iter()
        .map(
            |&(title, genres, rating, description, year, poster_path)| MovieRecord {
                title: title.to_string(),
                description: description.to_string(),
                genres: GenreField::Csv(genres.to_string()),
                rating,
                year,
                poster_path: poster_path.to_string(),
            },
        )
        .collect()
}

/// The embedded catalog, built synchronously
pub fn catalog() -> AppResult<Catalog> {
    Catalog::from_records(movie_records())
}

#[async_trait::async_trait]
impl CatalogSource for EmbeddedSource {
    async fn load(&self) -> AppResult<Vec<MovieRecord>> {
        Ok(movie_records())
    }

    fn name(&self) -> &'static str {
        "embedded"
    }
}
