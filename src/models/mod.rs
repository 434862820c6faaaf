mod catalog;
mod movie;

pub use catalog::Catalog;
pub use movie::{GenreField, Movie, MovieRecord};
