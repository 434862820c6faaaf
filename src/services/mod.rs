pub mod browse;
pub mod recommender;
pub mod search;
pub mod sources;
pub mod tokenizer;

pub use recommender::{rank_similar, recommend, Recommendation, TermFrequencyMatrix};
pub use search::{filter_by_genre_and_rating, search};
