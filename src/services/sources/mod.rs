//! Movie catalog sources
//!
//! The catalog is loaded once at startup from a pluggable source: the
//! embedded table or a JSON file. Sources only produce raw records;
//! [`load_catalog`] assigns ids and validates them.

use crate::{
    config::Config,
    error::AppResult,
    models::{Catalog, MovieRecord},
};

pub mod embedded;
pub mod json_file;

pub use embedded::EmbeddedSource;
pub use json_file::JsonFileSource;

/// Trait for catalog sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Read every movie record, in catalog order
    async fn load(&self) -> AppResult<Vec<MovieRecord>>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}

/// Picks the JSON file source when `catalog_path` is set, the embedded table otherwise
pub fn from_config(config: &Config) -> Box<dyn CatalogSource> {
    match &config.catalog_path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(EmbeddedSource),
    }
}

/// Loads and validates the catalog from `source`
pub async fn load_catalog(source: &dyn CatalogSource) -> AppResult<Catalog> {
    let records = source.load().await?;
    let catalog = Catalog::from_records(records)?;

    if catalog.is_empty() {
        tracing::warn!(source = source.name(), "Catalog source returned no movies");
    }

    tracing::info!(
        source = source.name(),
        movies = catalog.len(),
        "Loaded movie catalog"
    );

    Ok(catalog)
}
