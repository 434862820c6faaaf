use std::path::{Path, PathBuf};

use crate::{
    error::{AppError, AppResult},
    models::MovieRecord,
    services::sources::CatalogSource,
};

/// Catalog read from a JSON array of movie records
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub fn parse_records(raw: &str) -> AppResult<Vec<MovieRecord>> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::Catalog(format!("Invalid catalog JSON: {}", e)))
}

#[async_trait::async_trait]
impl CatalogSource for JsonFileSource {
    async fn load(&self) -> AppResult<Vec<MovieRecord>> {
        tracing::debug!(path = %self.path.display(), "Reading catalog file");

        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::Catalog(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        parse_records(&raw)
    }

    fn name(&self) -> &'static str {
        "json_file"
    }
}
