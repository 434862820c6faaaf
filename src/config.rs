use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to a JSON movie catalog. The embedded catalog is used when unset.
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Base URL that poster paths are appended to
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Minimum rating applied to the top-rated list when the request gives none
    #[serde(default = "default_min_rating")]
    pub default_min_rating: f64,

    /// Maximum number of movies in the top-rated list
    #[serde(default = "default_top_rated_limit")]
    pub top_rated_limit: usize,

    /// Number of similar movies returned when the request gives no `k`
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_min_rating() -> f64 {
    8.0
}

fn default_top_rated_limit() -> usize {
    5
}

fn default_recommendation_count() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            catalog_path: None,
            image_base_url: default_image_base_url(),
            default_min_rating: default_min_rating(),
            top_rated_limit: default_top_rated_limit(),
            recommendation_count: default_recommendation_count(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
