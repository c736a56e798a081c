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

    /// Newline-delimited genre catalog, one label per line
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Number of genres returned when the request does not ask for a specific count
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,

    /// Fit the TF-IDF vector space once at startup instead of once per request
    #[serde(default)]
    pub vector_space_cache: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_catalog_path() -> String {
    "data/genres.txt".to_string()
}

fn default_top_n() -> usize {
    3
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        if config.default_top_n == 0 {
            anyhow::bail!("DEFAULT_TOP_N must be at least 1");
        }

        Ok(config)
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            catalog_path: default_catalog_path(),
            default_top_n: default_top_n(),
            vector_space_cache: false,
        }
    }
}
