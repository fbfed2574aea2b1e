use std::path::PathBuf;
use std::time::Duration;

use cubekit_catalog::ScryfallConfig;
use cubekit_core::error::CoreError;
use cubekit_core::translation::TranslationDictionary;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// SQLite connection string (default: `sqlite://data/cubes.db`).
    pub database_url: String,
    /// Card catalog client settings.
    pub catalog: CatalogConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3001`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATABASE_URL`         | `sqlite://data/cubes.db`   |
    ///
    /// Catalog settings are read by [`CatalogConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/cubes.db".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            catalog: CatalogConfig::from_env(),
        }
    }
}

/// Card catalog settings.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog base URL (default: `https://api.scryfall.com`).
    pub base_url: String,
    /// Per-request timeout in seconds (default: `10`).
    pub timeout_secs: u64,
    /// Language of the localized overlay (default: `ja`).
    pub locale: String,
    /// JSON translation dictionary replacing the bundled one, if set.
    pub translations_path: Option<PathBuf>,
}

impl CatalogConfig {
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `SCRYFALL_API_BASE`    | `https://api.scryfall.com` |
    /// | `CATALOG_TIMEOUT_SECS` | `10`                       |
    /// | `CATALOG_LOCALE`       | `ja`                       |
    /// | `TRANSLATIONS_PATH`    | unset (bundled dictionary) |
    pub fn from_env() -> Self {
        let base_url = std::env::var("SCRYFALL_API_BASE")
            .unwrap_or_else(|_| cubekit_catalog::scryfall::DEFAULT_BASE_URL.into());

        let timeout_secs: u64 = std::env::var("CATALOG_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("CATALOG_TIMEOUT_SECS must be a valid u64");

        let locale = std::env::var("CATALOG_LOCALE").unwrap_or_else(|_| "ja".into());

        let translations_path = std::env::var("TRANSLATIONS_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Self {
            base_url,
            timeout_secs,
            locale,
            translations_path,
        }
    }

    pub fn scryfall(&self) -> ScryfallConfig {
        ScryfallConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..ScryfallConfig::default()
        }
    }

    /// The translation dictionary: the configured file if any, otherwise
    /// the bundled table.
    pub fn load_dictionary(&self) -> Result<TranslationDictionary, CoreError> {
        let Some(path) = &self.translations_path else {
            return Ok(TranslationDictionary::builtin());
        };

        let json = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Internal(format!("Failed to read translations file {}: {e}", path.display()))
        })?;
        TranslationDictionary::from_json(&json)
    }
}
