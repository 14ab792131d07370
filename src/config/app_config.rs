use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub upstream: UpstreamConfig,
    pub auth: AuthConfig,
    pub cache: CacheConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Stock data API endpoints per hosting region
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub us_east_url: String,
    pub eu_url: String,
    pub api_key: String,
}

/// Hosted auth backend location
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    pub max_capacity: u64,
    pub screener_buffer: usize,
}

/// Site identity used for redirects, cookies and notification assets
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub origin: String,
    pub default_region: String,
    pub asset_version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            us_east_url: "http://localhost:8000".to_string(),
            eu_url: "http://localhost:8000".to_string(),
            api_key: String::new(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8090".to_string(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            screener_buffer: 64,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: "https://stocknear.com".to_string(),
            default_region: "eu".to_string(),
            asset_version: "v1".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
