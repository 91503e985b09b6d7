//! Configuration management for the todo server
//!
//! Sensible defaults, each overridable through a `TODO_*` environment variable.

use std::env;
use std::path::PathBuf;
use tracing::info;

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Allowed origins (empty = allow all)
    pub allowed_origins: Vec<String>,
    /// Max age for preflight cache (seconds)
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_age_seconds: 86400,
        }
    }
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(origins) = env::var("TODO_CORS_ORIGINS") {
            config.allowed_origins = parse_list(&origins);
        }

        if let Ok(val) = env::var("TODO_CORS_MAX_AGE") {
            if let Ok(n) = val.parse() {
                config.max_age_seconds = n;
            }
        }

        config
    }

    pub fn is_restricted(&self) -> bool {
        !self.allowed_origins.is_empty()
    }

    /// Convert to tower-http CorsLayer
    pub fn to_layer(&self) -> tower_http::cors::CorsLayer {
        use axum::http::{HeaderValue, Method};
        use tower_http::cors::{AllowOrigin, Any, CorsLayer};

        let mut layer = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers(Any)
            .max_age(std::time::Duration::from_secs(self.max_age_seconds));

        if self.allowed_origins.is_empty() {
            layer = layer.allow_origin(Any);
        } else {
            let mut valid = Vec::new();
            for origin in &self.allowed_origins {
                match origin.parse::<HeaderValue>() {
                    Ok(v) => valid.push(v),
                    Err(_) => tracing::warn!("CORS: Invalid origin '{}' - skipping", origin),
                }
            }

            if valid.is_empty() {
                // Never fall back to permissive when the operator asked for a list
                tracing::error!(
                    "CORS: All {} configured origin(s) failed to parse. \
                     Rejecting all cross-origin requests. Fix TODO_CORS_ORIGINS.",
                    self.allowed_origins.len()
                );
            }
            layer = layer.allow_origin(AllowOrigin::list(valid));
        }

        layer
    }
}

/// Server configuration loaded from environment with defaults
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: 127.0.0.1)
    pub host: String,

    /// Listen port (default: 3000)
    pub port: u16,

    /// Directory served for every non-API path (default: ./static)
    pub static_dir: PathBuf,

    /// Maximum concurrent requests (default: 200)
    pub max_concurrent_requests: usize,

    /// Request timeout in seconds (default: 60)
    pub request_timeout_secs: u64,

    pub is_production: bool,

    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: PathBuf::from("static"),
            max_concurrent_requests: 200,
            request_timeout_secs: 60,
            is_production: false,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults
    #[allow(clippy::field_reassign_with_default)]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.is_production = env::var("TODO_ENV")
            .map(|v| {
                let v = v.to_lowercase();
                v == "production" || v == "prod"
            })
            .unwrap_or(false);

        if let Ok(val) = env::var("TODO_HOST") {
            config.host = val;
        }

        if let Ok(val) = env::var("TODO_PORT") {
            if let Ok(port) = val.parse() {
                config.port = port;
            }
        }

        if let Ok(val) = env::var("TODO_STATIC_DIR") {
            config.static_dir = PathBuf::from(val);
        }

        if let Ok(val) = env::var("TODO_MAX_CONCURRENT") {
            if let Ok(n) = val.parse::<usize>() {
                config.max_concurrent_requests = n.max(1);
            }
        }

        if let Ok(val) = env::var("TODO_REQUEST_TIMEOUT") {
            if let Ok(n) = val.parse() {
                config.request_timeout_secs = n;
            }
        }

        config.cors = CorsConfig::from_env();

        if config.is_production && !config.cors.is_restricted() {
            tracing::warn!(
                "PRODUCTION WARNING: CORS allows all origins. Set TODO_CORS_ORIGINS to restrict."
            );
        }

        config
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Log the current configuration
    pub fn log(&self) {
        info!("Configuration:");
        info!(
            "   Mode: {}",
            if self.is_production {
                "PRODUCTION"
            } else {
                "Development"
            }
        );
        info!("   Bind: {}", self.bind_addr());
        info!("   Static dir: {:?}", self.static_dir);
        info!("   Max concurrent: {}", self.max_concurrent_requests);
        info!("   Request timeout: {}s", self.request_timeout_secs);
        if self.cors.is_restricted() {
            info!("   CORS origins: {:?}", self.cors.allowed_origins);
        } else {
            info!("   CORS: Permissive (all origins allowed)");
        }
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
