use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_GOODREADS_URL: &str = "https://www.goodreads.com/search/index.xml";
pub const DEFAULT_LOG_FILTER: &str = "search_service=info,tower_http=info";

/// Server settings, read from the environment at start-up.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub url: String,
    pub api_key: String,
    pub timeout: Duration,
    pub retry_backoff: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_GOODREADS_URL.to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(10),
            retry_backoff: Duration::from_millis(250),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = UpstreamConfig::default();

        let api_key = std::env::var("GOODREADS_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            warn!("GOODREADS_API_KEY is not set, upstream requests will be unauthenticated");
        }

        Self {
            port: parse_var("PORT", DEFAULT_PORT),
            upstream: UpstreamConfig {
                url: std::env::var("GOODREADS_URL").unwrap_or(defaults.url),
                api_key,
                timeout: Duration::from_secs(parse_var(
                    "UPSTREAM_TIMEOUT_SECS",
                    defaults.timeout.as_secs(),
                )),
                retry_backoff: Duration::from_millis(parse_var(
                    "UPSTREAM_RETRY_BACKOFF_MS",
                    defaults.retry_backoff.as_millis() as u64,
                )),
            },
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_var<T: FromStr + Copy + std::fmt::Display>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}
