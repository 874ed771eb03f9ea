use axum::http::HeaderValue;
use clap::Parser;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:80";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Server configuration, read from command line flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "holdem-evaluator", about = "Texas Hold'em hand evaluation server")]
pub struct Config {
    /// HTTP binding address.
    #[arg(long, short, env = "LISTEN", default_value = DEFAULT_LISTEN)]
    pub listen: String,
    /// Origin allowed to call the API from a browser.
    #[arg(long, env = "CORS_ORIGIN", default_value = DEFAULT_CORS_ORIGIN, value_parser = parse_origin)]
    pub cors_origin: HeaderValue,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_string(),
            cors_origin: HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
        }
    }
}

fn parse_origin(origin: &str) -> Result<HeaderValue, String> {
    HeaderValue::from_str(origin).map_err(|e| format!("invalid origin '{origin}': {e}"))
}
