use std::env;
use std::time::Duration;

pub const DEFAULT_COLLECTION_URL: &str = "https://api.geekdo.com/xmlapi/collection";
pub const DEFAULT_BOARDGAME_URL: &str = "https://api.geekdo.com/xmlapi/boardgame";

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Collection owner served by GET /games
    pub owner: String,
    pub collection_base_url: String,
    pub boardgame_base_url: String,
    pub upstream_timeout: Duration,
    /// Answer every failure with 200 + plain text, like the original service
    pub legacy_errors: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            owner: lookup("BGG_OWNER").unwrap_or_else(|| "megtrinity".to_string()),
            collection_base_url: base_url(lookup("BGG_COLLECTION_URL"), DEFAULT_COLLECTION_URL),
            boardgame_base_url: base_url(lookup("BGG_BOARDGAME_URL"), DEFAULT_BOARDGAME_URL),
            upstream_timeout: Duration::from_secs(
                lookup("UPSTREAM_TIMEOUT_SECS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            ),
            legacy_errors: lookup("LEGACY_ERRORS")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn base_url(value: Option<String>, default: &str) -> String {
    value
        .as_deref()
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_string()
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
