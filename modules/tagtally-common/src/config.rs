use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret clients must present in the request body.
    pub api_key: String,

    /// Endpoint of the external tag-extraction worker.
    pub extractor_url: String,

    // Web server
    pub web_host: String,
    pub web_port: u16,

    /// Target number of concurrent batches per request.
    pub fanout: usize,

    /// Default truncation for ranked output.
    pub top_n: usize,

    /// Whether creator counts are tracked alongside hashtag counts.
    pub track_creators: bool,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            api_key: required_env("TAGTALLY_API_KEY"),
            extractor_url: required_env("EXTRACTOR_URL"),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
            fanout: env::var("FANOUT")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("FANOUT must be a number"),
            top_n: env::var("TOP_N")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .expect("TOP_N must be a number"),
            track_creators: env::var("TRACK_CREATORS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
