use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// JSON feed of public resolvers with reliability scores
    #[serde(default = "default_url")]
    pub url: String,

    /// Where the downloaded feed is cached; `None` uses the user cache directory
    #[serde(default)]
    pub cache_path: Option<String>,

    /// Local JSON file used instead of the HTTP feed
    #[serde(default)]
    pub file: Option<String>,

    /// HTTP fetch timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            cache_path: None,
            file: None,
            fetch_timeout: default_fetch_timeout(),
        }
    }
}

fn default_url() -> String {
    "https://public-dns.info/nameserver/nameservers.json".to_string()
}

fn default_fetch_timeout() -> u64 {
    30
}
