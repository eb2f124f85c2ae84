pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub token: Option<String>,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token: None,
            user_agent: format!("folio/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Reads `FOLIO_GITHUB_API` and `GITHUB_TOKEN`; unset or blank values keep
    /// the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(base) = env_var("FOLIO_GITHUB_API") {
            config.api_base = base;
        }
        config.token = env_var("GITHUB_TOKEN");

        config
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
