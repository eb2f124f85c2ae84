use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{FolioError, Result};
use crate::readme;

static REPO_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com/([^/]+)/([^/]+)").expect("valid regex"));

/// Owner/repository pair taken from a GitHub URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    /// Accepts anything containing `github.com/<owner>/<repo>`; trailing path
    /// segments are ignored. Only a truly empty input counts as missing;
    /// whitespace alone is an invalid URL.
    pub fn parse(url: &str) -> Result<Self> {
        if url.is_empty() {
            return Err(FolioError::MissingUrl);
        }

        let url = url.trim();

        let caps = REPO_URL.captures(url).ok_or_else(|| FolioError::InvalidUrl(url.to_string()))?;
        Ok(Self { owner: caps[1].to_string(), repo: caps[2].to_string() })
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoMetadata {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
struct ReadmePayload {
    content: Option<String>,
}

/// Turns a machine name like `my-cool_project` into `My Cool Project`.
pub fn title_from_name(name: &str) -> String {
    name.split(['-', '_']).map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Where repository metadata and README text come from.
pub trait RepoSource {
    fn repository(&self, repo: &RepoRef) -> Result<RepoMetadata>;
    fn readme(&self, repo: &RepoRef) -> Result<String>;
}

/// Tags from the repository README, or `None` when it could not be fetched or
/// decoded. An empty string means the README had no usable tech section.
pub fn readme_tags(source: &dyn RepoSource, repo: &RepoRef) -> Option<String> {
    match source.readme(repo) {
        Ok(text) => Some(readme::extract_tags(&text)),
        Err(e) => {
            tracing::warn!(%repo, error = %e, "could not fetch or parse README");
            None
        }
    }
}

pub struct GitHubClient {
    agent: ureq::Agent,
    config: Config,
}

impl GitHubClient {
    pub fn new(config: Config) -> Self {
        let agent = ureq::Agent::new_with_config(
            ureq::config::Config::builder().http_status_as_error(false).build(),
        );
        Self { agent, config }
    }

    fn get(&self, path: &str) -> Result<ureq::http::Response<ureq::Body>> {
        let url = format!("{}{path}", self.config.api_base.trim_end_matches('/'));
        tracing::debug!(%url, "GET");

        let mut request = self
            .agent
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", &self.config.user_agent);

        if let Some(token) = &self.config.token {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }

        Ok(request.call()?)
    }
}

impl RepoSource for GitHubClient {
    fn repository(&self, repo: &RepoRef) -> Result<RepoMetadata> {
        let mut response = self.get(&format!("/repos/{}/{}", repo.owner, repo.repo))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::RepoUnavailable { status: status.as_u16() });
        }

        Ok(response.body_mut().read_json()?)
    }

    fn readme(&self, repo: &RepoRef) -> Result<String> {
        let mut response = self.get(&format!("/repos/{}/{}/readme", repo.owner, repo.repo))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::Status(status.as_u16()));
        }

        let payload: ReadmePayload = response.body_mut().read_json()?;
        readme::decode_readme(payload.content.as_deref().unwrap_or_default())
    }
}
