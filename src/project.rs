use serde::{Deserialize, Deserializer, Serialize};

/// One portfolio entry, as stored in the data file and emitted by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub github_url: String,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Splits a comma-separated tag input into trimmed, non-empty tags.
pub fn parse_tags(input: &str) -> Vec<String> {
    input.split(',').map(str::trim).filter(|t| !t.is_empty()).map(String::from).collect()
}

/// Maps a blank string to `None`.
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| value.to_string())
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(optional))
}

pub fn parse_projects(json: &str) -> serde_json::Result<Vec<Project>> {
    serde_json::from_str(json)
}
