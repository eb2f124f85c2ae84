use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use folio::config::Config;
use folio::github::{GitHubClient, RepoRef, RepoSource};
use folio::readme;

pub fn run(target: &str) -> Result<()> {
    let text = if Path::new(target).is_file() {
        fs::read_to_string(target).with_context(|| format!("failed to read {target}"))?
    } else {
        let repo = RepoRef::parse(target)?;
        println!("Fetching README for {repo}...");
        GitHubClient::new(Config::from_env()).readme(&repo)?
    };

    let tags = readme::extract_tag_list(&text);
    if tags.is_empty() {
        println!("No tech stack section found.");
        return Ok(());
    }

    println!("{} tag(s): {}", tags.len(), tags.join(", "));
    Ok(())
}
