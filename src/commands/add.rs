use std::fs;

use anyhow::{Context, Result, bail};
use clap::Args;
use folio::config::Config;
use folio::form::Field;
use folio::github::GitHubClient;
use folio::session::{AuthoringSession, FormEvent, StatusKind};

#[derive(Args)]
pub struct AddArgs {
    /// GitHub repository URL
    #[arg(short, long)]
    github_url: Option<String>,
    /// Pre-fill title, description and tags from the repository
    #[arg(short, long)]
    fetch: bool,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    live_url: Option<String>,
    #[arg(long)]
    video_url: Option<String>,
    /// Comma-separated tags
    #[arg(long)]
    tags: Option<String>,
    /// Copy the generated JSON to the clipboard
    #[arg(long)]
    copy: bool,
    /// Also write the generated JSON to this file
    #[arg(short, long)]
    out: Option<String>,
}

impl AddArgs {
    fn manual_fields(&self) -> impl Iterator<Item = (Field, &str)> {
        [
            (Field::Title, &self.title),
            (Field::Description, &self.description),
            (Field::LiveUrl, &self.live_url),
            (Field::VideoUrl, &self.video_url),
            (Field::Tags, &self.tags),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
    }
}

pub fn run(args: &AddArgs) -> Result<()> {
    let client = GitHubClient::new(Config::from_env());
    let mut session = AuthoringSession::new(&client);

    if let Some(url) = &args.github_url {
        session.input(Field::GithubUrl, url.as_str());
    }

    if args.fetch {
        session.dispatch(FormEvent::FetchClicked);
        if let Some(status) = session.status() {
            println!("{}", status.message);
            if status.kind == StatusKind::Error {
                bail!("could not pre-fill from GitHub");
            }
        }
    }

    // Explicit flags win over fetched values.
    for (field, value) in args.manual_fields() {
        session.input(field, value);
    }

    if session.form().github_url.trim().is_empty() {
        bail!("a GitHub URL is required (--github-url)");
    }

    println!();
    println!("Preview:");
    println!("{}", session.preview());
    println!();

    session.dispatch(FormEvent::Submit);
    let json = session.output().context("project could not be serialized")?.to_string();
    println!("{json}");

    if let Some(path) = &args.out {
        fs::write(path, &json).with_context(|| format!("failed to write {path}"))?;
        println!();
        println!("Wrote {path}");
    }

    if args.copy {
        session.dispatch(FormEvent::CopyClicked);
        match session.status() {
            Some(status) if status.kind == StatusKind::Error => {
                eprintln!("{}", status.message);
            }
            _ => println!("{}", session.copy_label()),
        }
    }

    Ok(())
}
