use std::fmt::Write;

use crate::error::{FolioError, Result};
use crate::project::{self, Project};
use crate::reveal::{RevealConfig, RevealObserver};
use crate::templates;

/// Visual card for one project record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub github_url: String,
    pub live_url: Option<String>,
    pub video_url: Option<String>,
    pub tags: Vec<String>,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryView {
    Cards(Vec<Card>),
    Failed(String),
}

/// Reads the project list from a local path or an `http(s)://` URL.
pub fn load_projects(source: &str) -> Result<Vec<Project>> {
    let text = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_text(source)?
    } else {
        std::fs::read_to_string(source)?
    };

    Ok(project::parse_projects(&text)?)
}

fn fetch_text(url: &str) -> Result<String> {
    tracing::debug!(%url, "fetching project data");

    let agent = ureq::Agent::new_with_config(
        ureq::config::Config::builder().http_status_as_error(false).build(),
    );
    let mut response = agent.get(url).call()?;

    let status = response.status();
    if !status.is_success() {
        return Err(FolioError::Status(status.as_u16()));
    }

    Ok(response.body_mut().read_to_string()?)
}

/// One card per record, in input order, each registered with the observer.
pub fn render_gallery(projects: &[Project], observer: &mut RevealObserver) -> Vec<Card> {
    let first = observer.observe(projects.len());

    projects
        .iter()
        .enumerate()
        .map(|(i, p)| Card {
            title: p.title.clone(),
            description: p.description.clone(),
            github_url: p.github_url.clone(),
            live_url: p.live_url.clone(),
            video_url: p.video_url.clone(),
            tags: p.tags.clone(),
            delay_ms: observer.delay_for(first + i),
        })
        .collect()
}

/// Loads and renders in one step. Any load failure yields a single error view
/// and no cards.
pub fn build_view(source: &str, config: RevealConfig) -> GalleryView {
    match load_projects(source) {
        Ok(projects) => {
            let mut observer = RevealObserver::new(config);
            GalleryView::Cards(render_gallery(&projects, &mut observer))
        }
        Err(e) => {
            tracing::error!(source, error = %e, "could not load projects");
            GalleryView::Failed(templates::LOAD_ERROR_MESSAGE.to_string())
        }
    }
}

pub fn card_html(card: &Card) -> String {
    let mut html = String::new();

    let _ = writeln!(
        html,
        r#"<div class="project-card reveal" style="transition-delay: {}ms">"#,
        card.delay_ms
    );
    html.push_str("<div class=\"card-header\">\n<i class=\"fas fa-folder\"></i>\n<div class=\"card-links\">\n");
    let _ = writeln!(
        html,
        r#"<a href="{}" target="_blank" aria-label="GitHub Code"><i class="fab fa-github"></i></a>"#,
        escape(&card.github_url)
    );
    if let Some(live) = &card.live_url {
        let _ = writeln!(
            html,
            r#"<a href="{}" target="_blank" aria-label="Live Demo"><i class="fas fa-external-link-alt"></i></a>"#,
            escape(live)
        );
    }
    html.push_str("</div>\n</div>\n");

    if let Some(video) = &card.video_url {
        let _ = writeln!(
            html,
            r#"<div class="video-container"><video controls preload="metadata" playsinline><source src="{}" type="video/mp4">Your browser does not support the video tag.</video></div>"#,
            escape(video)
        );
    }

    let _ = writeln!(html, "<h3>{}</h3>", escape(&card.title));
    let _ = writeln!(html, "<p>{}</p>", escape(&card.description));

    let tags: String = card.tags.iter().map(|t| format!("<span>{}</span>", escape(t))).collect();
    let _ = writeln!(html, "<footer>{tags}</footer>");
    html.push_str("</div>\n");

    html
}

/// Contents of the projects grid.
pub fn grid_html(view: &GalleryView) -> String {
    match view {
        GalleryView::Cards(cards) => cards.iter().map(card_html).collect(),
        GalleryView::Failed(message) => {
            format!("<p class=\"error-message\">{}</p>\n", escape(message))
        }
    }
}

pub fn render_page(view: &GalleryView, config: RevealConfig) -> String {
    let mut page = String::from(templates::PAGE_HEAD);
    page.push_str(templates::STYLESHEET);
    page.push_str(templates::PAGE_BODY_OPEN);
    page.push_str(&grid_html(view));
    page.push_str(templates::PAGE_BODY_CLOSE);
    page.push_str(&templates::REVEAL_SCRIPT.replace("{threshold}", &config.threshold.to_string()));
    page
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
