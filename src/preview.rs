use std::fmt;

use crate::form::ProjectForm;
use crate::project;

pub const PLACEHOLDER_TITLE: &str = "Your Project Title";
pub const PLACEHOLDER_DESCRIPTION: &str = "Your project description will appear here.";
pub const PLACEHOLDER_TAGS: [&str; 2] = ["Tag1", "Tag2"];

/// What the live preview card shows for the current form values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCard {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub video_url: Option<String>,
}

impl PreviewCard {
    pub fn project(form: &ProjectForm) -> Self {
        let title = or_placeholder(&form.title, PLACEHOLDER_TITLE);
        let description = or_placeholder(&form.description, PLACEHOLDER_DESCRIPTION);

        let mut tags = project::parse_tags(&form.tags);
        if tags.is_empty() {
            tags = PLACEHOLDER_TAGS.iter().map(|t| (*t).to_string()).collect();
        }

        Self { title, description, tags, video_url: project::optional(&form.video_url) }
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() { placeholder.to_string() } else { value.to_string() }
}

impl fmt::Display for PreviewCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "┌ {}", self.title)?;
        if let Some(video) = &self.video_url {
            writeln!(f, "│ ▶ {video}")?;
        }
        writeln!(f, "│ {}", self.description)?;
        let tags: Vec<String> = self.tags.iter().map(|t| format!("[{t}]")).collect();
        write!(f, "└ {}", tags.join(" "))
    }
}
