use crate::project::{self, Project};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    GithubUrl,
    LiveUrl,
    VideoUrl,
    Tags,
}

impl Field {
    pub const ALL: [Self; 6] =
        [Self::Title, Self::Description, Self::GithubUrl, Self::LiveUrl, Self::VideoUrl, Self::Tags];
}

/// Raw field values of the project-entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub github_url: String,
    pub live_url: String,
    pub video_url: String,
    pub tags: String,
}

impl ProjectForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::GithubUrl => &self.github_url,
            Field::LiveUrl => &self.live_url,
            Field::VideoUrl => &self.video_url,
            Field::Tags => &self.tags,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::GithubUrl => &mut self.github_url,
            Field::LiveUrl => &mut self.live_url,
            Field::VideoUrl => &mut self.video_url,
            Field::Tags => &mut self.tags,
        };
        *slot = value.into();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_project(&self) -> Project {
        Project {
            title: self.title.clone(),
            description: self.description.clone(),
            github_url: self.github_url.clone(),
            live_url: project::optional(&self.live_url),
            video_url: project::optional(&self.video_url),
            tags: project::parse_tags(&self.tags),
        }
    }
}

/// The submitted record wrapped in a one-element array, indented for pasting
/// into the data file.
pub fn submission_json(form: &ProjectForm) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&[form.to_project()])
}
