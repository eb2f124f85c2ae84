//! Headless authoring form: field edits, GitHub pre-fill, live preview,
//! submit, copy and clear, all routed through [`AuthoringSession::dispatch`].

use crate::clipboard;
use crate::form::{self, Field, ProjectForm};
use crate::github::{self, RepoRef, RepoSource};
use crate::preview::PreviewCard;

pub const COPY_LABEL: &str = "Copy to Clipboard";
pub const COPIED_LABEL: &str = "Copied!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    fn new(kind: StatusKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    InputChanged(Field),
    FetchClicked,
    Submit,
    CopyClicked,
    ClearClicked,
}

pub struct AuthoringSession<'a> {
    source: &'a dyn RepoSource,
    form: ProjectForm,
    preview: PreviewCard,
    status: Option<Status>,
    output: Option<String>,
    copy_label: &'static str,
}

impl<'a> AuthoringSession<'a> {
    pub fn new(source: &'a dyn RepoSource) -> Self {
        let form = ProjectForm::default();
        let preview = PreviewCard::project(&form);
        Self {
            source,
            form,
            preview,
            status: None,
            output: None,
            copy_label: COPY_LABEL,
        }
    }

    pub fn dispatch(&mut self, event: FormEvent) {
        match event {
            FormEvent::InputChanged(field) => self.on_input_changed(field),
            FormEvent::FetchClicked => self.on_fetch_clicked(),
            FormEvent::Submit => self.on_submit(),
            FormEvent::CopyClicked => self.on_copy_clicked(),
            FormEvent::ClearClicked => self.on_clear_clicked(),
        }
    }

    /// A manual edit: store the value, then signal the change.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.dispatch(FormEvent::InputChanged(field));
    }

    fn on_input_changed(&mut self, field: Field) {
        tracing::trace!(?field, "input changed");
        self.preview = PreviewCard::project(&self.form);
    }

    fn on_fetch_clicked(&mut self) {
        let repo = match RepoRef::parse(&self.form.github_url) {
            Ok(repo) => repo,
            Err(e) => {
                self.status = Some(Status::new(StatusKind::Error, e.to_string()));
                return;
            }
        };

        tracing::info!(%repo, "fetching repository info");

        let metadata = match self.source.repository(&repo) {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::error!(%repo, error = %e, "GitHub API error");
                self.status = Some(Status::new(StatusKind::Error, e.to_string()));
                return;
            }
        };

        let title = github::title_from_name(&metadata.name);
        let description = metadata.description.unwrap_or_default();
        let tags = github::readme_tags(self.source, &repo).filter(|t| !t.is_empty());

        self.form.set(Field::Title, title);
        self.form.set(Field::Description, description);
        if let Some(tags) = tags {
            self.form.set(Field::Tags, tags);
        }

        for field in [Field::Title, Field::Description, Field::Tags] {
            self.dispatch(FormEvent::InputChanged(field));
        }

        self.status = Some(Status::new(StatusKind::Success, "Successfully fetched repo info!"));
    }

    fn on_submit(&mut self) {
        match form::submission_json(&self.form) {
            Ok(json) => self.output = Some(json),
            Err(e) => {
                tracing::error!(error = %e, "could not serialize project");
                self.status = Some(Status::new(StatusKind::Error, e.to_string()));
            }
        }
    }

    fn on_copy_clicked(&mut self) {
        let Some(output) = &self.output else { return };

        match clipboard::copy(output) {
            Ok(_) => self.copy_label = COPIED_LABEL,
            Err(e) => {
                tracing::error!(error = %e, "copy failed");
                self.status = Some(Status::new(StatusKind::Error, e.to_string()));
            }
        }
    }

    fn on_clear_clicked(&mut self) {
        self.form.reset();
        self.dispatch(FormEvent::InputChanged(Field::Title));
        self.status = None;
        self.output = None;
        self.copy_label = COPY_LABEL;
    }

    pub fn form(&self) -> &ProjectForm {
        &self.form
    }

    pub fn preview(&self) -> &PreviewCard {
        &self.preview
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Submitted JSON; `None` while the output area is hidden.
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn copy_label(&self) -> &str {
        self.copy_label
    }
}
