pub mod clipboard;
pub mod config;
pub mod error;
pub mod form;
pub mod gallery;
pub mod github;
pub mod preview;
pub mod project;
pub mod readme;
pub mod reveal;
pub mod session;
pub mod templates;

pub use error::{FolioError, Result};
pub use project::Project;
