//! Tag extraction from README text.
//!
//! The scan is a two-state machine: it looks for a "tech stack" style heading,
//! then collects list items until the next heading or the first blank line
//! that follows a collected tag.

use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;

use crate::error::{FolioError, Result};

static SECTION_TRIGGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)#+\s*(technologies used|tech stack|built with)").expect("valid regex")
});

static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    OutsideSection,
    InsideSection,
}

/// Outcome of feeding one line to the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Continue,
    Tag(String),
    Stop,
}

struct Scanner {
    state: ScanState,
    collected: usize,
}

impl Scanner {
    fn new() -> Self {
        Self { state: ScanState::OutsideSection, collected: 0 }
    }

    fn feed(&mut self, line: &str) -> Step {
        if SECTION_TRIGGER.is_match(line) {
            self.state = ScanState::InsideSection;
            return Step::Continue;
        }

        if self.state == ScanState::OutsideSection {
            return Step::Continue;
        }

        let trimmed = line.trim();
        if is_list_item(trimmed) {
            return match clean_item(trimmed) {
                Some(tag) => {
                    self.collected += 1;
                    Step::Tag(tag)
                }
                None => Step::Continue,
            };
        }

        if trimmed.starts_with('#') || (trimmed.is_empty() && self.collected > 0) {
            return Step::Stop;
        }

        Step::Continue
    }
}

fn is_list_item(trimmed: &str) -> bool {
    (trimmed.starts_with('-') || trimmed.starts_with('*')) && trimmed.chars().count() > 1
}

/// Reduces a list item to its bare label, or `None` if only markup remains.
fn clean_item(trimmed: &str) -> Option<String> {
    let unmarked = trimmed[1..].trim_start();
    let unlinked = MARKDOWN_LINK.replace(unmarked, "$1");
    let plain: String = unlinked.chars().filter(|c| !matches!(c, '`' | '*' | '_')).collect();

    let head = plain.split(':').next().unwrap_or_default();
    let head = head.split('(').next().unwrap_or_default().trim();

    (!head.is_empty()).then(|| head.to_string())
}

/// Collects the tags of the first tech-stack section in `readme`.
pub fn extract_tag_list(readme: &str) -> Vec<String> {
    let mut scanner = Scanner::new();
    let mut tags = Vec::new();

    for line in readme.split('\n') {
        match scanner.feed(line) {
            Step::Continue => {}
            Step::Tag(tag) => tags.push(tag),
            Step::Stop => break,
        }
    }

    if scanner.state == ScanState::OutsideSection {
        tracing::debug!("no tech stack heading in README");
    }

    tags
}

/// Extracted tags joined with `", "`. Empty when nothing was found.
pub fn extract_tags(readme: &str) -> String {
    extract_tag_list(readme).join(", ")
}

/// Decodes the base64 `content` field returned by the GitHub README endpoint.
/// The payload is wrapped at 60 columns, so whitespace is dropped first.
pub fn decode_readme(content: &str) -> Result<String> {
    let compact: String = content.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if compact.is_empty() {
        return Err(FolioError::EmptyReadme);
    }

    let bytes = STANDARD.decode(compact)?;
    Ok(String::from_utf8(bytes)?)
}
