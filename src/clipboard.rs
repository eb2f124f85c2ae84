use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{FolioError, Result};

const COPY_COMMANDS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip.exe", &[]),
];

/// Hands `text` to the first host copy command that runs successfully.
pub fn copy(text: &str) -> Result<&'static str> {
    copy_with(COPY_COMMANDS, text)
}

/// Tries each `(program, args)` in order. A program that cannot be spawned is
/// skipped; one that is spawned is always waited on, even if feeding its stdin
/// fails.
pub fn copy_with(commands: &[(&'static str, &[&str])], text: &str) -> Result<&'static str> {
    for &(program, args) in commands {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let Ok(mut child) = child else { continue };

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child.wait()?;
        written?;

        if status.success() {
            tracing::debug!(program, "copied to clipboard");
            return Ok(program);
        }
    }

    let tried: Vec<&str> = commands.iter().map(|(p, _)| *p).collect();
    Err(FolioError::NoClipboard(tried.join(", ")))
}
