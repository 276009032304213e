// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Locating the commit message to validate.

use crate::error::{Result, ResultExt};
use crate::git;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Argument value that selects standard input.
pub const STDIN_ARG: &str = "-";

/// Where the commit message comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    /// A message file, e.g. `.git/COMMIT_EDITMSG`. It can be rewritten.
    File(PathBuf),
    /// Message text passed on the command line.
    Text(String),
    /// Message text read from standard input.
    Stdin,
}

impl MessageSource {
    /// Resolve a command-line argument relative to `cwd`.
    ///
    /// No argument means the repository's `COMMIT_EDITMSG`. An argument that
    /// names an existing file, either relative to `cwd` or to the git
    /// directory (git GUIs pass names like `GITGUI_EDITMSG`), is a file.
    /// Anything else is the message itself.
    pub fn resolve(arg: Option<&str>, cwd: &Path) -> Result<Self> {
        let arg = match arg {
            None => {
                let git_dir = git::find_git_dir(cwd)?;
                return Ok(MessageSource::File(git::commit_editmsg_path(&git_dir)));
            }
            Some(STDIN_ARG) => return Ok(MessageSource::Stdin),
            Some(arg) => arg,
        };

        let direct = cwd.join(arg);
        if direct.is_file() {
            return Ok(MessageSource::File(direct));
        }

        if let Ok(git_dir) = git::find_git_dir(cwd) {
            let in_git_dir = git_dir.join(arg);
            if in_git_dir.is_file() {
                return Ok(MessageSource::File(in_git_dir));
            }
        }

        tracing::debug!("Treating argument as message text");
        Ok(MessageSource::Text(arg.to_string()))
    }

    /// Read the message. A missing file reads as absent.
    ///
    /// Bytes that are not UTF-8 (a legacy `i18n.commitEncoding`) are
    /// replaced with U+FFFD so the header can still be checked.
    pub fn read(&self) -> Result<Option<String>> {
        match self {
            MessageSource::File(path) => match std::fs::read(path) {
                Ok(bytes) => Ok(Some(decode_message(bytes))),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!("Message file {:?} does not exist", path);
                    Ok(None)
                }
                Err(e) => Err(e.into()),
            },
            MessageSource::Text(text) => Ok(Some(text.clone())),
            MessageSource::Stdin => {
                let mut buffer = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buffer)
                    .context("Failed to read commit message from stdin")?;
                Ok(Some(decode_message(buffer)))
            }
        }
    }

    /// The file autofix may rewrite, if any.
    pub fn rewrite_target(&self) -> Option<&Path> {
        match self {
            MessageSource::File(path) => Some(path),
            _ => None,
        }
    }
}

fn decode_message(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Commit message is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Whether the text went through lossy decoding.
///
/// Writing such text back would replace the original bytes, so autofix
/// leaves these files alone.
pub fn is_lossy(text: &str) -> bool {
    text.contains(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_existing_file_is_file_source() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("MSG"), "feat: x").unwrap();

        let source = MessageSource::resolve(Some("MSG"), dir.path()).unwrap();
        assert_eq!(source, MessageSource::File(dir.path().join("MSG")));
        assert_eq!(source.read().unwrap().as_deref(), Some("feat: x"));
        assert!(source.rewrite_target().is_some());
    }

    #[test]
    fn test_text_argument() {
        let dir = TempDir::new().unwrap();
        let source = MessageSource::resolve(Some("chore: valid message"), dir.path()).unwrap();
        assert_eq!(
            source,
            MessageSource::Text("chore: valid message".to_string())
        );
        assert!(source.rewrite_target().is_none());
    }

    #[test]
    fn test_dash_is_stdin() {
        let dir = TempDir::new().unwrap();
        let source = MessageSource::resolve(Some("-"), dir.path()).unwrap();
        assert_eq!(source, MessageSource::Stdin);
    }

    #[test]
    fn test_file_in_git_dir() {
        let dir = TempDir::new().unwrap();
        git2::Repository::init(dir.path()).unwrap();
        std::fs::write(dir.path().join(".git").join("GITGUI_EDITMSG"), "fix: y").unwrap();

        let source = MessageSource::resolve(Some("GITGUI_EDITMSG"), dir.path()).unwrap();
        match source {
            MessageSource::File(path) => assert!(path.ends_with("GITGUI_EDITMSG")),
            other => panic!("Expected file source, got {:?}", other),
        }
    }

    #[test]
    fn test_default_is_commit_editmsg() {
        let dir = TempDir::new().unwrap();
        git2::Repository::init(dir.path()).unwrap();

        let source = MessageSource::resolve(None, dir.path()).unwrap();
        match source {
            MessageSource::File(path) => assert!(path.ends_with("COMMIT_EDITMSG")),
            other => panic!("Expected file source, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_reads_as_absent() {
        let dir = TempDir::new().unwrap();
        let source = MessageSource::File(dir.path().join("COMMIT_EDITMSG"));
        assert_eq!(source.read().unwrap(), None);
    }

    #[test]
    fn test_latin1_file_is_decoded_lossily() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        std::fs::write(&path, b"fix: caf\xe9\n").unwrap();

        let text = MessageSource::File(path).read().unwrap().unwrap();
        assert_eq!(text, "fix: caf\u{FFFD}\n");
        assert!(is_lossy(&text));
        assert!(!is_lossy("fix: café"));
    }
}
