// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message normalization.

/// A commit message with git comment lines removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedMessage {
    /// First line of the normalized text. May be empty.
    pub header: String,
    /// The whole normalized text, header included.
    pub body: String,
}

impl NormalizedMessage {
    /// Normalize raw message text. Absent input is treated as empty.
    ///
    /// Lines whose first character is `#` are dropped; the remaining lines
    /// keep their order.
    pub fn new(raw: Option<&str>) -> Self {
        let body = raw
            .unwrap_or("")
            .lines()
            .filter(|line| !is_comment(line))
            .collect::<Vec<_>>()
            .join("\n");

        let header = body.lines().next().unwrap_or("").to_string();

        Self { header, body }
    }

    /// Whether there is nothing to validate.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}

/// Replace the header line of `raw` with `header`, keeping every other byte.
///
/// The header is the first line that is not a comment. Returns `None` when
/// `raw` has no such line.
pub fn replace_header(raw: &str, header: &str) -> Option<String> {
    let mut offset = 0;

    for line in raw.split_inclusive('\n') {
        let content = line.trim_end_matches('\n').trim_end_matches('\r');
        if !is_comment(content) {
            let mut rewritten = String::with_capacity(raw.len() + header.len());
            rewritten.push_str(&raw[..offset]);
            rewritten.push_str(header);
            rewritten.push_str(&raw[offset + content.len()..]);
            return Some(rewritten);
        }
        offset += line.len();
    }

    None
}
