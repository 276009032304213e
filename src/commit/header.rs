// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Header line parsing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `(fixup! |squash! )?<type>(<scope>)?: <subject>`
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<marker>fixup! |squash! )?(?P<type>[0-9A-Za-z_]+)(?:\((?P<scope>[^)\s]+)\))?: (?P<subject>.+)$"
    )
    .expect("header pattern is valid");
}

/// A parsed `type(scope): subject` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitHeader {
    /// The `fixup! ` or `squash! ` prefix, if any.
    pub marker: Option<String>,
    /// Commit type.
    pub commit_type: String,
    /// Raw scope text, possibly a comma-separated list.
    pub scope: Option<String>,
    /// Everything after `: `.
    pub subject: String,
    /// The header line as written.
    pub raw: String,
}

impl CommitHeader {
    /// Parse a header line. Returns `None` if it does not follow the grammar.
    pub fn parse(line: &str) -> Option<Self> {
        let captures = HEADER_REGEX.captures(line)?;

        Some(Self {
            marker: captures.name("marker").map(|m| m.as_str().to_string()),
            commit_type: captures["type"].to_string(),
            scope: captures.name("scope").map(|m| m.as_str().to_string()),
            subject: captures["subject"].to_string(),
            raw: line.to_string(),
        })
    }

    /// Whether the commit is meant to be folded into another one.
    pub fn is_squash_or_fixup(&self) -> bool {
        self.marker.is_some()
    }

    /// The individual scopes. Empty when no scope was given.
    pub fn scopes(&self) -> Vec<&str> {
        match self.scope {
            Some(ref scope) => scope.split(',').collect(),
            None => Vec::new(),
        }
    }

    /// Length of the header line in characters.
    pub fn len(&self) -> usize {
        self.raw.chars().count()
    }

    /// Whether the header line is empty. Never true for a parsed header.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Format the header from its current fields.
    pub fn format(&self) -> String {
        let mut result = String::new();

        if let Some(ref marker) = self.marker {
            result.push_str(marker);
        }

        result.push_str(&self.commit_type);

        if let Some(ref scope) = self.scope {
            result.push('(');
            result.push_str(scope);
            result.push(')');
        }

        result.push_str(": ");
        result.push_str(&self.subject);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_type_scope_subject() {
        let header = CommitHeader::parse("fix($compile): something").unwrap();
        assert_eq!(header.commit_type, "fix");
        assert_eq!(header.scope.as_deref(), Some("$compile"));
        assert_eq!(header.subject, "something");
        assert!(!header.is_squash_or_fixup());
    }

    #[test]
    fn test_parse_without_scope() {
        let header = CommitHeader::parse("fix: blablabla").unwrap();
        assert_eq!(header.scope, None);
        assert!(header.scopes().is_empty());
    }

    #[test]
    fn test_parse_unusual_scopes() {
        for line in [
            "chore(*): something",
            "chore(foo-bar): something",
            "chore(guide/location): something",
            "chore(mocks.$httpBackend): something",
        ] {
            assert!(CommitHeader::parse(line).is_some(), "{line}");
        }
    }

    #[test]
    fn test_parse_subject_with_colon() {
        let header = CommitHeader::parse("revert: feat($location): something").unwrap();
        assert_eq!(header.commit_type, "revert");
        assert_eq!(header.subject, "feat($location): something");
    }

    #[test]
    fn test_parse_markers() {
        let header = CommitHeader::parse("fixup! fix($compile): something").unwrap();
        assert!(header.is_squash_or_fixup());
        assert_eq!(header.commit_type, "fix");

        let header = CommitHeader::parse("squash! feat: x").unwrap();
        assert_eq!(header.marker.as_deref(), Some("squash! "));
    }

    #[test]
    fn test_parse_rejects_bad_grammar() {
        for line in [
            "not correct format",
            "feat(): empty scope",
            "feat(a b): spaced scope",
            "feat:missing space",
            "feat: ",
            "fixup!feat: x",
        ] {
            assert!(CommitHeader::parse(line).is_none(), "{line}");
        }
    }

    #[test]
    fn test_multiple_scopes() {
        let header = CommitHeader::parse("feat(button,card,ripple): x").unwrap();
        assert_eq!(header.scopes(), vec!["button", "card", "ripple"]);
    }

    #[test]
    fn test_format_round_trips_header() {
        let line = "squash! Chore(build): A something Z";
        let header = CommitHeader::parse(line).unwrap();
        assert_eq!(header.format(), line);
    }

    #[test]
    fn test_len_counts_characters() {
        let header = CommitHeader::parse("feat: ümlaut").unwrap();
        assert_eq!(header.len(), 12);
    }
}
