// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook script templates.

/// Marker written into every generated hook.
pub const HOOK_MARKER: &str = "vcm Git Hook";

/// Second marker, carrying the generator version.
pub const GENERATED_BY: &str = "Generated by vcm";

/// Hooks vcm knows how to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookTemplate {
    /// Validates the message git is about to commit.
    CommitMsg,
}

impl HookTemplate {
    /// The file name inside `.git/hooks`.
    pub fn filename(&self) -> &'static str {
        match self {
            HookTemplate::CommitMsg => "commit-msg",
        }
    }

    /// Render the hook script.
    pub fn generate(&self) -> String {
        match self {
            HookTemplate::CommitMsg => format!(
                "#!/bin/sh\n\
                 # {HOOK_MARKER}\n\
                 # {GENERATED_BY} v{}\n\
                 #\n\
                 # Validates the commit message before the commit is recorded.\n\
                 # Remove with: vcm hook uninstall\n\
                 \n\
                 exec vcm validate \"$1\"\n",
                crate::version::VERSION
            ),
        }
    }

    /// All known hooks.
    pub fn all() -> &'static [HookTemplate] {
        &[HookTemplate::CommitMsg]
    }

    /// Whether a script was written by vcm.
    pub fn is_generated(content: &str) -> bool {
        content.contains(HOOK_MARKER) || content.contains(GENERATED_BY)
    }
}

impl std::str::FromStr for HookTemplate {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookTemplate::all()
            .iter()
            .copied()
            .find(|t| t.filename() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_msg_script() {
        let script = HookTemplate::CommitMsg.generate();
        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains("exec vcm validate \"$1\""));
        assert!(HookTemplate::is_generated(&script));
    }

    #[test]
    fn test_foreign_script_not_generated() {
        assert!(!HookTemplate::is_generated("#!/bin/sh\nnpx commitlint --edit \"$1\"\n"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("commit-msg".parse::<HookTemplate>(), Ok(HookTemplate::CommitMsg));
        assert!("pre-commit".parse::<HookTemplate>().is_err());
    }
}
