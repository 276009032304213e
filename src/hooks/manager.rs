// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing and managing git hooks.

use crate::error::{HookError, Result, VcmError};
use crate::git;
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::HookTemplate;

/// Installation state of a single hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookStatus {
    /// Installed by vcm.
    Installed,
    /// A hook exists but was written by something else.
    Foreign,
    /// No hook file.
    Missing,
}

/// Manager for git hooks.
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a new hook manager for the current repository.
    pub fn new() -> Result<Self> {
        let repo = git::open_repo()?;
        Self::for_git_dir(repo.git_dir())
    }

    /// Create a hook manager for a known git directory.
    pub fn for_git_dir(git_dir: &Path) -> Result<Self> {
        let hooks_dir = git_dir.join("hooks");

        if !hooks_dir.exists() {
            fs::create_dir_all(&hooks_dir).map_err(|e| {
                VcmError::Hook(HookError::InstallFailed {
                    hook: "all".to_string(),
                    message: format!("Failed to create hooks directory: {}", e),
                })
            })?;
        }

        Ok(Self { hooks_dir })
    }

    /// Path of the installed hook script.
    pub fn hook_path(&self, template: HookTemplate) -> PathBuf {
        self.hooks_dir.join(template.filename())
    }

    /// Install every hook.
    ///
    /// A foreign hook is kept aside as `<name>.backup` when `force` is set,
    /// and restored on uninstall.
    pub fn install(&self, force: bool) -> Result<()> {
        for template in HookTemplate::all() {
            self.install_template(*template, force)?;
        }
        Ok(())
    }

    fn install_template(&self, template: HookTemplate, force: bool) -> Result<()> {
        let hook_path = self.hook_path(template);
        let backup_path = self.backup_path(template);
        let failed = |message: String| {
            VcmError::Hook(HookError::InstallFailed {
                hook: template.filename().to_string(),
                message,
            })
        };

        if hook_path.exists() && !self.is_vcm_hook(&hook_path)? {
            if !force {
                return Err(VcmError::Hook(HookError::AlreadyExists {
                    hook: template.filename().to_string(),
                }));
            }

            fs::rename(&hook_path, &backup_path)
                .map_err(|e| failed(format!("Failed to backup existing hook: {}", e)))?;
            tracing::debug!("Backed up existing hook to {:?}", backup_path);
        }

        fs::write(&hook_path, template.generate())
            .map_err(|e| failed(format!("Failed to write hook: {}", e)))?;

        make_executable(&hook_path).map_err(|e| failed(format!("Failed to set permissions: {}", e)))?;

        tracing::debug!("Installed {:?}", hook_path);
        Ok(())
    }

    /// Remove every hook installed by vcm.
    pub fn uninstall(&self) -> Result<()> {
        for template in HookTemplate::all() {
            self.uninstall_template(*template)?;
        }
        Ok(())
    }

    fn uninstall_template(&self, template: HookTemplate) -> Result<()> {
        let hook_path = self.hook_path(template);
        let backup_path = self.backup_path(template);

        if !hook_path.exists() {
            return Ok(());
        }

        // Only remove if it's our hook
        if !self.is_vcm_hook(&hook_path)? {
            return Err(VcmError::Hook(HookError::RemoveFailed {
                hook: template.filename().to_string(),
                message: "Hook was not installed by vcm".to_string(),
            }));
        }

        fs::remove_file(&hook_path).map_err(|e| {
            VcmError::Hook(HookError::RemoveFailed {
                hook: template.filename().to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        if backup_path.exists() {
            if let Err(e) = fs::rename(&backup_path, &hook_path) {
                tracing::warn!("Could not restore {:?}: {}", backup_path, e);
            }
        }

        Ok(())
    }

    /// Get the status of all hooks.
    pub fn status(&self) -> Result<Vec<(HookTemplate, HookStatus)>> {
        HookTemplate::all()
            .iter()
            .map(|template| {
                let hook_path = self.hook_path(*template);
                let status = if !hook_path.exists() {
                    HookStatus::Missing
                } else if self.is_vcm_hook(&hook_path)? {
                    HookStatus::Installed
                } else {
                    HookStatus::Foreign
                };
                Ok((*template, status))
            })
            .collect()
    }

    fn backup_path(&self, template: HookTemplate) -> PathBuf {
        self.hooks_dir.join(format!("{}.backup", template.filename()))
    }

    /// Check if a hook was installed by vcm.
    fn is_vcm_hook(&self, path: &Path) -> Result<bool> {
        let content = fs::read_to_string(path)?;
        Ok(HookTemplate::is_generated(&content))
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager() -> (TempDir, HookManager) {
        let dir = TempDir::new().unwrap();
        let manager = HookManager::for_git_dir(dir.path()).unwrap();
        (dir, manager)
    }

    #[test]
    fn test_install_and_uninstall() {
        let (_dir, manager) = manager();
        let hook = manager.hook_path(HookTemplate::CommitMsg);

        manager.install(false).unwrap();
        assert!(hook.exists());
        assert_eq!(
            manager.status().unwrap(),
            vec![(HookTemplate::CommitMsg, HookStatus::Installed)]
        );

        manager.uninstall().unwrap();
        assert!(!hook.exists());
        assert_eq!(
            manager.status().unwrap(),
            vec![(HookTemplate::CommitMsg, HookStatus::Missing)]
        );
    }

    #[test]
    fn test_reinstall_own_hook() {
        let (_dir, manager) = manager();
        manager.install(false).unwrap();
        manager.install(false).unwrap();
    }

    #[test]
    fn test_foreign_hook_needs_force() {
        let (_dir, manager) = manager();
        let hook = manager.hook_path(HookTemplate::CommitMsg);
        fs::write(&hook, "#!/bin/sh\nexit 0\n").unwrap();

        assert!(matches!(
            manager.install(false),
            Err(VcmError::Hook(HookError::AlreadyExists { .. }))
        ));
        assert_eq!(
            manager.status().unwrap(),
            vec![(HookTemplate::CommitMsg, HookStatus::Foreign)]
        );

        manager.install(true).unwrap();
        manager.uninstall().unwrap();
        assert_eq!(fs::read_to_string(&hook).unwrap(), "#!/bin/sh\nexit 0\n");
    }

    #[test]
    fn test_uninstall_refuses_foreign_hook() {
        let (_dir, manager) = manager();
        fs::write(manager.hook_path(HookTemplate::CommitMsg), "#!/bin/sh\n").unwrap();
        assert!(manager.uninstall().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_hook_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, manager) = manager();
        manager.install(false).unwrap();
        let mode = fs::metadata(manager.hook_path(HookTemplate::CommitMsg))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
