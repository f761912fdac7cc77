use std::path::{Path, PathBuf};
use thiserror::Error;

/// Workspace resolution errors
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// The user's home directory could not be determined.
    #[error("could not determine the user's home directory")]
    HomeNotFound,

    /// The bundle directory is missing; cloning has nowhere to land.
    #[error("bundle directory does not exist: {}", .0.display())]
    BundleDirMissing(PathBuf),
}

/// The vim directory tree vimod operates on.
///
/// Everything lives under `<home>/.vim`: the module config file at
/// `vim-modules.conf` and cloned plugins under `bundle/`. The entity only
/// resolves paths; existence checks happen where an operation needs them.
#[derive(Debug, Clone)]
pub struct VimWorkspace {
    home: PathBuf,
}

impl VimWorkspace {
    /// Resolve the workspace from the current user's home directory.
    pub fn discover() -> Result<Self, WorkspaceError> {
        dirs::home_dir()
            .map(Self::with_home)
            .ok_or(WorkspaceError::HomeNotFound)
    }

    /// Create a workspace rooted at an explicit home directory.
    pub fn with_home(home: PathBuf) -> Self {
        Self { home }
    }

    /// The home directory this workspace is rooted at.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// `<home>/.vim`
    pub fn vim_dir(&self) -> PathBuf {
        self.home.join(".vim")
    }

    /// Path of the module config file.
    pub fn config_path(&self) -> PathBuf {
        self.vim_dir().join("vim-modules.conf")
    }

    /// Directory cloned plugins live in.
    pub fn bundle_dir(&self) -> PathBuf {
        self.vim_dir().join("bundle")
    }

    /// Local directory a module with the given bundle name would occupy.
    pub fn module_dir(&self, bundle_name: &str) -> PathBuf {
        self.bundle_dir().join(bundle_name)
    }

    /// The bundle directory, verified to exist.
    pub fn require_bundle_dir(&self) -> Result<PathBuf, WorkspaceError> {
        let dir = self.bundle_dir();
        if dir.is_dir() {
            Ok(dir)
        } else {
            Err(WorkspaceError::BundleDirMissing(dir))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_are_rooted_under_dot_vim() {
        let workspace = VimWorkspace::with_home(PathBuf::from("/home/user"));

        assert_eq!(
            workspace.config_path(),
            PathBuf::from("/home/user/.vim/vim-modules.conf")
        );
        assert_eq!(
            workspace.bundle_dir(),
            PathBuf::from("/home/user/.vim/bundle")
        );
        assert_eq!(
            workspace.module_dir("vim-airline"),
            PathBuf::from("/home/user/.vim/bundle/vim-airline")
        );
    }

    #[test]
    fn test_require_bundle_dir_missing() {
        let temp = TempDir::new().unwrap();
        let workspace = VimWorkspace::with_home(temp.path().to_path_buf());

        let result = workspace.require_bundle_dir();
        assert!(matches!(result, Err(WorkspaceError::BundleDirMissing(_))));
    }

    #[test]
    fn test_require_bundle_dir_present() {
        let temp = TempDir::new().unwrap();
        let workspace = VimWorkspace::with_home(temp.path().to_path_buf());
        std::fs::create_dir_all(workspace.bundle_dir()).unwrap();

        let dir = workspace.require_bundle_dir().unwrap();
        assert_eq!(dir, workspace.bundle_dir());
    }

    #[test]
    fn test_error_message_names_the_path() {
        let error = WorkspaceError::BundleDirMissing(PathBuf::from("/home/user/.vim/bundle"));
        assert_eq!(
            error.to_string(),
            "bundle directory does not exist: /home/user/.vim/bundle"
        );
    }
}
