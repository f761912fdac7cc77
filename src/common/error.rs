use thiserror::Error;

use crate::domain::entities::workspace::WorkspaceError;
use crate::domain::value_objects::module_source::ModuleSourceError;
use crate::infrastructure::filesystem::config_store::ConfigStoreError;
use crate::infrastructure::scm::ScmError;

/// Top-level error type for vimod operations.
///
/// Lower layers define their own error enums; this type collects them so a
/// whole install or clean run can be reported with a single error chain.
#[derive(Debug, Error)]
pub enum VimodError {
    /// The user's home or bundle directory could not be resolved.
    #[error("Workspace error: {0}")]
    Workspace(#[from] WorkspaceError),

    /// The module config file could not be read or rewritten.
    #[error("Module list error: {0}")]
    ConfigStore(#[from] ConfigStoreError),

    /// A config line did not yield a usable repository identifier.
    #[error("Invalid module entry: {0}")]
    ModuleSource(#[from] ModuleSourceError),

    /// The external clone operation failed for a specific module.
    #[error("Clone failed for '{module}': {source}")]
    CloneFailed {
        /// Bundle name of the module that failed to clone.
        module: String,
        /// The underlying SCM failure.
        #[source]
        source: ScmError,
    },

    /// An SCM operation outside a specific clone failed.
    #[error("SCM operation failed: {0}")]
    Scm(#[from] ScmError),

    /// Uncategorized I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VimodError {
    /// Create a clone failure for the named module.
    pub fn clone_failed(module: impl Into<String>, source: ScmError) -> Self {
        Self::CloneFailed {
            module: module.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_failed_names_the_module() {
        let error = VimodError::clone_failed(
            "vim-airline",
            ScmError::clone_failed("remote hung up"),
        );
        assert_eq!(
            error.to_string(),
            "Clone failed for 'vim-airline': Clone failed: remote hung up"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: VimodError = io_error.into();
        assert!(matches!(error, VimodError::Io(_)));
    }

    #[test]
    fn workspace_errors_convert() {
        let error: VimodError = WorkspaceError::HomeNotFound.into();
        assert!(matches!(error, VimodError::Workspace(_)));
    }
}
