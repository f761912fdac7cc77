use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// Common interface for SCM operations vimod relies on.
///
/// The clone operation inherits the parent's stdio so the external tool's
/// progress output reaches the terminal unchanged.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ScmOperations: Send + Sync {
    /// Clone a repository from the given source, with `working_dir` as the
    /// process working directory (the clone lands in a subdirectory of it).
    async fn clone_repository(&self, source: &str, working_dir: &Path) -> Result<(), ScmError>;

    /// Check that the SCM executable can be invoked at all.
    async fn check_availability(&self) -> Result<(), ScmError>;

    /// Name of the executable, as it would appear on a command line.
    fn executable(&self) -> &str;
}

/// Errors that can occur during SCM operations
#[derive(Debug, thiserror::Error)]
pub enum ScmError {
    /// The configured executable could not be found or run.
    #[error("SCM executable not found: {executable}")]
    ExecutableNotFound {
        /// The executable that was looked up.
        executable: String,
    },

    /// The clone operation itself failed.
    #[error("Clone failed: {message}")]
    CloneFailed {
        /// Failure description.
        message: String,
    },

    /// A spawned command exited unsuccessfully.
    #[error("Command execution failed: {command}, exit code: {exit_code}")]
    CommandFailed {
        /// The command line that was run.
        command: String,
        /// The child's exit code, `-1` if terminated by signal.
        exit_code: i32,
    },

    /// Spawning or waiting on the child failed at the OS level.
    #[error("IO error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl ScmError {
    /// Create a clone failed error
    pub fn clone_failed(message: impl Into<String>) -> Self {
        Self::CloneFailed {
            message: message.into(),
        }
    }

    /// Create an executable not found error
    pub fn executable_not_found(executable: impl Into<String>) -> Self {
        Self::ExecutableNotFound {
            executable: executable.into(),
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, exit_code: i32) -> Self {
        Self::CommandFailed {
            command: command.into(),
            exit_code,
        }
    }
}
