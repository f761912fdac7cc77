use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use super::scm_interface::{ScmError, ScmOperations};

/// Git implementation of SCM operations
pub struct GitScm {
    git_executable: String,
}

impl Default for GitScm {
    fn default() -> Self {
        Self {
            git_executable: "git".to_string(),
        }
    }
}

impl GitScm {
    /// Create a new Git SCM instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new Git SCM instance with custom executable path
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            git_executable: executable.into(),
        }
    }

    fn map_spawn_error(&self, error: std::io::Error) -> ScmError {
        if error.kind() == std::io::ErrorKind::NotFound {
            ScmError::executable_not_found(&self.git_executable)
        } else {
            ScmError::from(error)
        }
    }
}

#[async_trait]
impl ScmOperations for GitScm {
    async fn clone_repository(&self, source: &str, working_dir: &Path) -> Result<(), ScmError> {
        tracing::debug!(executable = %self.git_executable, %source, "spawning clone");

        // stdio is inherited on purpose: git's progress output belongs to
        // the user, not to us.
        let status = Command::new(&self.git_executable)
            .arg("clone")
            .arg(source)
            .current_dir(working_dir)
            .status()
            .await
            .map_err(|e| self.map_spawn_error(e))?;

        if !status.success() {
            let command = format!("{} clone {}", self.git_executable, source);
            return Err(ScmError::command_failed(
                command,
                status.code().unwrap_or(-1),
            ));
        }

        Ok(())
    }

    async fn check_availability(&self) -> Result<(), ScmError> {
        let output = Command::new(&self.git_executable)
            .arg("--version")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| self.map_spawn_error(e))?;

        if !output.status.success() {
            return Err(ScmError::executable_not_found(&self.git_executable));
        }

        Ok(())
    }

    fn executable(&self) -> &str {
        &self.git_executable
    }
}
