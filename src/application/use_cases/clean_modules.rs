use crate::common::result::VimodResult;

/// Outcome of a clean run.
#[derive(Debug, Clone, Default)]
pub struct CleanResult {
    /// Bundles removed from the bundle directory.
    pub removed_count: usize,

    /// Whether cleaning is actually wired up yet.
    pub implemented: bool,
}

/// Removes bundles that are no longer listed in the config file.
///
/// Not implemented yet; the use case exists so the command reports that
/// honestly instead of failing.
pub struct CleanModulesUseCase;

impl CleanModulesUseCase {
    /// Create a new clean use case.
    pub fn new() -> Self {
        Self
    }

    /// Run the clean operation.
    pub async fn execute(&self) -> VimodResult<CleanResult> {
        tracing::debug!("clean requested; nothing to do yet");

        Ok(CleanResult {
            removed_count: 0,
            implemented: false,
        })
    }
}

impl Default for CleanModulesUseCase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clean_succeeds_trivially() {
        let result = CleanModulesUseCase::new().execute().await.unwrap();

        assert!(!result.implemented);
        assert_eq!(result.removed_count, 0);
    }
}
