use std::path::Path;

use crate::common::error::VimodError;
use crate::common::result::VimodResult;
use crate::domain::entities::module_list::ModuleEntry;
use crate::domain::entities::workspace::VimWorkspace;
use crate::domain::value_objects::module_source::ModuleSource;
use crate::infrastructure::filesystem::config_store::ConfigStore;
use crate::infrastructure::scm::ScmOperations;

/// Settings for an install run.
#[derive(Debug, Clone, Default)]
pub struct InstallModulesConfig {
    /// Print the clone commands instead of executing them.
    pub dry_run: bool,

    /// Append an explicitly named module to the config file afterwards.
    pub save_module: bool,

    /// Narrate each step.
    pub verbose: bool,
}

impl InstallModulesConfig {
    /// Set dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set whether an explicit module is persisted to the config file.
    pub fn with_save_module(mut self, save_module: bool) -> Self {
        self.save_module = save_module;
        self
    }

    /// Set verbose output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Outcome of an install run.
#[derive(Debug, Clone, Default)]
pub struct InstallResult {
    /// Modules cloned, or printed as clone commands under dry-run.
    pub cloned_count: usize,

    /// Modules whose bundle directory already existed.
    pub skipped_count: usize,
}

impl InstallResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total modules considered.
    pub fn total_count(&self) -> usize {
        self.cloned_count + self.skipped_count
    }
}

/// Installs missing modules into the bundle directory.
///
/// Modules are processed strictly in order, one at a time; the first failure
/// aborts the remaining batch.
pub struct InstallModulesUseCase {
    config: InstallModulesConfig,
    scm: Box<dyn ScmOperations>,
}

impl InstallModulesUseCase {
    /// Create a new install use case.
    pub fn new(config: InstallModulesConfig, scm: Box<dyn ScmOperations>) -> Self {
        Self { config, scm }
    }

    /// Install every module listed in the workspace config file.
    pub async fn install_all(&self, workspace: &VimWorkspace) -> VimodResult<InstallResult> {
        let bundle_dir = workspace.require_bundle_dir()?;
        let modules = ConfigStore::new().load(&workspace.config_path()).await?;

        tracing::debug!(count = modules.len(), "installing modules from config");

        let mut result = InstallResult::new();
        // Probe the executable once, before the first clone actually spawns.
        let mut probed = false;
        for entry in modules.iter() {
            let source = entry.source()?;
            if !probed && self.needs_clone(&source, &bundle_dir) && !self.config.dry_run {
                self.scm.check_availability().await?;
                probed = true;
            }
            self.install_one(&source, &bundle_dir, &mut result).await?;
        }

        Ok(result)
    }

    /// Install a single explicitly named module, persisting it to the config
    /// file when the save flag is set.
    pub async fn install_module(
        &self,
        workspace: &VimWorkspace,
        module: &str,
    ) -> VimodResult<InstallResult> {
        let bundle_dir = workspace.require_bundle_dir()?;
        let source = ModuleSource::new(module)?;

        let mut result = InstallResult::new();
        self.install_one(&source, &bundle_dir, &mut result).await?;

        if self.config.save_module {
            self.append_to_config(workspace, module).await?;
        }

        Ok(result)
    }

    fn needs_clone(&self, source: &ModuleSource, bundle_dir: &Path) -> bool {
        !bundle_dir.join(source.bundle_name()).exists()
    }

    async fn install_one(
        &self,
        source: &ModuleSource,
        bundle_dir: &Path,
        result: &mut InstallResult,
    ) -> VimodResult<()> {
        let name = source.bundle_name();

        if !self.needs_clone(source, bundle_dir) {
            println!("Module '{}' already exists. Skipping.", name);
            result.skipped_count += 1;
            return Ok(());
        }

        if self.config.dry_run {
            println!("{} clone {}", self.scm.executable(), source);
            result.cloned_count += 1;
            return Ok(());
        }

        if self.config.verbose {
            println!("Cloning '{}' into {}", source, bundle_dir.display());
        }
        self.scm
            .clone_repository(source.as_str(), bundle_dir)
            .await
            .map_err(|e| VimodError::clone_failed(name, e))?;
        result.cloned_count += 1;

        Ok(())
    }

    async fn append_to_config(&self, workspace: &VimWorkspace, module: &str) -> VimodResult<()> {
        let store = ConfigStore::new();
        let path = workspace.config_path();

        let mut modules = store.load(&path).await?;
        modules.push(ModuleEntry::new(module));
        store.store(&path, &modules)?;

        if self.config.verbose {
            println!("Saved '{}' to {}", module, path.display());
        }
        tracing::debug!(%module, "module saved to config");

        Ok(())
    }
}
