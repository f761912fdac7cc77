use anyhow::Result;
use colored::Colorize;

use crate::application::use_cases::install_modules::{
    InstallModulesConfig, InstallModulesUseCase,
};
use crate::domain::entities::workspace::VimWorkspace;
use crate::infrastructure::scm::GitScm;

/// Install missing modules into the bundle directory
pub struct InstallCommand {
    /// Explicit module to install instead of the config file contents
    pub module: Option<String>,
    /// Save the explicit module to the config file
    pub save: bool,
    /// Print the clone commands instead of running them
    pub dry_run: bool,
    /// Narrate each step
    pub verbose: bool,
    /// Git executable to invoke
    pub git_executable: String,
}

impl InstallCommand {
    pub fn new(
        module: Option<String>,
        save: bool,
        dry_run: bool,
        verbose: bool,
        git_executable: String,
    ) -> Self {
        Self {
            module,
            save,
            dry_run,
            verbose,
            git_executable,
        }
    }

    /// Execute the install command
    pub async fn execute(&self) -> Result<()> {
        let workspace = VimWorkspace::discover()?;

        let config = InstallModulesConfig::default()
            .with_dry_run(self.dry_run)
            .with_save_module(self.save)
            .with_verbose(self.verbose);
        let scm = GitScm::with_executable(&self.git_executable);
        let use_case = InstallModulesUseCase::new(config, Box::new(scm));

        let result = match &self.module {
            Some(module) => {
                println!("{} Installing module '{}'...", "::".blue().bold(), module);
                use_case.install_module(&workspace, module).await?
            }
            None => {
                println!(
                    "{} Installing modules from {}...",
                    "::".blue().bold(),
                    workspace.config_path().display()
                );
                use_case.install_all(&workspace).await?
            }
        };

        if self.dry_run {
            println!(
                "{} Dry run complete: {} to clone, {} already present",
                "✓".green().bold(),
                result.cloned_count,
                result.skipped_count
            );
        } else {
            println!(
                "{} Install complete: {} cloned, {} skipped",
                "✓".green().bold(),
                result.cloned_count,
                result.skipped_count
            );
        }

        Ok(())
    }
}
