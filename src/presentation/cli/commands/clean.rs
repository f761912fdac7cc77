use anyhow::Result;
use colored::Colorize;

use crate::application::use_cases::clean_modules::CleanModulesUseCase;

/// Remove bundles no longer listed in the config file
pub struct CleanCommand {
    /// Narrate each step
    pub verbose: bool,
}

impl CleanCommand {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Execute the clean command
    pub async fn execute(&self) -> Result<()> {
        println!("{} Cleaning modules...", "::".blue().bold());

        let result = CleanModulesUseCase::new().execute().await?;

        if !result.implemented {
            println!("Cleaning is not implemented yet.");
            return Ok(());
        }

        if self.verbose {
            println!("  Bundles removed: {}", result.removed_count);
        }
        println!("{} Clean complete!", "✓".green().bold());

        Ok(())
    }
}
