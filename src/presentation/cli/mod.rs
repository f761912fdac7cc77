pub mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::exit;

use crate::presentation::cli::commands::clean::CleanCommand;
use crate::presentation::cli::commands::install::InstallCommand;

/// Version string carrying the build metadata embedded by `build.rs`.
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// vimod - install vim plugin bundles from a plain-text module list
#[derive(Parser)]
#[command(name = "vimod")]
#[command(about = "Install vim plugin bundles from a plain-text module list")]
#[command(version = VERSION)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print the commands that would run, without executing them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Git executable to invoke
    #[arg(long, env = "VIMOD_GIT", default_value = "git", hide = true, global = true)]
    pub git: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Install missing modules from the config file, or a single module
    Install {
        /// Repository URL or path; defaults to every module in the config file
        module: Option<String>,

        /// Save the module to the config file
        #[arg(short, long)]
        save: bool,
    },

    /// Remove bundles no longer listed in the config file
    Clean,
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    /// Parse arguments. Help output and usage errors share the same exit
    /// code contract: both terminate the process with code 1.
    pub fn new() -> Self {
        match Cli::try_parse() {
            Ok(cli) => Self { cli },
            Err(err) => {
                let _ = err.print();
                exit(1);
            }
        }
    }

    /// Run the parsed command, printing any error and exiting non-zero.
    pub async fn run(self) -> Result<()> {
        // Leave color handling to the terminal unless explicitly disabled
        if self.cli.no_color || !atty::is(atty::Stream::Stdout) {
            colored::control::set_override(false);
        }

        match self.handle_command().await {
            Ok(_) => Ok(()),
            Err(e) => {
                println!("{} {}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    async fn handle_command(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Install { module, save } => {
                let command = InstallCommand::new(
                    module.clone(),
                    *save,
                    self.cli.dry_run,
                    self.cli.verbose,
                    self.cli.git.clone(),
                );
                command.execute().await
            }
            Commands::Clean => CleanCommand::new(self.cli.verbose).execute().await,
        }
    }
}
