//! # vimod - Vim Plugin Bundle Installer
//!
//! `vimod` is a command-line tool that keeps a vim `bundle` directory in sync
//! with a plain-text list of plugin repositories. Modules listed in
//! `~/.vim/vim-modules.conf` are cloned into `~/.vim/bundle` by shelling out
//! to the `git` executable; modules whose bundle directory already exists are
//! skipped.
//!
//! ## Config file
//!
//! One repository identifier per line, `#` starts a comment:
//!
//! ```text
//! # colors and UI
//! https://github.com/altercation/vim-colors-solarized.git
//!   https://github.com/vim-airline/vim-airline  # indentation is fine
//!
//! git@github.com:tpope/vim-fugitive.git
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! vimod install                      # clone everything missing
//! vimod install tpope/vim-sleuth -s  # clone one module and persist it
//! vimod install --dry-run            # print the clone commands instead
//! ```
//!
//! ## Architecture
//!
//! The crate is organized using clean architecture principles:
//!
//! - [`domain`]: module list entity and module source value object
//! - [`application`]: install and clean use cases
//! - [`infrastructure`]: git shell-out client and config file store
//! - [`presentation`]: CLI interface and user interaction
//! - [`common`]: shared error handling
//!
//! ## Using the Library
//!
//! ```rust,no_run
//! use vimod::application::use_cases::install_modules::{
//!     InstallModulesConfig, InstallModulesUseCase,
//! };
//! use vimod::domain::entities::workspace::VimWorkspace;
//! use vimod::infrastructure::scm::GitScm;
//!
//! # async fn example() -> vimod::Result<()> {
//! let workspace = VimWorkspace::discover()?;
//! let use_case = InstallModulesUseCase::new(
//!     InstallModulesConfig::default(),
//!     Box::new(GitScm::new()),
//! );
//!
//! let result = use_case.install_all(&workspace).await?;
//! println!("{} cloned, {} skipped", result.cloned_count, result.skipped_count);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::VimodError;
pub use crate::common::result::VimodResult as Result;
