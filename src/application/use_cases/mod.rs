//! Use cases implementing the command workflows.

pub mod clean_modules;
pub mod install_modules;

pub use clean_modules::{CleanModulesUseCase, CleanResult};
pub use install_modules::{InstallModulesConfig, InstallModulesUseCase, InstallResult};
