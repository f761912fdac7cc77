//! SCM (Source Control Management) operations infrastructure
//!
//! Cloning is delegated entirely to an external executable; this module
//! provides the trait seam and the git implementation.

pub mod git_scm;
pub mod scm_interface;

pub use git_scm::GitScm;
pub use scm_interface::{ScmError, ScmOperations};

#[cfg(test)]
pub use scm_interface::MockScmOperations;
