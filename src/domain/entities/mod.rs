//! Entities of the domain layer.

pub mod module_list;
pub mod workspace;

pub use module_list::{ModuleEntry, ModuleList};
pub use workspace::{VimWorkspace, WorkspaceError};
