//! Value objects of the domain layer.

pub mod module_source;

pub use module_source::{ModuleSource, ModuleSourceError};
