//! Shared error handling for the crate.

pub mod error;
pub mod result;

pub use error::VimodError;
pub use result::VimodResult;
