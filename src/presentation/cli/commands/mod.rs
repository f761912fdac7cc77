pub mod clean;
pub mod install;

pub use clean::*;
pub use install::*;
