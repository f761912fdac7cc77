//! Application layer: the use cases behind each CLI command.

pub mod use_cases;
