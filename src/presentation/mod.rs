//! Presentation layer: CLI parsing and user-facing output.

pub mod cli;
