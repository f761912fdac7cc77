//! File system operations: the module config store.

pub mod config_store;

pub use config_store::{ConfigStore, ConfigStoreError};
