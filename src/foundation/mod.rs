/// Runtime configuration loaded from JSON.
pub mod config;
/// Identifiers, card metrics, and pixel helpers.
pub mod core;
/// Error taxonomy.
pub mod error;
