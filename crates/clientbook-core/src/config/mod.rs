//! Application configuration
//!
//! Settings are read from a YAML file; every key is optional and falls back to
//! a default, and a missing file yields the defaults altogether.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::AppConfig;

#[cfg(test)]
mod tests;
