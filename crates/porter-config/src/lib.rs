//! # porter-config
//!
//! Configuration system for the Porter runtime. Reads from `porter.toml` and
//! environment variables. The file takes priority; env vars fill the gaps.

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::PorterConfig;
