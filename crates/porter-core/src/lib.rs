//! # porter-core
//!
//! Core types, traits, and primitives for Porter, a runtime that translates
//! natural-language instructions into vetted shell command queues and executes
//! them only after explicit human confirmation. This crate defines the shared
//! vocabulary used by every other crate in the workspace.

pub mod error;
pub mod skill;
pub mod types;

pub use error::{PorterError, Result};
pub use skill::{NoSkills, SkillRuntime};
pub use types::*;
