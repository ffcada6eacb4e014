//! # porter-queue
//!
//! Turns a batch of natural-language instructions into a queued, replayable
//! command sequence. Each instruction is handed to the external translator
//! (the Gorilla CLI) exactly once; failures are logged and skipped, never
//! fatal. The surviving commands are persisted to a script artifact and
//! returned together with an environment snapshot taken at queueing time.
//! Nothing in this crate ever executes a queued command.

pub mod builder;
pub mod mock;
pub mod script;
pub mod translator;

pub use builder::QueueBuilder;
pub use script::{DEFAULT_SCRIPT_BASE, ScriptFormat, write_script};
pub use translator::{GorillaCli, Translator};
