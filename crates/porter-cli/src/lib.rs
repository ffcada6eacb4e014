//! # porter-cli
//!
//! Command-line interface for the Porter runtime.
//!
//! ## Commands
//!
//! - `porter queue`: translate instructions and persist the command queue
//! - `porter run`: queue, confirm, and execute instructions
//! - `porter serve`: start the HTTP API server
//! - `porter config`: show the resolved configuration
//! - `porter version`: show version info

pub mod commands;

pub use commands::Cli;
