//! # porter-env
//!
//! Environment snapshotting and diffing. A snapshot records, for every
//! directory reachable from the working directory, the names of the entries
//! directly inside it; a diff reports only the paths whose contents changed
//! between two snapshots. Both sides of the execution pipeline use these to
//! surface filesystem side effects.

pub mod diff;
pub mod snapshot;

pub use diff::diff;
pub use snapshot::{DEFAULT_MAX_DEPTH, capture};
