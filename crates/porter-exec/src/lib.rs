//! # porter-exec
//!
//! The human-in-the-loop half of Porter: a confirmation gate and a session
//! state machine that executes a queued command sequence only after the gate
//! opens. Commands run strictly sequentially; individual failures never stop
//! the batch; the working directory is snapshotted and diffed after every
//! command to surface side effects.

pub mod confirmation;
pub mod session;

pub use confirmation::Confirmation;
pub use session::{ExecSession, SessionState};
