//! Edit-script engine.
//!
//! Computes the minimum number of single-character insertions,
//! deletions, and substitutions transforming one word into another,
//! and reconstructs the exact operation sequence achieving it, not
//! just the count. Error-model training downstream needs to know
//! which operation touched which character, so every operation
//! carries its literal character payload.
//!
//! # Architecture
//!
//! - [`op`] -- The `EditOp` tagged union and its kind/payload accessors
//! - [`table`] -- Dynamic-programming table fill and script reconstruction

pub mod op;
pub mod table;

pub use op::{EditOp, EditOpKind};
pub use table::{edit_distance, edit_script};
