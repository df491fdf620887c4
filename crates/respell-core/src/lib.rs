//! Shared types and word utilities for the respell correction engine.
//!
//! - [`word`] -- Case folding and character multiset counting
//! - [`suggestion`] -- The suggestion result type and its sentinel

pub mod suggestion;
pub mod word;

pub use suggestion::{NO_SUGGESTION_SCORE, Suggestion};
pub use word::{char_counts, fold_word};
