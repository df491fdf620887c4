//! Statistical spelling-correction models.
//!
//! Three independently trained models combine into one ranking
//! function: a character-frequency model (how coincidental is a
//! character overlap), a similarity index (shortlist plausible
//! candidates without scanning the vocabulary), and an error model
//! (which edit operations real misspellings actually contain).
//! [`handle::RespellHandle`] owns all three after a build and answers
//! queries immutably.
//!
//! # Architecture
//!
//! - [`charfreq`] -- Character probabilities and the overlap product
//! - [`similarity`] -- Shape-key buckets over prefix/suffix bigrams
//! - [`errormodel`] -- (operation, character) probabilities from labeled pairs
//! - [`suggest`] -- Candidate scoring, ranking, and tie-break policy
//! - [`corpus`] -- Corpus and labeled-misspelling line formats
//! - [`handle`] -- Build-once, query-many integration point

pub mod charfreq;
pub mod corpus;
pub mod errormodel;
pub mod handle;
pub mod similarity;
pub mod suggest;

/// Error type for model construction.
///
/// Build failures are reported before any model is considered built;
/// a handle never exists in a half-trained state.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The corpus contained no characters; no probability can be
    /// normalized over a total of zero.
    #[error("corpus is empty: no characters to normalize over")]
    EmptyCorpus,

    /// The labeled pairs produced no edit operations to count.
    #[error("training data is empty: no edit operations observed")]
    EmptyTraining,

    /// An input file could not be read.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
