// The suggestion result type and its no-suggestion sentinel.

/// Score assigned when no candidate could be shortlisted.
///
/// Every real candidate scores strictly below this: an overlap
/// probability is at most 1 and the edit-probability product
/// subtracted from it is always positive.
pub const NO_SUGGESTION_SCORE: f64 = 1.0;

/// A ranked correction for a query word.
///
/// Lower scores rank better. Scores may be negative; ordering is kept
/// signed rather than clamped at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// The best-ranked candidate, case-folded. Empty if no candidate
    /// was shortlisted.
    pub candidate: String,
    /// The query word as originally given, casing preserved.
    pub query: String,
    /// The candidate's score (lower is better), or
    /// [`NO_SUGGESTION_SCORE`] if no candidate was found.
    pub score: f64,
}

impl Suggestion {
    /// The empty-result sentinel for a query that shortlisted nothing.
    pub fn none(query: &str) -> Self {
        Self {
            candidate: String::new(),
            query: query.to_string(),
            score: NO_SUGGESTION_SCORE,
        }
    }

    /// Whether this is the no-suggestion sentinel.
    pub fn is_none(&self) -> bool {
        self.candidate.is_empty()
    }
}
