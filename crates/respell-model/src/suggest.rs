// Candidate scoring and ranking: combine the three models into one
// ordering and pick the best correction.

use respell_core::suggestion::{NO_SUGGESTION_SCORE, Suggestion};
use respell_edit::{edit_distance, edit_script};

use crate::charfreq::CharFrequencyModel;
use crate::errormodel::ErrorModel;
use crate::similarity::SimilarityIndex;

/// Policy for breaking ties between candidates with equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Keep the first candidate encountered in shortlist order.
    #[default]
    FirstSeen,
    /// Prefer the candidate with the smaller edit distance to the
    /// query; falls back to first-seen when distances also tie.
    FewerEdits,
}

/// Options controlling suggestion behavior.
#[derive(Debug, Clone, Default)]
pub struct SuggestOptions {
    /// How equal-score candidates are separated.
    pub tie_break: TieBreak,
}

/// Score one candidate against the query. Lower is better.
///
/// The overlap probability estimates how coincidental the characters
/// shared with the query are (lower = more diagnostic), and the
/// probability of the edit script from candidate to query is
/// subtracted from it, so candidates reachable through operations that
/// real misspellings actually contain sink further down. The result
/// may be negative; ordering is kept signed.
pub fn score_candidate(
    query: &str,
    candidate: &str,
    char_model: &CharFrequencyModel,
    error_model: &ErrorModel,
) -> f64 {
    let overlap = char_model.overlap_probability(query, candidate);
    let edits = error_model.script_probability(&edit_script(candidate, query));
    overlap - edits
}

/// Rank the shortlisted candidates for `query` and return the best.
///
/// `query` must already be case-folded; `original` is echoed into the
/// result with its casing intact. An empty shortlist returns the
/// no-suggestion sentinel.
pub fn rank_candidates(
    query: &str,
    original: &str,
    index: &SimilarityIndex,
    char_model: &CharFrequencyModel,
    error_model: &ErrorModel,
    options: &SuggestOptions,
) -> Suggestion {
    let fewer_edits = options.tie_break == TieBreak::FewerEdits;

    let mut best: &str = "";
    let mut best_score = NO_SUGGESTION_SCORE;
    let mut best_dist = usize::MAX;

    for candidate in index.lookup(query) {
        let score = score_candidate(query, candidate, char_model, error_model);
        if score < best_score {
            best = candidate;
            best_score = score;
            best_dist = if fewer_edits {
                edit_distance(candidate, query)
            } else {
                usize::MAX
            };
        } else if fewer_edits && !best.is_empty() && score == best_score {
            let dist = edit_distance(candidate, query);
            if dist < best_dist {
                best = candidate;
                best_dist = dist;
            }
        }
    }

    if best.is_empty() {
        return Suggestion::none(original);
    }
    Suggestion {
        candidate: best.to_string(),
        query: original.to_string(),
        score: best_score,
    }
}
