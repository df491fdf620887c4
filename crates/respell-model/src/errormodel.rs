// Error model: probability of each (operation, character) pair
// appearing in real misspellings, trained from labeled examples.

use hashbrown::HashMap;

use respell_edit::{EditOp, EditOpKind, edit_script};

use crate::BuildError;
use crate::corpus::LabeledPair;

/// Probability distribution over (operation kind, character) pairs.
///
/// Trained by replaying the edit script from each correct word to its
/// observed misspelling and counting what the script contains.
/// Normalized to sum to 1 over observed pairs; unseen pairs fall
/// through to an explicit smoothed default, never to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorModel {
    probabilities: HashMap<(EditOpKind, char), f64>,
    default_probability: f64,
}

impl ErrorModel {
    /// Train from (malformed, correct) pairs.
    ///
    /// For each pair the script transforming the correct word into the
    /// malformed one is computed and every (kind, character) in it is
    /// counted; counts are then divided by the grand total. Training
    /// data yielding no operations at all (empty, or only identical
    /// pairs) is a configuration error.
    pub fn train(pairs: &[LabeledPair]) -> Result<Self, BuildError> {
        let mut counts: HashMap<(EditOpKind, char), u64> = HashMap::new();
        let mut total: u64 = 0;
        for pair in pairs {
            for op in edit_script(&pair.correct, &pair.malformed) {
                *counts.entry((op.kind(), op.ch())).or_insert(0) += 1;
                total += 1;
            }
        }
        if total == 0 {
            return Err(BuildError::EmptyTraining);
        }

        let probabilities = counts
            .into_iter()
            .map(|(key, n)| (key, n as f64 / total as f64))
            .collect();
        Ok(Self {
            probabilities,
            default_probability: 1.0 / total as f64,
        })
    }

    /// Probability of a single operation, or the smoothed default for
    /// (kind, character) pairs never observed in training.
    pub fn probability(&self, op: EditOp) -> f64 {
        self.probabilities
            .get(&(op.kind(), op.ch()))
            .copied()
            .unwrap_or(self.default_probability)
    }

    /// Joint probability of a whole script: the product over its
    /// operations. The empty script has probability 1.
    pub fn script_probability(&self, ops: &[EditOp]) -> f64 {
        ops.iter().map(|&op| self.probability(op)).product()
    }

    /// Number of distinct (kind, character) pairs observed.
    pub fn observed_pairs(&self) -> usize {
        self.probabilities.len()
    }
}
