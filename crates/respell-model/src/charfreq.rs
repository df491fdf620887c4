// Character-frequency model: probability of observing each character
// in the corpus, and the chance-overlap product between two words.

use hashbrown::HashMap;

use respell_core::word::char_counts;

use crate::BuildError;

/// Probability distribution over the characters of a corpus.
///
/// Probabilities are normalized to sum to 1 over the observed
/// characters. Lookups for characters the corpus never contained fall
/// through to an explicit smoothed default (one pseudo-count over the
/// total), never to zero and never by mutating the model.
#[derive(Debug, Clone, PartialEq)]
pub struct CharFrequencyModel {
    probabilities: HashMap<char, f64>,
    default_probability: f64,
}

impl CharFrequencyModel {
    /// Build the model by tallying every character of every corpus word.
    ///
    /// Tallying is case-sensitive. An empty corpus (a character total
    /// of zero) is a configuration error: nothing can be normalized.
    pub fn build<'a, I>(words: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: HashMap<char, u64> = HashMap::new();
        let mut total: u64 = 0;
        for word in words {
            for ch in word.chars() {
                *counts.entry(ch).or_insert(0) += 1;
                total += 1;
            }
        }
        if total == 0 {
            return Err(BuildError::EmptyCorpus);
        }

        let probabilities = counts
            .into_iter()
            .map(|(ch, n)| (ch, n as f64 / total as f64))
            .collect();
        Ok(Self {
            probabilities,
            default_probability: 1.0 / total as f64,
        })
    }

    /// Probability of `ch` in the corpus, or the smoothed default for
    /// characters never observed.
    pub fn probability(&self, ch: char) -> f64 {
        self.probabilities
            .get(&ch)
            .copied()
            .unwrap_or(self.default_probability)
    }

    /// Number of distinct characters observed during the build.
    pub fn observed_chars(&self) -> usize {
        self.probabilities.len()
    }

    /// Likelihood that the character overlap between `a` and `b`
    /// occurs by chance.
    ///
    /// The overlap is a bounded multiset intersection: each shared
    /// character is consumed at most min(count in a, count in b)
    /// times. The result is the product of per-character probabilities
    /// raised to their intersection multiplicity. Lower values mean
    /// the shared characters are rarer, hence more diagnostic of a
    /// genuine relationship between the two words.
    pub fn overlap_probability(&self, a: &str, b: &str) -> f64 {
        let mut remaining = char_counts(a);
        let mut probability = 1.0;
        for ch in b.chars() {
            if let Some(n) = remaining.get_mut(&ch) {
                if *n > 0 {
                    *n -= 1;
                    probability *= self.probability(ch);
                }
            }
        }
        probability
    }
}
