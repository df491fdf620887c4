// Corpus and labeled-misspelling readers: line formats and skip rules.
//
// Malformed lines are skipped, never fatal; emptiness is only
// diagnosed later, when a model build finds nothing to normalize.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::BuildError;

/// Lines starting with this character are headers, not data, and are
/// ignored by the labeled-pair reader.
pub const NOT_DATA_SENTINEL: char = '$';

/// One labeled training example: a real misspelling and the word it
/// was meant to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledPair {
    /// The misspelled form.
    pub malformed: String,
    /// The intended word.
    pub correct: String,
}

/// Read a one-word-per-line corpus.
///
/// Lines are trimmed; empty lines are skipped. Casing is preserved:
/// the character-frequency model tallies case-sensitively, and the
/// similarity index folds on its own.
pub fn read_corpus<R: BufRead>(reader: R) -> Result<Vec<String>, BuildError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        words.push(word.to_string());
    }
    Ok(words)
}

/// Read a corpus file from disk.
pub fn read_corpus_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, BuildError> {
    read_corpus(BufReader::new(File::open(path)?))
}

/// Read labeled misspelling lines: `correct misspelling...`.
///
/// Accepted variations, all observed in published misspelling lists:
/// - lines starting with [`NOT_DATA_SENTINEL`] are skipped entirely;
/// - purely numeric tokens (per-line word counts) are skipped;
/// - comma-separated groups expand to one pair per alternate
///   misspelling of the same correct word;
/// - lines left with fewer than two usable fields contribute nothing.
pub fn read_labeled_pairs<R: BufRead>(reader: R) -> Result<Vec<LabeledPair>, BuildError> {
    let mut pairs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with(NOT_DATA_SENTINEL) {
            continue;
        }

        let mut tokens = line
            .split_whitespace()
            .flat_map(|t| t.split(','))
            .filter(|t| !t.is_empty() && !t.chars().all(|c| c.is_ascii_digit()));

        let Some(correct) = tokens.next() else {
            continue;
        };
        for malformed in tokens {
            pairs.push(LabeledPair {
                malformed: malformed.to_string(),
                correct: correct.to_string(),
            });
        }
    }
    Ok(pairs)
}

/// Read a labeled misspelling file from disk.
pub fn read_labeled_pairs_file<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledPair>, BuildError> {
    read_labeled_pairs(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn pairs_of(text: &str) -> Vec<LabeledPair> {
        read_labeled_pairs(Cursor::new(text)).unwrap()
    }

    fn pair(correct: &str, malformed: &str) -> LabeledPair {
        LabeledPair {
            malformed: malformed.to_string(),
            correct: correct.to_string(),
        }
    }

    #[test]
    fn corpus_trims_and_skips_blank_lines() {
        let words = read_corpus(Cursor::new("because\n\n  cause  \n\n")).unwrap();
        assert_eq!(words, vec!["because", "cause"]);
    }

    #[test]
    fn corpus_preserves_case() {
        let words = read_corpus(Cursor::new("Because\n")).unwrap();
        assert_eq!(words, vec!["Because"]);
    }

    #[test]
    fn simple_pairs() {
        assert_eq!(
            pairs_of("because becaus\nreceive recieve\n"),
            vec![pair("because", "becaus"), pair("receive", "recieve")]
        );
    }

    #[test]
    fn sentinel_lines_are_skipped() {
        assert_eq!(
            pairs_of("$header line\nbecause becaus\n"),
            vec![pair("because", "becaus")]
        );
    }

    #[test]
    fn comma_groups_expand() {
        assert_eq!(
            pairs_of("because becaus,becuase\n"),
            vec![pair("because", "becaus"), pair("because", "becuase")]
        );
    }

    #[test]
    fn numeric_tokens_are_skipped() {
        assert_eq!(
            pairs_of("because becaus 3\n12 because becuase\n"),
            vec![pair("because", "becaus"), pair("because", "becuase")]
        );
    }

    #[test]
    fn lone_words_contribute_nothing() {
        assert!(pairs_of("because\n\n42\n").is_empty());
    }
}
