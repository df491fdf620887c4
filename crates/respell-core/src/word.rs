// Word normalization and character counting.

use hashbrown::HashMap;

/// Case-fold a word to lowercase.
///
/// All model operations work on folded words; original casing is kept
/// only where it must survive into output.
pub fn fold_word(word: &str) -> String {
    word.to_lowercase()
}

/// Count the occurrences of each character in a word (a character
/// multiset).
pub fn char_counts(word: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for ch in word.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_lowercases() {
        assert_eq!(fold_word("Because"), "because");
        assert_eq!(fold_word("BECAUSE"), "because");
        assert_eq!(fold_word("because"), "because");
    }

    #[test]
    fn fold_empty() {
        assert_eq!(fold_word(""), "");
    }

    #[test]
    fn counts_multiset() {
        let counts = char_counts("letter");
        assert_eq!(counts[&'l'], 1);
        assert_eq!(counts[&'e'], 2);
        assert_eq!(counts[&'t'], 2);
        assert_eq!(counts[&'r'], 1);
        assert_eq!(counts.get(&'x'), None);
    }

    #[test]
    fn counts_empty_word() {
        assert!(char_counts("").is_empty());
    }
}
