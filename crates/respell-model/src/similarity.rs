// Similarity index: shape-key buckets for shortlisting candidate
// corrections without a full-vocabulary scan.

use hashbrown::{HashMap, HashSet};

use respell_core::word::fold_word;

/// Words shorter than this are neither indexed nor looked up. Short
/// words share prefix/suffix bigrams too freely for the shortlist to
/// be discriminative.
pub const MIN_INDEXED_LEN: usize = 6;

/// How many leading and trailing characters the shape keys are drawn
/// from.
const SHAPE_SPAN: usize = 3;

/// All ordered length-2 subsequences of the given characters
/// (order-preserving combinations, not permutations).
fn bigrams(chars: &[char]) -> Vec<[char; 2]> {
    let mut out = Vec::new();
    for i in 0..chars.len() {
        for j in i + 1..chars.len() {
            out.push([chars[i], chars[j]]);
        }
    }
    out
}

/// Shape keys for a word: every prefix bigram concatenated with every
/// suffix bigram. A word long enough to be indexed yields nine keys
/// (three bigrams from each end).
fn shape_keys(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let prefix = &chars[..SHAPE_SPAN.min(chars.len())];
    let suffix = &chars[chars.len().saturating_sub(SHAPE_SPAN)..];

    let suffix_bigrams = bigrams(suffix);
    let mut keys = Vec::new();
    for pre in bigrams(prefix) {
        for suf in &suffix_bigrams {
            keys.push([pre[0], pre[1], suf[0], suf[1]].iter().collect());
        }
    }
    keys
}

/// Buckets of corpus words keyed by their shape fingerprints.
///
/// Built once, then read-only. Bucket members are interned word ids in
/// corpus insertion order, so lookups are deterministic; a hashed set
/// per bucket would make "first candidate encountered" meaningless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityIndex {
    /// Indexed words, unique and case-folded, in corpus order.
    words: Vec<String>,
    /// Word to id, for build-time dedup and membership checks.
    ids: HashMap<String, u32>,
    /// Shape key to ids of the words sharing it, in insertion order.
    buckets: HashMap<String, Vec<u32>>,
}

impl SimilarityIndex {
    /// Index every qualifying corpus word under each of its shape keys.
    ///
    /// Words are case-folded; duplicates and words under
    /// [`MIN_INDEXED_LEN`] are skipped.
    pub fn build<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut index = Self {
            words: Vec::new(),
            ids: HashMap::new(),
            buckets: HashMap::new(),
        };
        for word in words {
            let folded = fold_word(word.trim());
            if folded.chars().count() < MIN_INDEXED_LEN {
                continue;
            }
            if index.ids.contains_key(folded.as_str()) {
                continue;
            }
            let id = index.words.len() as u32;
            for key in shape_keys(&folded) {
                index.buckets.entry(key).or_default().push(id);
            }
            index.ids.insert(folded.clone(), id);
            index.words.push(folded);
        }
        index
    }

    /// Shortlist indexed words sharing at least one shape key with
    /// `word`.
    ///
    /// The query is case-folded and its keys regenerated exactly as at
    /// build time. Queries under the length threshold yield an empty
    /// shortlist, never an error. Order is deterministic: keys in
    /// generation order, bucket members in corpus order, each word
    /// reported once.
    pub fn lookup(&self, word: &str) -> Vec<&str> {
        let folded = fold_word(word);
        if folded.chars().count() < MIN_INDEXED_LEN {
            return Vec::new();
        }

        let mut seen: HashSet<u32> = HashSet::new();
        let mut shortlist = Vec::new();
        for key in shape_keys(&folded) {
            if let Some(bucket) = self.buckets.get(key.as_str()) {
                for &id in bucket {
                    if seen.insert(id) {
                        shortlist.push(self.words[id as usize].as_str());
                    }
                }
            }
        }
        shortlist
    }

    /// Whether the (case-folded) word was indexed.
    pub fn contains(&self, word: &str) -> bool {
        self.ids.contains_key(fold_word(word).as_str())
    }

    /// Number of indexed words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word qualified for indexing.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn bigrams_are_ordered_subsequences() {
        let got = bigrams(&chars("abc"));
        assert_eq!(got, vec![['a', 'b'], ['a', 'c'], ['b', 'c']]);
    }

    #[test]
    fn nine_keys_per_indexed_word() {
        let keys = shape_keys("because");
        assert_eq!(keys.len(), 9);
        // First prefix bigram "be" paired with each suffix bigram of "use".
        assert_eq!(keys[0], "beus");
        assert_eq!(keys[1], "beue");
        assert_eq!(keys[2], "bese");
        assert!(keys.contains(&"bcse".to_string()));
    }

    #[test]
    fn short_words_are_not_indexed() {
        let index = SimilarityIndex::build(["cat", "dog", "because"]);
        assert_eq!(index.len(), 1);
        assert!(index.contains("because"));
        assert!(!index.contains("cat"));
    }

    #[test]
    fn short_query_yields_empty_shortlist() {
        let index = SimilarityIndex::build(["because"]);
        assert!(index.lookup("cat").is_empty());
        assert!(index.lookup("").is_empty());
    }

    #[test]
    fn lookup_finds_shared_shapes() {
        let index = SimilarityIndex::build(["because", "becalmed", "plainly"]);
        let shortlist = index.lookup("becaus");
        assert!(shortlist.contains(&"because"));
        assert!(!shortlist.contains(&"plainly"));
    }

    #[test]
    fn shortlist_satisfies_length_and_membership() {
        let corpus = ["because", "classes", "missing", "mission", "kitten"];
        let index = SimilarityIndex::build(corpus);
        for candidate in index.lookup("mising") {
            assert!(candidate.chars().count() >= MIN_INDEXED_LEN);
            assert!(corpus.contains(&candidate));
        }
    }

    #[test]
    fn lookup_is_case_folded() {
        let index = SimilarityIndex::build(["Because"]);
        assert!(index.lookup("BECAUS").contains(&"because"));
    }

    #[test]
    fn duplicates_collapse() {
        let once = SimilarityIndex::build(["because"]);
        let twice = SimilarityIndex::build(["because", "because"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn lookup_order_is_deterministic() {
        let corpus = ["mission", "missing", "misting"];
        let index = SimilarityIndex::build(corpus);
        // All three share the query's leading bigrams; corpus order
        // must be preserved so "first seen" tie-breaking is stable.
        assert_eq!(index.lookup("missin"), vec!["mission", "missing", "misting"]);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let corpus = ["because", "classes", "missing"];
        let a = SimilarityIndex::build(corpus);
        let b = SimilarityIndex::build(corpus);
        assert_eq!(a, b);
    }
}
