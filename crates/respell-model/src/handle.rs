// RespellHandle: top-level integration point for the correction
// engine.
//
// Owns the three trained models and the corpus vocabulary. Built once
// from a corpus and a labeled misspelling set, then queried through
// `&self` only, so concurrent reads after the build need no locking.

use hashbrown::HashSet;

use respell_core::suggestion::Suggestion;
use respell_core::word::fold_word;

use crate::BuildError;
use crate::charfreq::CharFrequencyModel;
use crate::corpus::LabeledPair;
use crate::errormodel::ErrorModel;
use crate::similarity::SimilarityIndex;
use crate::suggest::{SuggestOptions, rank_candidates};

/// Build-once, query-many owner of the trained models.
pub struct RespellHandle {
    char_model: CharFrequencyModel,
    index: SimilarityIndex,
    error_model: ErrorModel,
    /// Case-folded corpus vocabulary for membership checks.
    vocabulary: HashSet<String>,
    options: SuggestOptions,
}

impl RespellHandle {
    /// Build all models.
    ///
    /// The character model and the similarity index are built
    /// independently from the corpus; the error model from the labeled
    /// pairs. Any build failure is reported before a handle exists, so
    /// a handle is never half-trained.
    pub fn build(
        corpus: &[String],
        pairs: &[LabeledPair],
        options: SuggestOptions,
    ) -> Result<Self, BuildError> {
        let char_model = CharFrequencyModel::build(corpus.iter().map(String::as_str))?;
        let index = SimilarityIndex::build(corpus.iter().map(String::as_str));
        let error_model = ErrorModel::train(pairs)?;
        let vocabulary = corpus.iter().map(|w| fold_word(w.trim())).collect();
        Ok(Self {
            char_model,
            index,
            error_model,
            vocabulary,
            options,
        })
    }

    /// Whether the (case-folded) word appears in the corpus vocabulary.
    pub fn check(&self, word: &str) -> bool {
        self.vocabulary.contains(fold_word(word).as_str())
    }

    /// Suggest the most likely intended word for a misspelled input.
    ///
    /// The input is case-folded first. A word already in the
    /// vocabulary suggests itself with score 0; otherwise candidates
    /// are shortlisted through the similarity index and ranked. An
    /// unknown short word yields the no-suggestion sentinel.
    pub fn suggest(&self, word: &str) -> Suggestion {
        let folded = fold_word(word);
        if self.vocabulary.contains(folded.as_str()) {
            return Suggestion {
                candidate: folded,
                query: word.to_string(),
                score: 0.0,
            };
        }
        rank_candidates(
            &folded,
            word,
            &self.index,
            &self.char_model,
            &self.error_model,
            &self.options,
        )
    }

    /// The character-frequency model.
    pub fn char_model(&self) -> &CharFrequencyModel {
        &self.char_model
    }

    /// The similarity index.
    pub fn similarity_index(&self) -> &SimilarityIndex {
        &self.index
    }

    /// The edit-operation error model.
    pub fn error_model(&self) -> &ErrorModel {
        &self.error_model
    }

    /// The options the handle was built with.
    pub fn options(&self) -> &SuggestOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn pairs() -> Vec<LabeledPair> {
        vec![
            LabeledPair {
                malformed: "becaus".to_string(),
                correct: "because".to_string(),
            },
            LabeledPair {
                malformed: "recieve".to_string(),
                correct: "receive".to_string(),
            },
        ]
    }

    fn handle(words: &[&str]) -> RespellHandle {
        RespellHandle::build(&corpus(words), &pairs(), SuggestOptions::default()).unwrap()
    }

    #[test]
    fn empty_corpus_fails_before_handle_exists() {
        let err = RespellHandle::build(&[], &pairs(), SuggestOptions::default());
        assert!(matches!(err, Err(BuildError::EmptyCorpus)));
    }

    #[test]
    fn empty_training_fails_before_handle_exists() {
        let err = RespellHandle::build(&corpus(&["because"]), &[], SuggestOptions::default());
        assert!(matches!(err, Err(BuildError::EmptyTraining)));
    }

    #[test]
    fn known_word_suggests_itself() {
        let h = handle(&["because", "classes"]);
        let s = h.suggest("Because");
        assert_eq!(s.candidate, "because");
        assert_eq!(s.query, "Because");
        assert_eq!(s.score, 0.0);
    }

    #[test]
    fn check_is_case_folded() {
        let h = handle(&["Because"]);
        assert!(h.check("because"));
        assert!(h.check("BECAUSE"));
        assert!(!h.check("becaus"));
    }

    #[test]
    fn misspelling_gets_corrected() {
        let h = handle(&["because", "classes", "mission"]);
        let s = h.suggest("becaus");
        assert_eq!(s.candidate, "because");
        assert!(s.score < 1.0);
    }

    #[test]
    fn unknown_short_word_yields_sentinel() {
        let h = handle(&["because"]);
        assert!(h.suggest("zq").is_none());
    }

    #[test]
    fn handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RespellHandle>();
    }
}
