// respell-eval: replay a labeled test file and report accuracy.
//
// Each usable line of the test file pairs a correct word with an
// observed misspelling; the engine suggests a correction for every
// misspelling and the fraction matching the labeled correct word is
// reported. Pairs where either side is shorter than the similarity
// threshold are skipped, matching what the engine can shortlist.
//
// Usage:
//   respell-eval [-c CORPUS] [-e ERRORS] [-t first|edits] TESTFILE

use std::io::{self, Write};

use respell_core::word::fold_word;
use respell_model::corpus::read_labeled_pairs_file;
use respell_model::similarity::MIN_INDEXED_LEN;
use respell_model::suggest::SuggestOptions;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if respell_cli::wants_help(&args) {
        println!("respell-eval: measure suggestion accuracy over a labeled test file.");
        println!();
        println!("Usage: respell-eval [OPTIONS] TESTFILE");
        println!();
        println!("TESTFILE holds `correct misspelling` lines in the same formats");
        println!("as the training file.");
        println!();
        println!("Options:");
        println!("  -c, --corpus PATH     One-word-per-line corpus file");
        println!("  -e, --errors PATH     Labeled misspelling file for training");
        println!("  -t, --tie-break MODE  Equal-score policy: first|edits (default: first)");
        println!("  -h, --help            Print this help");
        return;
    }

    let (corpus_path, args) = respell_cli::take_flag_value(&args, "-c", "--corpus");
    let (errors_path, args) = respell_cli::take_flag_value(&args, "-e", "--errors");
    let (tie_break, args) = respell_cli::take_flag_value(&args, "-t", "--tie-break");

    let mut options = SuggestOptions::default();
    if let Some(value) = tie_break.as_deref() {
        options.tie_break = respell_cli::parse_tie_break(value);
    }

    let test_file = match args.iter().find(|a| !a.starts_with('-')) {
        Some(path) => path.clone(),
        None => respell_cli::fatal("no TESTFILE given"),
    };

    let handle =
        respell_cli::load_handle(corpus_path.as_deref(), errors_path.as_deref(), options)
            .unwrap_or_else(|e| respell_cli::fatal(&e));

    let pairs = read_labeled_pairs_file(&test_file)
        .unwrap_or_else(|e| respell_cli::fatal(&format!("failed to read {test_file}: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut total = 0usize;
    let mut correct = 0usize;
    for pair in &pairs {
        if pair.correct.chars().count() < MIN_INDEXED_LEN
            || pair.malformed.chars().count() < MIN_INDEXED_LEN
        {
            continue;
        }
        let suggestion = handle.suggest(&pair.malformed);
        let hit = suggestion.candidate == fold_word(&pair.correct);
        if hit {
            correct += 1;
        } else {
            let _ = writeln!(
                out,
                "miss: {} -> {} (wanted {})",
                pair.malformed, suggestion.candidate, pair.correct
            );
        }
        total += 1;
    }

    if total == 0 {
        respell_cli::fatal("test file contained no usable pairs");
    }
    let _ = writeln!(
        out,
        "{correct} / {total} correct ({:.1}%)",
        100.0 * correct as f64 / total as f64
    );
}
