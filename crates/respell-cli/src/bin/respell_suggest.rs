// respell-suggest: suggest corrections for misspelled words.
//
// Builds the models from a corpus and a labeled misspelling file,
// then suggests a correction for each word given on the command line,
// or for each stdin line if no words are given. Words already in the
// corpus are reported as correct.
//
// Usage:
//   respell-suggest [-c CORPUS] [-e ERRORS] [-t first|edits] [WORD...]

use std::io::{self, BufRead, Write};

use respell_model::handle::RespellHandle;
use respell_model::suggest::SuggestOptions;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if respell_cli::wants_help(&args) {
        println!("respell-suggest: suggest a correction for each misspelled word.");
        println!();
        println!("Usage: respell-suggest [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -c, --corpus PATH     One-word-per-line corpus file");
        println!("  -e, --errors PATH     Labeled misspelling file");
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

    let handle =
        respell_cli::load_handle(corpus_path.as_deref(), errors_path.as_deref(), options)
            .unwrap_or_else(|e| respell_cli::fatal(&e));

    let words: Vec<String> = args.into_iter().filter(|a| !a.starts_with('-')).collect();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let suggest_word =
        |word: &str, handle: &RespellHandle, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
            if handle.check(word) {
                let _ = writeln!(out, "{word} (correct)");
                return;
            }
            let suggestion = handle.suggest(word);
            if suggestion.is_none() {
                let _ = writeln!(out, "{word}: (no suggestion)");
            } else {
                let _ = writeln!(
                    out,
                    "{word} -> {} ({:.6e})",
                    suggestion.candidate, suggestion.score
                );
            }
        };

    if words.is_empty() {
        // Read from stdin
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            suggest_word(word, &handle, &mut out);
        }
    } else {
        for word in &words {
            suggest_word(word, &handle, &mut out);
        }
    }
}
