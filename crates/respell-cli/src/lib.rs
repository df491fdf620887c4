// respell-cli: shared utilities for the CLI tools.

use std::path::PathBuf;
use std::process;

use respell_model::corpus::{read_corpus_file, read_labeled_pairs_file};
use respell_model::handle::RespellHandle;
use respell_model::suggest::{SuggestOptions, TieBreak};

/// Default corpus file name in the working directory.
const CORPUS_FILE: &str = "corpus";

/// Default labeled-misspelling file name in the working directory.
const ERRORS_FILE: &str = "misspellings";

/// Build a handle from the resolved corpus and misspelling files.
///
/// Search order for each file:
/// 1. the explicit path argument (from `-c` / `-e`), if provided
/// 2. the `RESPELL_CORPUS_PATH` / `RESPELL_ERRORS_PATH` environment
///    variable
/// 3. `./corpus` / `./misspellings` in the working directory
pub fn load_handle(
    corpus_path: Option<&str>,
    errors_path: Option<&str>,
    options: SuggestOptions,
) -> Result<RespellHandle, String> {
    let corpus_file = resolve_path(corpus_path, "RESPELL_CORPUS_PATH", CORPUS_FILE)?;
    let errors_file = resolve_path(errors_path, "RESPELL_ERRORS_PATH", ERRORS_FILE)?;

    let corpus = read_corpus_file(&corpus_file)
        .map_err(|e| format!("failed to read corpus {}: {}", corpus_file.display(), e))?;
    eprintln!("respell: corpus {} ({} words)", corpus_file.display(), corpus.len());

    let pairs = read_labeled_pairs_file(&errors_file)
        .map_err(|e| format!("failed to read misspellings {}: {}", errors_file.display(), e))?;
    eprintln!(
        "respell: misspellings {} ({} labeled pairs)",
        errors_file.display(),
        pairs.len()
    );

    RespellHandle::build(&corpus, &pairs, options).map_err(|e| format!("model build failed: {e}"))
}

/// Resolve one input file: explicit flag, then environment variable,
/// then working-directory default.
fn resolve_path(explicit: Option<&str>, env_var: &str, default: &str) -> Result<PathBuf, String> {
    if let Some(p) = explicit {
        return Ok(PathBuf::from(p));
    }
    if let Ok(p) = std::env::var(env_var) {
        return Ok(PathBuf::from(p));
    }
    let fallback = PathBuf::from(default);
    if fallback.is_file() {
        return Ok(fallback);
    }
    Err(format!(
        "no {default} file found: pass a path, set {env_var}, or place ./{default}"
    ))
}

/// Extract a `-c/--corpus` style flag and its value, returning the
/// value and the remaining arguments.
pub fn take_flag_value(args: &[String], short: &str, long: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut rest = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == short || arg == long {
            if let Some(v) = iter.next() {
                value = Some(v.clone());
            } else {
                fatal(&format!("{long} requires a value"));
            }
        } else {
            rest.push(arg.clone());
        }
    }
    (value, rest)
}

/// Parse the tie-break policy flag value.
pub fn parse_tie_break(value: &str) -> TieBreak {
    match value {
        "first" => TieBreak::FirstSeen,
        "edits" => TieBreak::FewerEdits,
        other => fatal(&format!("unknown tie-break policy: {other} (use first|edits)")),
    }
}

/// Whether any help flag is present.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "-h" || a == "--help")
}

/// Print an error message and exit with a failure status.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flag_value_is_extracted() {
        let (value, rest) = take_flag_value(&args(&["-c", "words.txt", "becaus"]), "-c", "--corpus");
        assert_eq!(value.as_deref(), Some("words.txt"));
        assert_eq!(rest, args(&["becaus"]));
    }

    #[test]
    fn long_flag_matches_too() {
        let (value, rest) = take_flag_value(&args(&["--corpus", "w"]), "-c", "--corpus");
        assert_eq!(value.as_deref(), Some("w"));
        assert!(rest.is_empty());
    }

    #[test]
    fn missing_flag_leaves_args_untouched() {
        let (value, rest) = take_flag_value(&args(&["becaus", "recieve"]), "-c", "--corpus");
        assert!(value.is_none());
        assert_eq!(rest, args(&["becaus", "recieve"]));
    }

    #[test]
    fn help_detection() {
        assert!(wants_help(&args(&["--help"])));
        assert!(wants_help(&args(&["-h"])));
        assert!(!wants_help(&args(&["becaus"])));
    }

    #[test]
    fn tie_break_values() {
        assert_eq!(parse_tie_break("first"), TieBreak::FirstSeen);
        assert_eq!(parse_tie_break("edits"), TieBreak::FewerEdits);
    }
}
