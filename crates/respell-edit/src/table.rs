// Edit-script table fill: distance and operation reconstruction in
// a single dynamic-programming sweep.

use crate::op::EditOp;

/// Compute the edit script transforming `source` into `target`.
///
/// Classic (|s|+1) x (|t|+1) dynamic program with unit costs:
/// `d[i][0] = i`, `d[0][j] = j`, a no-cost diagonal step on equal
/// characters, otherwise `1 + min(deletion, insertion, substitution)`.
/// A parallel table of scripts is filled in the same sweep; each cell
/// extends its chosen predecessor's script with the operation selected
/// by the same minimum.
///
/// When deletion, insertion, and substitution tie for the minimum at a
/// cell, deletion wins, then insertion, then substitution. The order is
/// fixed: error-model training counts operations out of these scripts,
/// so reconstruction must be reproducible across runs.
///
/// Empty inputs are valid: an empty `source` yields a pure insertion
/// chain (one per target character, in order), an empty `target` a pure
/// deletion chain, and equal inputs an empty script.
///
/// Scripts are directional (`edit_script(s, t)` and `edit_script(t, s)`
/// differ in their operations), but their lengths agree.
pub fn edit_script(source: &str, target: &str) -> Vec<EditOp> {
    let s: Vec<char> = source.chars().collect();
    let t: Vec<char> = target.chars().collect();
    let m = s.len();
    let n = t.len();

    // dist[i][j]: edit distance between s[..i] and t[..j].
    // script[i][j]: the operation sequence achieving dist[i][j].
    let mut dist = vec![vec![0usize; n + 1]; m + 1];
    let mut script: Vec<Vec<Vec<EditOp>>> = vec![vec![Vec::new(); n + 1]; m + 1];

    for i in 1..=m {
        dist[i][0] = i;
        let mut ops = script[i - 1][0].clone();
        ops.push(EditOp::Delete(s[i - 1]));
        script[i][0] = ops;
    }
    for j in 1..=n {
        dist[0][j] = j;
        let mut ops = script[0][j - 1].clone();
        ops.push(EditOp::Insert(t[j - 1]));
        script[0][j] = ops;
    }

    for i in 1..=m {
        for j in 1..=n {
            if s[i - 1] == t[j - 1] {
                dist[i][j] = dist[i - 1][j - 1];
                script[i][j] = script[i - 1][j - 1].clone();
                continue;
            }
            let deletion = dist[i - 1][j];
            let insertion = dist[i][j - 1];
            let substitution = dist[i - 1][j - 1];

            if deletion <= insertion && deletion <= substitution {
                dist[i][j] = deletion + 1;
                let mut ops = script[i - 1][j].clone();
                ops.push(EditOp::Delete(s[i - 1]));
                script[i][j] = ops;
            } else if insertion <= substitution {
                dist[i][j] = insertion + 1;
                let mut ops = script[i][j - 1].clone();
                ops.push(EditOp::Insert(t[j - 1]));
                script[i][j] = ops;
            } else {
                dist[i][j] = substitution + 1;
                let mut ops = script[i - 1][j - 1].clone();
                ops.push(EditOp::Substitute(s[i - 1]));
                script[i][j] = ops;
            }
        }
    }

    std::mem::take(&mut script[m][n])
}

/// Edit distance between two strings.
///
/// Equal to `edit_script(source, target).len()`, computed with a
/// two-row table (no script reconstruction). Symmetric in its
/// arguments.
pub fn edit_distance(source: &str, target: &str) -> usize {
    let s: Vec<char> = source.chars().collect();
    let t: Vec<char> = target.chars().collect();
    let n = t.len();

    if s.is_empty() {
        return n;
    }
    if n == 0 {
        return s.len();
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for (i, &sc) in s.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &tc) in t.iter().enumerate() {
            curr[j + 1] = if sc == tc {
                prev[j]
            } else {
                1 + prev[j + 1].min(curr[j]).min(prev[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_words_empty_script() {
        assert!(edit_script("", "").is_empty());
        assert!(edit_script("word", "word").is_empty());
        assert_eq!(edit_distance("word", "word"), 0);
    }

    #[test]
    fn empty_source_is_insertion_chain() {
        assert_eq!(
            edit_script("", "abc"),
            vec![EditOp::Insert('a'), EditOp::Insert('b'), EditOp::Insert('c')]
        );
    }

    #[test]
    fn empty_target_is_deletion_chain() {
        assert_eq!(
            edit_script("abc", ""),
            vec![EditOp::Delete('a'), EditOp::Delete('b'), EditOp::Delete('c')]
        );
    }

    #[test]
    fn single_operations() {
        assert_eq!(edit_script("cat", "cart"), vec![EditOp::Insert('r')]);
        assert_eq!(edit_script("cart", "cat"), vec![EditOp::Delete('r')]);
        // Substitution carries the source character replaced away.
        assert_eq!(edit_script("cat", "cut"), vec![EditOp::Substitute('a')]);
    }

    #[test]
    fn reference_distance() {
        // Oracle value for the classic textbook pair.
        assert_eq!(edit_distance("exponential", "polynomial"), 6);
        assert_eq!(edit_script("exponential", "polynomial").len(), 6);
    }

    #[test]
    fn distance_is_symmetric() {
        for (a, b) in [
            ("exponential", "polynomial"),
            ("becaus", "because"),
            ("", "word"),
            ("kitten", "sitting"),
        ] {
            assert_eq!(edit_distance(a, b), edit_distance(b, a));
            assert_eq!(edit_script(a, b).len(), edit_script(b, a).len());
        }
    }

    #[test]
    fn scripts_are_directional() {
        assert_ne!(edit_script("cat", "cart"), edit_script("cart", "cat"));
    }

    #[test]
    fn tie_break_prefers_deletion() {
        // At the final cell all three moves cost the same; deletion
        // must win for reproducible training counts.
        assert_eq!(
            edit_script("ab", "ba"),
            vec![EditOp::Insert('b'), EditOp::Delete('b')]
        );
    }

    #[test]
    fn script_length_matches_distance() {
        for (a, b) in [("kitten", "sitting"), ("flaw", "lawn"), ("gumbo", "gambol")] {
            assert_eq!(edit_script(a, b).len(), edit_distance(a, b));
        }
    }
}
