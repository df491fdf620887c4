// Edit operations: the tagged units an edit script is made of.

use std::fmt;

/// The kind of an edit operation, without its character payload.
///
/// Used as half of the (kind, character) key the error model counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOpKind {
    Insert,
    Delete,
    Substitute,
}

/// A single-character edit transforming a source string toward a target.
///
/// The payload is the literal character the operation affects: the
/// character inserted into the target, the source character deleted,
/// or the source character substituted away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOp {
    Insert(char),
    Delete(char),
    Substitute(char),
}

impl EditOp {
    /// The operation kind, with the payload stripped.
    pub fn kind(self) -> EditOpKind {
        match self {
            EditOp::Insert(_) => EditOpKind::Insert,
            EditOp::Delete(_) => EditOpKind::Delete,
            EditOp::Substitute(_) => EditOpKind::Substitute,
        }
    }

    /// The literal character the operation affects.
    pub fn ch(self) -> char {
        match self {
            EditOp::Insert(c) | EditOp::Delete(c) | EditOp::Substitute(c) => c,
        }
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOp::Insert(c) => write!(f, "+{c}"),
            EditOp::Delete(c) => write!(f, "-{c}"),
            EditOp::Substitute(c) => write!(f, "~{c}"),
        }
    }
}
