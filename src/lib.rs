//! A regular-expression engine built on a nondeterministic finite automaton.
//!
//! The pattern is compiled directly into a directed graph of epsilon
//! transitions (the classic Thompson construction over a digraph): each
//! pattern character becomes a vertex, and one extra vertex past the end is
//! the accept position. Matching never converts the NFA to a DFA; instead it
//! simulates the NFA by tracking the *set* of currently possible pattern
//! positions, recomputing the epsilon closure of that set after every input
//! character with a multi-source reachability traversal.
//!
//! Supported syntax: literal characters, `.` (any character), `(...)`
//! (grouping), `|` (alternation, inside a group), `*` (zero or more), and
//! bracket expressions `[abc]`, which are expanded to `(a|b|c)` at compile
//! time. Matching is whole-string: the subject must satisfy the pattern from
//! start to end.
//!
//! Because all branches are tracked simultaneously there is no backtracking,
//! and matching a subject of length `n` against a pattern of length `m`
//! costs O(n·m) in the worst case.
//!
//! ```
//! use regex_nfa::compile;
//!
//! let nfa = compile("(a|b)*c")?;
//! assert!(nfa.is_match("aababc"));
//! assert!(!nfa.is_match("aabab"));
//! # Ok::<(), regex_nfa::CompileError>(())
//! ```

use std::fmt;

pub mod compiler;
pub mod graph;
pub mod matcher;
pub mod nfa;

pub use compiler::compile;
pub use graph::{Digraph, DirectedDfs};
pub use matcher::Matcher;
pub use nfa::Nfa;

/// The result of compiling a pattern.
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that make a pattern malformed.
///
/// All of these are detected during compilation, before any graph edge is
/// emitted; a compiled [`Nfa`] never fails at match time. Positions refer to
/// character offsets in the pattern as written (before bracket expansion).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileError {
    /// A `)` with no matching `(` before it.
    UnexpectedCloseParen { pos: usize },
    /// A `(` (or a top-level `|`, which this grammar requires to be
    /// parenthesized) left unresolved at the end of the pattern.
    UnclosedGroup { pos: usize },
    /// A `*` with no preceding matchable unit.
    DanglingStar { pos: usize },
    /// A `[` with no closing `]`.
    UnterminatedBracket { pos: usize },
    /// `[]` matches nothing and is rejected.
    EmptyBracket { pos: usize },
    /// A metacharacter inside `[...]`; bracket members must be literals.
    MetacharInBracket { pos: usize, ch: char },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CompileError::UnexpectedCloseParen { pos } => {
                write!(f, "unmatched ')' at position {}", pos)
            }
            CompileError::UnclosedGroup { pos } => {
                write!(f, "unclosed group or stray '|' at position {}", pos)
            }
            CompileError::DanglingStar { pos } => {
                write!(f, "'*' at position {} has nothing to repeat", pos)
            }
            CompileError::UnterminatedBracket { pos } => {
                write!(f, "'[' at position {} is never closed", pos)
            }
            CompileError::EmptyBracket { pos } => {
                write!(f, "empty bracket expression at position {}", pos)
            }
            CompileError::MetacharInBracket { pos, ch } => {
                write!(f, "metacharacter {:?} at position {} inside bracket expression", ch, pos)
            }
        }
    }
}

impl std::error::Error for CompileError {}
