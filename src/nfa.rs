//! The compiled pattern: character sequence plus epsilon-transition digraph.

use std::fmt;

use crate::graph::Digraph;
use crate::matcher::Matcher;

/// A compiled pattern.
///
/// Vertex `i` of the digraph corresponds 1:1 to pattern character `i`, and
/// vertex `m` (one past the last character) is the unique accept position.
/// Every edge is an epsilon transition — it consumes no input. A vertex
/// holding a literal or `.` has no outgoing epsilon edges of its own;
/// consuming that character is the only way past it. Once built the graph is
/// never mutated, so an `Nfa` can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    pattern: Vec<char>,
    graph: Digraph,
}

impl Nfa {
    pub(crate) fn new(pattern: Vec<char>, graph: Digraph) -> Nfa {
        debug_assert_eq!(graph.vertex_count(), pattern.len() + 1);
        Nfa { pattern, graph }
    }

    /// The accept position: one past the last pattern character.
    pub fn accept(&self) -> usize {
        self.pattern.len()
    }

    /// The pattern character at vertex `v`, or `None` at the accept position.
    pub fn symbol(&self, v: usize) -> Option<char> {
        self.pattern.get(v).copied()
    }

    /// The epsilon-transition digraph.
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// Whether the whole of `subject` matches the pattern.
    pub fn is_match(&self, subject: &str) -> bool {
        Matcher::new(self).is_match(subject)
    }
}

/// Renders one line per vertex: its symbol (or `accept`) and the epsilon
/// edges leaving it.
impl fmt::Display for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in 0..=self.pattern.len() {
            match self.symbol(v) {
                Some(ch) => write!(f, "{:3} {:?}", v, ch)?,
                None => write!(f, "{:3} accept", v)?,
            }
            if !self.graph.adj(v).is_empty() {
                write!(f, " ->")?;
                for w in self.graph.adj(v) {
                    write!(f, " {}", w)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
