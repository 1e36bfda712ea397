//! Compiles pattern text into an epsilon-transition digraph.
//!
//! One left-to-right pass over the pattern, using an operator stack to
//! resolve nested groups and alternation. The stack holds positions of
//! unmatched `(` and `|` characters and is local to a single `compile`
//! call; it must be empty when the pass ends.
//!
//! The edges emitted for each construct:
//!
//! - `(`, `)`, `*` fall through: an edge `i -> i + 1`.
//! - Resolving an alternation `(x|y)` with `|` at `or` and `)` at `i` adds
//!   `lp -> or + 1` (enter the right alternative directly) and `or -> i`
//!   (completing the left alternative jumps past the `|`), where `lp` is the
//!   matching `(`. A group may hold several `|`s; each is wired this way.
//! - A `*` at `i + 1` adds the two-way pair `start -> i + 1` (zero
//!   repetitions) and `i + 1 -> start` (loop back), where `start` is `i`
//!   itself for a single character or the matching `(` for a just-closed
//!   group.
//!
//! Literals and `.` get no edges; the matcher alone moves past them.

use log::debug;

use crate::graph::Digraph;
use crate::nfa::Nfa;
use crate::{CompileError, CompileResult};

/// Compile `pattern` into an [`Nfa`] over `m + 1` vertices, where `m` is the
/// pattern length after bracket expansion.
pub fn compile(pattern: &str) -> CompileResult<Nfa> {
    let syms = expand_brackets(pattern)?;
    let nfa = Compiler::new(syms).run()?;
    debug!(
        "compiled pattern {:?}: {} vertices, {} epsilon edges",
        pattern,
        nfa.graph().vertex_count(),
        nfa.graph().edge_count()
    );
    Ok(nfa)
}

/// One character of the bracket-expanded pattern, tagged with the character
/// offset it came from in the source text so errors point at the original.
#[derive(Debug, Clone, Copy)]
struct Sym {
    ch: char,
    pos: usize,
}

/// Rewrite every bracket expression `[abc]` into the equivalent alternation
/// `(a|b|c)`. Bracket members must be literals; the synthesized
/// metacharacters inherit positions from the bracket for error reporting.
fn expand_brackets(pattern: &str) -> CompileResult<Vec<Sym>> {
    let mut out = Vec::new();
    let mut chars = pattern.chars().enumerate();
    while let Some((pos, ch)) = chars.next() {
        if ch != '[' {
            out.push(Sym { ch, pos });
            continue;
        }
        let mut members = Vec::new();
        let mut closed = false;
        for (p, c) in chars.by_ref() {
            match c {
                ']' => {
                    closed = true;
                    break;
                }
                '(' | ')' | '|' | '*' | '.' | '[' => {
                    return Err(CompileError::MetacharInBracket { pos: p, ch: c });
                }
                _ => members.push(Sym { ch: c, pos: p }),
            }
        }
        if !closed {
            return Err(CompileError::UnterminatedBracket { pos });
        }
        if members.is_empty() {
            return Err(CompileError::EmptyBracket { pos });
        }
        out.push(Sym { ch: '(', pos });
        for (k, m) in members.into_iter().enumerate() {
            if k > 0 {
                out.push(Sym { ch: '|', pos: m.pos });
            }
            out.push(m);
        }
        out.push(Sym { ch: ')', pos });
    }
    Ok(out)
}

/// Construction state for one `compile` call.
struct Compiler {
    syms: Vec<Sym>,
    graph: Digraph,
    /// Positions of unmatched `(` and `|`.
    ops: Vec<usize>,
}

impl Compiler {
    fn new(syms: Vec<Sym>) -> Compiler {
        let graph = Digraph::new(syms.len() + 1);
        Compiler {
            syms,
            graph,
            ops: Vec::new(),
        }
    }

    fn run(mut self) -> CompileResult<Nfa> {
        let m = self.syms.len();
        for i in 0..m {
            // Group start for a trailing '*': the character itself unless a
            // group just closed here.
            let mut lp = i;
            match self.syms[i].ch {
                '(' | '|' => self.ops.push(i),
                ')' => lp = self.close_group(i)?,
                '*' => self.check_star(i)?,
                _ => {}
            }
            if i + 1 < m && self.syms[i + 1].ch == '*' {
                self.graph.add_edge(lp, i + 1);
                self.graph.add_edge(i + 1, lp);
            }
            if matches!(self.syms[i].ch, '(' | ')' | '*') {
                self.graph.add_edge(i, i + 1);
            }
        }
        if let Some(&op) = self.ops.first() {
            return Err(CompileError::UnclosedGroup {
                pos: self.syms[op].pos,
            });
        }
        let pattern = self.syms.into_iter().map(|s| s.ch).collect();
        Ok(Nfa::new(pattern, self.graph))
    }

    /// Resolve the `)` at `i`: pop every `|` down to the matching `(`, wire
    /// the alternation edges, and return the group start position.
    fn close_group(&mut self, i: usize) -> CompileResult<usize> {
        let mut ors = Vec::new();
        let lp = loop {
            let op = self.ops.pop().ok_or(CompileError::UnexpectedCloseParen {
                pos: self.syms[i].pos,
            })?;
            if self.syms[op].ch == '|' {
                ors.push(op);
            } else {
                break op;
            }
        };
        for &or in &ors {
            self.graph.add_edge(lp, or + 1);
            self.graph.add_edge(or, i);
        }
        Ok(lp)
    }

    /// A `*` must follow a matchable unit: not the pattern start, a `(`, or
    /// a `|`. A `*` after another `*` is a closure of a closure and is fine.
    fn check_star(&self, i: usize) -> CompileResult<()> {
        let dangling = match i.checked_sub(1) {
            None => true,
            Some(prev) => matches!(self.syms[prev].ch, '(' | '|'),
        };
        if dangling {
            return Err(CompileError::DanglingStar {
                pos: self.syms[i].pos,
            });
        }
        Ok(())
    }
}
