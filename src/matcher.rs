//! NFA simulation by repeated multi-source reachability.

use log::trace;

use crate::graph::DirectedDfs;
use crate::nfa::Nfa;

/// Executes a compiled [`Nfa`] against subject text.
///
/// The live state is a set of vertex indices — every pattern position still
/// consistent with the input consumed so far. After each character the set is
/// replaced wholesale by the epsilon closure of the advanced positions, so
/// alternation and closure branches are all tracked at once and no
/// backtracking is ever needed.
pub struct Matcher<'a> {
    nfa: &'a Nfa,
}

impl<'a> Matcher<'a> {
    pub fn new(nfa: &'a Nfa) -> Matcher<'a> {
        Matcher { nfa }
    }

    /// Whether the whole of `subject` matches the pattern, start to end.
    pub fn is_match(&self, subject: &str) -> bool {
        let graph = self.nfa.graph();

        // Positions reachable before consuming any input.
        let mut pc = DirectedDfs::new(graph, [0]).reachable();

        for (k, c) in subject.chars().enumerate() {
            let matched = self.advance(&pc, c);
            trace!("consumed {:?} at {}: {} live branches", c, k, matched.len());
            if matched.is_empty() {
                // Nothing advanced; no epsilon closure can revive the match.
                return false;
            }
            pc = DirectedDfs::new(graph, matched).reachable();
        }
        pc.contains(&self.nfa.accept())
    }

    /// The vertices entered by consuming `c` from the active set.
    fn advance(&self, pc: &[usize], c: char) -> Vec<usize> {
        let mut matched = Vec::new();
        for &v in pc {
            match self.nfa.symbol(v) {
                // The accept position consumes nothing, and metacharacter
                // vertices are crossed by their epsilon edges only — even
                // when the subject contains that same character.
                None | Some('(' | ')' | '|' | '*') => {}
                Some(sym) => {
                    if sym == c || sym == '.' {
                        matched.push(v + 1);
                    }
                }
            }
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use crate::compiler::compile;

    #[test]
    fn literal_whole_string_semantics() {
        let nfa = compile("abc").unwrap();
        assert!(nfa.is_match("abc"));
        assert!(!nfa.is_match("ab"));
        assert!(!nfa.is_match("abcx"));
        assert!(!nfa.is_match("xabc"));
        assert!(!nfa.is_match(""));
    }

    #[test]
    fn wildcard_consumes_exactly_one_character() {
        let nfa = compile("a.c").unwrap();
        assert!(nfa.is_match("abc"));
        assert!(nfa.is_match("a.c"));
        assert!(!nfa.is_match("ac"));
        assert!(!nfa.is_match("abbc"));
    }

    #[test]
    fn alternation_takes_either_branch() {
        let nfa = compile("(aa|bb)").unwrap();
        assert!(nfa.is_match("aa"));
        assert!(nfa.is_match("bb"));
        assert!(!nfa.is_match("ab"));
        assert!(!nfa.is_match("aabb"));
    }

    #[test]
    fn closure_accepts_zero_or_more() {
        let nfa = compile("ab*c").unwrap();
        assert!(nfa.is_match("ac"));
        assert!(nfa.is_match("abc"));
        assert!(nfa.is_match("abbbc"));
        assert!(!nfa.is_match("abd"));
        assert!(!nfa.is_match("ab"));
    }

    #[test]
    fn closure_over_an_alternation_group() {
        let nfa = compile("(a|b)*c").unwrap();
        assert!(nfa.is_match("c"));
        assert!(nfa.is_match("aababc"));
        assert!(nfa.is_match("bbbbc"));
        assert!(!nfa.is_match("aabab"));
        assert!(!nfa.is_match("aadbc"));
    }

    #[test]
    fn multiway_alternation() {
        let nfa = compile("(a|b|c)").unwrap();
        assert!(nfa.is_match("a"));
        assert!(nfa.is_match("b"));
        assert!(nfa.is_match("c"));
        assert!(!nfa.is_match("d"));
        assert!(!nfa.is_match("ab"));
    }

    #[test]
    fn bracket_expression() {
        let nfa = compile("a[bc]*d").unwrap();
        assert!(nfa.is_match("ad"));
        assert!(nfa.is_match("abcbd"));
        assert!(!nfa.is_match("abed"));
    }

    #[test]
    fn empty_pattern_matches_only_empty_subject() {
        let nfa = compile("").unwrap();
        assert!(nfa.is_match(""));
        assert!(!nfa.is_match("a"));
    }

    #[test]
    fn nested_groups() {
        let nfa = compile("((a|b)c)*d").unwrap();
        assert!(nfa.is_match("d"));
        assert!(nfa.is_match("acd"));
        assert!(nfa.is_match("acbcd"));
        assert!(!nfa.is_match("abd"));
    }

    #[test]
    fn metacharacters_in_the_subject_do_not_cross_control_vertices() {
        let nfa = compile("(a)").unwrap();
        assert!(nfa.is_match("a"));
        assert!(!nfa.is_match("(a)"));
        // The wildcard still matches anything, metacharacters included.
        let any = compile(".").unwrap();
        assert!(any.is_match("("));
        assert!(any.is_match("*"));
    }

    #[test]
    fn dead_branches_fail_immediately() {
        // A partial match must not survive a character nothing can consume.
        let nfa = compile("a*b").unwrap();
        assert!(!nfa.is_match("aacb"));
        assert!(!nfa.is_match("ba"));
    }
}
