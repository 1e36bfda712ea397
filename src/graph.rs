//! Adjacency-list digraph and multi-source reachability.

/// A vertex index into a [`Digraph`].
pub type Vertex = usize;

/// A directed graph over a fixed vertex count.
///
/// Edges are append-only and stored per vertex in insertion order; parallel
/// edges are permitted. An out-of-range vertex index is a programming error
/// and panics, not a recoverable condition — the compiler keeps every index
/// it emits within range by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph {
    adj: Vec<Vec<Vertex>>,
    edges: usize,
}

impl Digraph {
    /// Create a graph with `vertices` vertices and no edges.
    pub fn new(vertices: usize) -> Digraph {
        Digraph {
            adj: vec![Vec::new(); vertices],
            edges: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Add the directed edge `from -> to`.
    pub fn add_edge(&mut self, from: Vertex, to: Vertex) {
        assert!(to < self.adj.len(), "edge target {} out of range", to);
        self.adj[from].push(to);
        self.edges += 1;
    }

    /// Vertices adjacent to `v`, in insertion order.
    pub fn adj(&self, v: Vertex) -> &[Vertex] {
        &self.adj[v]
    }
}

/// Multi-source reachability over a [`Digraph`].
///
/// Each construction owns a fresh `marked` vector, so traversals of the same
/// graph are independent of one another. The traversal uses an explicit
/// work-list rather than recursion, so its depth is not tied to the graph
/// size. Sources are reachable from themselves (zero-edge reachability).
#[derive(Debug)]
pub struct DirectedDfs {
    marked: Vec<bool>,
}

impl DirectedDfs {
    /// Traverse `graph` from every vertex in `sources`.
    pub fn new<I>(graph: &Digraph, sources: I) -> DirectedDfs
    where
        I: IntoIterator<Item = Vertex>,
    {
        let mut marked = vec![false; graph.vertex_count()];
        let mut stack: Vec<Vertex> = Vec::new();
        for s in sources {
            if !marked[s] {
                marked[s] = true;
                stack.push(s);
            }
        }
        while let Some(v) = stack.pop() {
            for &w in graph.adj(v) {
                if !marked[w] {
                    marked[w] = true;
                    stack.push(w);
                }
            }
        }
        DirectedDfs { marked }
    }

    /// Whether `v` is reachable from any source.
    pub fn marked(&self, v: Vertex) -> bool {
        self.marked[v]
    }

    /// All reachable vertices, in ascending order.
    pub fn reachable(&self) -> Vec<Vertex> {
        self.marked
            .iter()
            .enumerate()
            .filter_map(|(v, &m)| m.then_some(v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_keeps_insertion_order_and_duplicates() {
        let mut g = Digraph::new(4);
        g.add_edge(0, 2);
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        assert_eq!(g.adj(0), &[2, 1, 2]);
        assert_eq!(g.adj(3), &[] as &[Vertex]);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn sources_are_always_reachable() {
        let g = Digraph::new(5);
        let dfs = DirectedDfs::new(&g, [1, 3]);
        assert_eq!(dfs.reachable(), vec![1, 3]);
    }

    #[test]
    fn follows_edges_transitively() {
        let mut g = Digraph::new(6);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(3, 4);
        let dfs = DirectedDfs::new(&g, [0]);
        assert_eq!(dfs.reachable(), vec![0, 1, 2]);
        assert!(!dfs.marked(3));
        assert!(!dfs.marked(4));
    }

    #[test]
    fn multi_source_is_union_of_single_sources() {
        let mut g = Digraph::new(6);
        g.add_edge(0, 1);
        g.add_edge(2, 3);
        let both = DirectedDfs::new(&g, [0, 2]).reachable();
        assert_eq!(both, vec![0, 1, 2, 3]);
    }

    #[test]
    fn cycles_terminate() {
        let mut g = Digraph::new(3);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 0);
        let dfs = DirectedDfs::new(&g, [0]);
        assert_eq!(dfs.reachable(), vec![0, 1, 2]);
    }

    #[test]
    fn long_chain_does_not_recurse() {
        // Traversal depth must not be tied to graph size.
        let n = 10_000;
        let mut g = Digraph::new(n);
        for v in 0..n - 1 {
            g.add_edge(v, v + 1);
        }
        let dfs = DirectedDfs::new(&g, [0]);
        assert!(dfs.marked(n - 1));
        assert_eq!(dfs.reachable().len(), n);
    }

    #[test]
    fn traversals_are_independent() {
        let mut g = Digraph::new(3);
        g.add_edge(0, 1);
        let first = DirectedDfs::new(&g, [0]);
        let second = DirectedDfs::new(&g, [2]);
        assert!(first.marked(1));
        assert!(!second.marked(0));
        assert!(!second.marked(1));
        assert!(second.marked(2));
    }
}
