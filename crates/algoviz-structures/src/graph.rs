//! Random connected graphs for the traversal visualizers.
//!
//! Generation happens in two passes:
//! 1. A random spanning tree: node `i` attaches to a uniform random `j < i`.
//!    This alone guarantees connectivity with exactly `n - 1` edges.
//! 2. Extra edges drawn uniformly from the pairs the tree did not use, until
//!    the density-derived budget is met.
//!
//! Every unordered pair `{from, to}` has a linear slot given by
//! [`pair_index`], which is how the second pass tracks used pairs without a
//! hash set.

use rand::Rng;

use crate::{Error, Id, Point, Result, Stage, NODE_RADIUS};

/// Upper bound on nodes. Handle tables are pre-sized to this.
pub const MAX_NODES: usize = 20;

/// A graph vertex and its adjacency list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: Id,
    /// Indices of adjacent nodes, in edge insertion order.
    pub neighbors: Vec<usize>,
}

/// An undirected edge between two node indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub id: Id,
    pub from: usize,
    pub to: usize,
}

impl Edge {
    /// Whether this edge joins `a` and `b`, in either direction.
    pub fn joins(&self, a: usize, b: usize) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// An undirected graph with symmetric adjacency.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    positions: Vec<Point>,
}

/// Number of node pairs, i.e. the edge count of the complete graph.
pub const fn max_edges(nodes: usize) -> usize {
    nodes * nodes.saturating_sub(1) / 2
}

/// Edge count for a density percentage.
///
/// Density maps linearly onto `[n - 1, n(n - 1)/2]`:
/// `floor(density / 100 * (max - min)) + min`.
pub fn edge_budget(nodes: usize, density: f64) -> usize {
    let min = nodes.saturating_sub(1);
    let max = max_edges(nodes).max(min);
    let span = (max - min) as f64;
    let extra = ((density / 100.0) * span).floor().clamp(0.0, span) as usize;
    min + extra
}

/// Linear slot of the unordered pair `{from, to}` among all `n(n - 1)/2` pairs.
///
/// Pairs are numbered row by row: `(0,1), (0,2), ..., (0,n-1), (1,2), ...`.
pub fn pair_index(from: usize, to: usize, nodes: usize) -> usize {
    let (from, to) = if from < to { (from, to) } else { (to, from) };
    debug_assert!(from != to && to < nodes);
    // from * n - (from * (from + 1) / 2 + 1) + (to - from), reordered to stay unsigned
    from * nodes + to - from - from * (from + 1) / 2 - 1
}

impl Graph {
    /// Generate a connected random graph with `nodes` vertices and the edge
    /// count derived from `density` (a percentage).
    pub fn generate<R: Rng + ?Sized>(nodes: usize, density: f64, rng: &mut R) -> Self {
        let budget = edge_budget(nodes, density);
        let mut graph = Self {
            nodes: (0..nodes)
                .map(|_| Node {
                    id: Id::random(rng),
                    neighbors: Vec::new(),
                })
                .collect(),
            edges: Vec::with_capacity(budget),
            positions: vec![Point::ORIGIN; nodes],
        };

        let mut used = vec![false; max_edges(nodes)];

        // Spanning tree
        for i in 1..nodes {
            let j = rng.gen_range(0..i);
            used[pair_index(j, i, nodes)] = true;
            graph.connect(j, i, rng);
        }

        // Remaining budget from the unused pairs
        let mut available: Vec<(usize, usize)> = (0..nodes)
            .flat_map(|from| ((from + 1)..nodes).map(move |to| (from, to)))
            .filter(|&(from, to)| !used[pair_index(from, to, nodes)])
            .collect();

        for _ in 0..budget.saturating_sub(nodes.saturating_sub(1)) {
            if available.is_empty() {
                break;
            }
            let (from, to) = available.swap_remove(rng.gen_range(0..available.len()));
            graph.connect(from, to, rng);
        }

        graph
    }

    fn connect<R: Rng + ?Sized>(&mut self, from: usize, to: usize, rng: &mut R) {
        self.edges.push(Edge {
            id: Id::random(rng),
            from,
            to,
        });
        self.nodes[from].neighbors.push(to);
        self.nodes[to].neighbors.push(from);
    }

    /// Build a graph from an explicit edge list. Adjacency follows edge order.
    ///
    /// Ids are sequential; intended for fixtures and hand-made examples.
    pub fn from_edges(nodes: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self {
            nodes: (0..nodes)
                .map(|i| Node {
                    id: Id(i as u64),
                    neighbors: Vec::new(),
                })
                .collect(),
            edges: Vec::with_capacity(edges.len()),
            positions: vec![Point::ORIGIN; nodes],
        };
        for (k, &(from, to)) in edges.iter().enumerate() {
            graph.edges.push(Edge {
                id: Id((nodes + k) as u64),
                from,
                to,
            });
            graph.nodes[from].neighbors.push(to);
            graph.nodes[to].neighbors.push(from);
        }
        graph
    }

    /// Scatter node positions over the stage, `NODE_RADIUS` from the border.
    pub fn layout<R: Rng + ?Sized>(&mut self, stage: &Stage, rng: &mut R) {
        for position in &mut self.positions {
            *position = stage.random_point(NODE_RADIUS, rng);
        }
    }

    /// Move a node (drag). Only the layout changes; adjacency is untouched.
    pub fn move_node(&mut self, index: usize, to: Point) -> Result<()> {
        let count = self.positions.len();
        let position = self
            .positions
            .get_mut(index)
            .ok_or(Error::NodeOutOfRange { index, count })?;
        *position = to;
        Ok(())
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, by index.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, in insertion order (tree edges first).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Neighbors of a node; empty for an unknown index.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.nodes
            .get(index)
            .map(|n| n.neighbors.as_slice())
            .unwrap_or(&[])
    }

    /// Canvas position of every node.
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Canvas position of one node.
    pub fn position(&self, index: usize) -> Option<Point> {
        self.positions.get(index).copied()
    }
}
