//! Node and edge handles for graph traversals.

use algoviz_engines::TraversalEvent;
use algoviz_structures::{max_edges, pair_index, MAX_NODES};

use crate::handles::{HandleArena, VisualHandle};
use crate::palette::Palette;

/// Node circles plus one line per unordered node pair.
///
/// Edge handles are addressed by [`pair_index`] over the active node count,
/// so every possible edge has a slot whether or not the graph has it.
#[derive(Debug, Clone)]
pub struct GraphHandles<H> {
    pub nodes: HandleArena<H>,
    pub edges: HandleArena<H>,
}

impl<H> GraphHandles<H> {
    pub fn new(nodes: HandleArena<H>, edges: HandleArena<H>) -> Self {
        Self { nodes, edges }
    }

    /// Activate `count` nodes and every pair slot between them.
    pub fn activate(&mut self, count: usize) -> usize {
        let active = self.nodes.activate(count);
        self.edges.activate(max_edges(active));
        active
    }

    /// Handle of the line between `a` and `b`, in either order.
    pub fn edge_mut(&mut self, a: usize, b: usize) -> Option<&mut H> {
        let nodes = self.nodes.active();
        if a == b || a >= nodes || b >= nodes {
            return None;
        }
        self.edges.get_mut(pair_index(a, b, nodes))
    }
}

impl<H: Default> GraphHandles<H> {
    /// Handles sized for the largest graph the options allow.
    pub fn headless() -> Self {
        Self::new(
            HandleArena::headless(MAX_NODES),
            HandleArena::headless(max_edges(MAX_NODES)),
        )
    }
}

/// Apply one BFS or DFS event. Visits are pink, dequeues and backtracks
/// blue. Events naming an inactive node are ignored.
pub fn draw_traversal<H: VisualHandle>(
    event: &TraversalEvent,
    handles: &mut GraphHandles<H>,
    palette: &Palette,
) {
    match *event {
        TraversalEvent::VisitNode { node } => {
            if let Some(h) = handles.nodes.get_mut(node) {
                h.set_fill(palette.pink);
            }
        }
        TraversalEvent::VisitEdge { from, to } => {
            if let Some(h) = handles.edge_mut(from, to) {
                h.set_stroke(palette.pink);
            }
        }
        TraversalEvent::DequeueNode { node } | TraversalEvent::BacktrackNode { node } => {
            if let Some(h) = handles.nodes.get_mut(node) {
                h.set_fill(palette.blue);
            }
        }
        TraversalEvent::BacktrackEdge { from, to } => {
            if let Some(h) = handles.edge_mut(from, to) {
                h.set_stroke(palette.blue);
            }
        }
    }
}
