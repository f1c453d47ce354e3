//! Breadth and depth first traversal of a random graph.
//!
//! Nodes are laid out at random inside the stage and may be dragged before
//! the traversal starts or while it is paused.

use algoviz_engines::{bfs, dfs, TraversalEvent};
use algoviz_structures::{Graph, Point, Stage, NODE_RADIUS};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::drawers::{draw_traversal, GraphHandles};
use crate::error::Result;
use crate::handles::VisualHandle;
use crate::options::Options;
use crate::pacing::Cadence;
use crate::palette::Palette;
use crate::visualizer::Visualizer;

/// Which traversal to record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Traversal {
    Bfs,
    Dfs,
}

/// Breadth- or depth-first search over a random connected graph.
#[derive(Debug, Clone)]
pub struct GraphTraversal<H> {
    traversal: Traversal,
    graph: Graph,
    stage: Stage,
    handles: GraphHandles<H>,
    palette: Palette,
}

impl<H: VisualHandle> GraphTraversal<H> {
    pub fn new(traversal: Traversal, handles: GraphHandles<H>, palette: Palette) -> Self {
        Self {
            traversal,
            graph: Graph::default(),
            stage: Stage::default(),
            handles,
            palette,
        }
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn handles(&self) -> &GraphHandles<H> {
        &self.handles
    }

    /// Point every line incident to `node` at the node's current position.
    fn sync_edges(&mut self, node: usize) {
        let Some(at) = self.graph.position(node) else {
            return;
        };
        for &other in self.graph.neighbors(node) {
            let Some(there) = self.graph.position(other) else {
                continue;
            };
            if let Some(line) = self.handles.edge_mut(node, other) {
                line.set_points(at, there);
            }
        }
    }
}

impl<H: VisualHandle> Visualizer for GraphTraversal<H> {
    type Event = TraversalEvent;

    fn reset(&mut self, options: &Options, rng: &mut dyn RngCore) {
        self.stage = options.stage;
        self.graph = Graph::generate(options.nodes, options.edges, rng);
        self.graph.layout(&self.stage, rng);

        let nodes = self.handles.activate(self.graph.node_count());
        for (i, node) in self.handles.nodes.iter_mut().enumerate() {
            node.set_fill(self.palette.idle);
            node.set_position(self.graph.position(i).unwrap_or(Point::ORIGIN));
            node.set_visible(true);
        }
        for line in self.handles.edges.iter_mut() {
            line.set_visible(false);
        }
        for edge in self.graph.edges() {
            if edge.from >= nodes || edge.to >= nodes {
                continue;
            }
            let (Some(from), Some(to)) = (self.graph.position(edge.from), self.graph.position(edge.to))
            else {
                continue;
            };
            if let Some(line) = self.handles.edge_mut(edge.from, edge.to) {
                line.set_points(from, to);
                line.set_stroke(self.palette.idle);
                line.set_visible(true);
            }
        }
    }

    fn record(&mut self) -> Vec<TraversalEvent> {
        match self.traversal {
            Traversal::Bfs => bfs(&self.graph),
            Traversal::Dfs => dfs(&self.graph),
        }
    }

    fn draw(&mut self, event: &TraversalEvent) {
        draw_traversal(event, &mut self.handles, &self.palette);
    }

    fn cadence(&self) -> Cadence {
        Cadence::GRAPH
    }

    fn drag(&mut self, index: usize, to: Point) -> Result<bool> {
        let at = self.stage.clamp(to, NODE_RADIUS);
        self.graph.move_node(index, at)?;
        if let Some(node) = self.handles.nodes.get_mut(index) {
            node.set_position(at);
        }
        self.sync_edges(index);
        Ok(true)
    }
}
