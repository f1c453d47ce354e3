//! Depth-first traversal from node 0.
//!
//! Every enter has a matching exit: `VisitNode`/`BacktrackNode` bracket a
//! node's whole subtree and `VisitEdge`/`BacktrackEdge` bracket the recursive
//! descent through an edge. A drawer relies on this pairing to tell nodes
//! still being explored from finished ones.

use algoviz_structures::Graph;

use crate::events::TraversalEvent;

/// One suspended call of the recursive traversal.
struct Frame {
    node: usize,
    /// Next position in the node's neighbor list.
    next: usize,
}

/// Record a depth-first traversal starting at node 0.
///
/// Neighbors are explored in adjacency-list order. The traversal keeps its
/// own frame stack, so the emitted order is exactly that of the recursive
/// formulation without using the call stack.
pub fn dfs(graph: &Graph) -> Vec<TraversalEvent> {
    let mut events = Vec::new();
    if graph.is_empty() {
        return events;
    }

    let mut visited = vec![false; graph.node_count()];
    let mut stack = vec![Frame { node: 0, next: 0 }];
    events.push(TraversalEvent::VisitNode { node: 0 });
    visited[0] = true;

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;
        let neighbors = graph.neighbors(node);

        let mut descend = None;
        while frame.next < neighbors.len() {
            let neighbor = neighbors[frame.next];
            frame.next += 1;
            if !visited[neighbor] {
                descend = Some(neighbor);
                break;
            }
        }

        match descend {
            Some(neighbor) => {
                events.push(TraversalEvent::VisitEdge {
                    from: node,
                    to: neighbor,
                });
                events.push(TraversalEvent::VisitNode { node: neighbor });
                visited[neighbor] = true;
                stack.push(Frame {
                    node: neighbor,
                    next: 0,
                });
            }
            None => {
                events.push(TraversalEvent::BacktrackNode { node });
                stack.pop();
                if let Some(parent) = stack.last() {
                    events.push(TraversalEvent::BacktrackEdge {
                        from: parent.node,
                        to: node,
                    });
                }
            }
        }
    }

    events
}
