//! Breadth-first traversal from node 0.

use std::collections::VecDeque;

use algoviz_structures::Graph;

use crate::events::TraversalEvent;

/// Colour of a node during the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Colour {
    Unvisited,
    Queued,
    Dequeued,
}

/// Record a breadth-first traversal starting at node 0.
///
/// Nodes unreachable from 0 produce no events. An empty graph produces an
/// empty log.
pub fn bfs(graph: &Graph) -> Vec<TraversalEvent> {
    let mut events = Vec::new();
    if graph.is_empty() {
        return events;
    }

    let mut colour = vec![Colour::Unvisited; graph.node_count()];
    let mut queue = VecDeque::new();

    events.push(TraversalEvent::VisitNode { node: 0 });
    queue.push_back(0);
    colour[0] = Colour::Queued;

    while let Some(node) = queue.pop_front() {
        events.push(TraversalEvent::DequeueNode { node });
        colour[node] = Colour::Dequeued;

        for &neighbor in graph.neighbors(node) {
            if colour[neighbor] == Colour::Unvisited {
                events.push(TraversalEvent::VisitEdge {
                    from: node,
                    to: neighbor,
                });
                events.push(TraversalEvent::VisitNode { node: neighbor });
                queue.push_back(neighbor);
                colour[neighbor] = Colour::Queued;
            }
        }
    }

    events
}
