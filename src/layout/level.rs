use crate::ir::NodePlacement;

use super::graph::FlowGraph;

/// Assigns every node an integer rank by depth-first traversal from the
/// root nodes (empty incoming list), in registry insertion order. A node's
/// level is fixed on first visit and never revisited; that is the whole
/// cycle-breaking mechanism, so a cycle simply stops propagating once it
/// reaches an already-leveled node. Nodes left unleveled (pure cycle, no
/// root) fall back to rank 0.
pub(super) fn assign_levels(graph: &mut FlowGraph) {
    let count = graph.nodes.len();
    let mut levels: Vec<Option<usize>> = vec![None; count];
    let mut hangs: Vec<Option<usize>> = vec![None; count];

    for root in 0..count {
        if !graph.nodes[root].incoming.is_empty() {
            continue;
        }
        if levels[root].is_none() {
            levels[root] = Some(0);
        }
        visit(graph, root, &mut levels, &mut hangs);
    }

    for idx in 0..count {
        graph.nodes[idx].level = Some(levels[idx].unwrap_or(0));
        graph.nodes[idx].hangs_from = hangs[idx];
    }
}

fn visit(
    graph: &FlowGraph,
    from: usize,
    levels: &mut [Option<usize>],
    hangs: &mut [Option<usize>],
) {
    let base = levels[from].unwrap_or(0);
    let hanging = graph.nodes[from].placement == NodePlacement::Hanging;
    for (ordinal, &link_idx) in graph.nodes[from].outgoing.iter().enumerate() {
        let child = graph.links[link_idx].to;
        if levels[child].is_some() {
            continue;
        }
        // Hanging parents indent each child by the ordinal of the
        // connecting edge, producing strictly layered org-chart columns.
        levels[child] = Some(if hanging { base + 1 + ordinal } else { base + 1 });
        if hanging {
            hangs[child] = Some(from);
        }
        visit(graph, child, levels, hangs);
    }
}

/// Stable total order over nodes by ascending rank, preserving registry
/// insertion order within a rank. This ordering is the only thing the
/// column packer consumes as column membership order.
pub(super) fn rank_order(graph: &FlowGraph) -> Vec<usize> {
    let mut order: Vec<usize> = (0..graph.nodes.len()).collect();
    order.sort_by_key(|&idx| graph.nodes[idx].rank());
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Diagram, EdgeRecord, NodeSpec};

    fn levels_of(diagram: &Diagram) -> Vec<(String, usize)> {
        let mut graph = FlowGraph::build(diagram);
        assign_levels(&mut graph);
        graph
            .nodes
            .iter()
            .map(|n| (n.id.clone(), n.rank()))
            .collect()
    }

    #[test]
    fn chain_levels_increase_from_root() {
        let diagram = Diagram::from_edges(vec![
            EdgeRecord::new("A", "B", 1.0),
            EdgeRecord::new("B", "C", 1.0),
            EdgeRecord::new("A", "C", 1.0),
        ]);
        let levels = levels_of(&diagram);
        assert_eq!(levels[0], ("A".to_string(), 0));
        assert_eq!(levels[1], ("B".to_string(), 1));
        // First visit wins: C is reached through B before the direct edge.
        assert_eq!(levels[2], ("C".to_string(), 2));
    }

    #[test]
    fn cycle_without_root_defaults_to_zero() {
        let diagram = Diagram::from_edges(vec![
            EdgeRecord::new("A", "B", 1.0),
            EdgeRecord::new("B", "A", 1.0),
        ]);
        let levels = levels_of(&diagram);
        assert_eq!(levels[0].1, 0);
        assert_eq!(levels[1].1, 0);
    }

    #[test]
    fn cycle_reached_from_root_stops_at_leveled_node() {
        let diagram = Diagram::from_edges(vec![
            EdgeRecord::new("R", "A", 1.0),
            EdgeRecord::new("A", "B", 1.0),
            EdgeRecord::new("B", "A", 1.0),
        ]);
        let levels = levels_of(&diagram);
        assert_eq!(levels, [
            ("R".to_string(), 0),
            ("A".to_string(), 1),
            ("B".to_string(), 2),
        ]);
    }

    #[test]
    fn hanging_parent_indents_children_by_edge_ordinal() {
        let mut boss = NodeSpec::new("Boss");
        boss.layout = crate::ir::NodePlacement::Hanging;
        let diagram = Diagram {
            edges: vec![
                EdgeRecord::new("Boss", "First", 1.0),
                EdgeRecord::new("Boss", "Second", 1.0),
                EdgeRecord::new("Boss", "Third", 1.0),
            ],
            nodes: vec![boss],
        };
        let mut graph = FlowGraph::build(&diagram);
        assign_levels(&mut graph);
        assert_eq!(graph.nodes[1].rank(), 1);
        assert_eq!(graph.nodes[2].rank(), 2);
        assert_eq!(graph.nodes[3].rank(), 3);
        assert_eq!(graph.nodes[1].hangs_from, Some(0));
        assert_eq!(graph.nodes[3].hangs_from, Some(0));
    }

    #[test]
    fn column_override_wins_over_level() {
        let mut spec = NodeSpec::new("B");
        spec.column = Some(4);
        let diagram = Diagram {
            edges: vec![EdgeRecord::new("A", "B", 1.0)],
            nodes: vec![spec],
        };
        let mut graph = FlowGraph::build(&diagram);
        assign_levels(&mut graph);
        assert_eq!(graph.nodes[1].level, Some(1));
        assert_eq!(graph.nodes[1].rank(), 4);
    }

    #[test]
    fn rank_order_is_stable_within_rank() {
        let diagram = Diagram::from_edges(vec![
            EdgeRecord::new("A", "X", 1.0),
            EdgeRecord::new("B", "Y", 1.0),
            EdgeRecord::new("A", "Y", 1.0),
        ]);
        let mut graph = FlowGraph::build(&diagram);
        assign_levels(&mut graph);
        let order = rank_order(&graph);
        let ids: Vec<&str> = order.iter().map(|&i| graph.nodes[i].id.as_str()).collect();
        // Roots A then B in insertion order, then rank-1 nodes X then Y.
        assert_eq!(ids, ["A", "B", "X", "Y"]);
    }
}
