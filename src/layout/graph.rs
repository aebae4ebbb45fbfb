use std::collections::HashMap;

use crate::ir::{Diagram, NodeOffset, NodePlacement};

/// One node of the flow graph for a single layout pass. Geometry fields are
/// logical (rank axis = x-ish, cross axis = y-ish) until the orientation
/// frame maps them out.
#[derive(Debug, Clone)]
pub(super) struct Node {
    pub id: String,
    /// Outgoing link indices in insertion order.
    pub outgoing: Vec<usize>,
    /// Incoming link indices in insertion order.
    pub incoming: Vec<usize>,
    /// Rank assigned by the leveler; None until leveled, unresolved nodes
    /// fall back to 0.
    pub level: Option<usize>,
    pub column_override: Option<usize>,
    /// Parent index when placed by a hanging parent.
    pub hangs_from: Option<usize>,
    pub placement: NodePlacement,
    pub offset: Option<NodeOffset>,
    pub color: Option<String>,
    pub color_index: Option<usize>,
    /// Total flow: outgoing weights when any exist, else incoming weights.
    pub sum: f32,
    pub pos_rank: f32,
    pub pos_cross: f32,
    pub extent: f32,
}

impl Node {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
            level: None,
            column_override: None,
            hangs_from: None,
            placement: NodePlacement::Normal,
            offset: None,
            color: None,
            color_index: None,
            sum: 0.0,
            pos_rank: 0.0,
            pos_cross: 0.0,
            extent: 0.0,
        }
    }

    /// Final rank: explicit column override wins over the computed level.
    pub fn rank(&self) -> usize {
        self.column_override.or(self.level).unwrap_or(0)
    }

    /// Weight total used for sizing. A node with no flow still occupies one
    /// unit so isolated nodes stay visible.
    pub fn sizing_sum(&self) -> f32 {
        if self.sum > 0.0 { self.sum } else { 1.0 }
    }
}

#[derive(Debug, Clone)]
pub(super) struct Link {
    pub from: usize,
    pub to: usize,
    pub weight: f32,
    pub outgoing: bool,
    pub color: Option<String>,
}

/// Node registry plus edge set for one pass, exclusively owned by that pass
/// and rebuilt wholesale on any input change.
#[derive(Debug, Default)]
pub(super) struct FlowGraph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
    index: HashMap<String, usize>,
}

impl FlowGraph {
    /// Pure function of the edge list: looks up or creates endpoints in
    /// first-seen order, appends each valid edge to both adjacency lists,
    /// then applies node overrides. Records without a finite weight are
    /// excluded without aborting the build.
    pub fn build(diagram: &Diagram) -> Self {
        let mut graph = FlowGraph::default();
        for record in &diagram.edges {
            let Some(weight) = record.weight.filter(|w| w.is_finite()) else {
                continue;
            };
            let weight = weight.max(0.0);
            let from = graph.ensure_node(&record.from);
            let to = graph.ensure_node(&record.to);
            let link = graph.links.len();
            graph.links.push(Link {
                from,
                to,
                weight,
                outgoing: record.outgoing,
                color: record.color.clone(),
            });
            graph.nodes[from].outgoing.push(link);
            graph.nodes[to].incoming.push(link);
        }

        for spec in &diagram.nodes {
            let idx = graph.ensure_node(&spec.id);
            let node = &mut graph.nodes[idx];
            node.column_override = spec.column;
            node.offset = spec.offset.clone();
            node.placement = spec.layout;
            node.color = spec.color.clone();
            node.color_index = spec.color_index;
        }

        let FlowGraph { nodes, links, .. } = &mut graph;
        for node in nodes.iter_mut() {
            let sized_by = if node.outgoing.is_empty() {
                &node.incoming
            } else {
                &node.outgoing
            };
            node.sum = sized_by.iter().map(|&l| links[l].weight).sum();
        }
        graph
    }

    fn ensure_node(&mut self, id: &str) -> usize {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.index.insert(id.to_string(), idx);
        self.nodes.push(Node::new(id));
        idx
    }
}
