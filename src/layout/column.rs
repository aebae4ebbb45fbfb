use crate::config::LayoutConfig;

use super::graph::FlowGraph;
use super::orient::Frame;

/// Columns derived from node ranks, plus the two figures every piece of
/// ribbon geometry shares: the global scale factor and the rank spacing.
#[derive(Debug)]
pub(super) struct Columns {
    /// Node indices per rank. Ranks with no nodes keep an empty placeholder
    /// so a gap never shifts subsequent ranks.
    pub columns: Vec<Vec<usize>>,
    /// Pixels of cross extent per unit of weight.
    pub scale: f32,
    /// Distance between the leading edges of adjacent columns.
    pub spacing: f32,
}

/// Groups leveled nodes into columns and computes every node's rectangle.
/// The scale factor is chosen so the most space-constrained column exactly
/// fills the cross extent; zero-weight columns are non-constraining.
pub(super) fn pack_columns(
    graph: &mut FlowGraph,
    order: &[usize],
    config: &LayoutConfig,
    frame: &Frame,
    padding: f32,
) -> Columns {
    let max_rank = order
        .iter()
        .map(|&idx| graph.nodes[idx].rank())
        .max()
        .unwrap_or(0);
    let mut columns: Vec<Vec<usize>> = vec![Vec::new(); max_rank + 1];
    for &idx in order {
        columns[graph.nodes[idx].rank()].push(idx);
    }

    let mut scale = f32::INFINITY;
    for column in &columns {
        let total: f32 = column.iter().map(|&i| graph.nodes[i].sizing_sum()).sum();
        if total <= 0.0 {
            continue;
        }
        let free = frame.cross_extent - column.len().saturating_sub(1) as f32 * padding;
        scale = scale.min((free / total).max(0.0));
    }
    if !scale.is_finite() {
        scale = 0.0;
    }

    // Divide-by-zero guard: a single column takes the whole rank extent.
    let spacing = if columns.len() > 1 {
        (frame.rank_extent - config.node_width) / (columns.len() - 1) as f32
    } else {
        frame.rank_extent - config.node_width
    };

    for (rank, column) in columns.iter().enumerate() {
        let stack: f32 = column
            .iter()
            .map(|&i| graph.nodes[i].sizing_sum() * scale)
            .sum::<f32>()
            + column.len().saturating_sub(1) as f32 * padding;
        let mut cursor = (frame.cross_extent - stack) / 2.0;
        let pos_rank = rank as f32 * spacing;
        for &idx in column {
            let node = &mut graph.nodes[idx];
            let extent = node.sizing_sum() * scale;
            let mut pos_cross = cursor;
            if let Some(offset) = &node.offset {
                if let Some(shift) = offset.resolve(extent + padding) {
                    pos_cross += shift;
                }
            }
            node.pos_rank = pos_rank;
            node.pos_cross = pos_cross;
            node.extent = extent;
            // An offset moves only the node itself; the stack keeps flowing
            // from the unshifted position.
            cursor += extent + padding;
        }
    }

    Columns {
        columns,
        scale,
        spacing,
    }
}
