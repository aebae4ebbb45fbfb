mod column;
mod graph;
mod level;
mod orient;
mod ribbon;
pub(crate) mod types;
pub use types::*;

use crate::config::{LayoutConfig, NODE_PALETTE};
use crate::ir::Diagram;

use graph::FlowGraph;
use orient::Frame;

/// Pluggable per-layout padding, for layout variants that need denser
/// packing than the configured default.
pub type PaddingHook = dyn Fn(&LayoutConfig) -> f32;

pub fn compute_layout(diagram: &Diagram, config: &LayoutConfig) -> Layout {
    compute_layout_with(diagram, config, None)
}

/// Full pipeline: build the graph, assign ranks, pack columns, generate
/// ribbon geometry, then map everything through the orientation frame. A
/// pure function of the diagram and config; re-run wholesale on any change.
pub fn compute_layout_with(
    diagram: &Diagram,
    config: &LayoutConfig,
    padding_hook: Option<&PaddingHook>,
) -> Layout {
    let padding = padding_hook
        .map(|hook| hook(config))
        .unwrap_or(config.node_padding);
    let frame = Frame::new(config.width, config.height, config.inverted);

    let mut graph = FlowGraph::build(diagram);
    level::assign_levels(&mut graph);
    let order = level::rank_order(&graph);
    let columns = column::pack_columns(&mut graph, &order, config, &frame, padding);
    let ribbons = ribbon::generate_ribbons(&graph, columns.scale, columns.spacing, config, &frame);

    let node_colors: Vec<String> = graph
        .nodes
        .iter()
        .enumerate()
        .map(|(idx, node)| match &node.color {
            Some(color) => color.clone(),
            None => {
                let palette_idx = node.color_index.unwrap_or(idx);
                NODE_PALETTE[palette_idx % NODE_PALETTE.len()].to_string()
            }
        })
        .collect();

    let nodes = columns
        .columns
        .iter()
        .flatten()
        .map(|&idx| {
            let node = &graph.nodes[idx];
            let (x, y, width, height) =
                frame.rect(node.pos_rank, node.pos_cross, config.node_width, node.extent);
            NodeLayout {
                id: node.id.clone(),
                rank: node.rank(),
                sum: node.sum,
                x,
                y,
                width,
                height,
                color: node_colors[idx].clone(),
                hangs_from: node.hangs_from.map(|parent| graph.nodes[parent].id.clone()),
            }
        })
        .collect();

    let links = graph
        .links
        .iter()
        .zip(ribbons)
        .map(|(link, geom)| {
            let color = link
                .color
                .clone()
                .unwrap_or_else(|| node_colors[link.from].clone());
            LinkLayout {
                from: graph.nodes[link.from].id.clone(),
                to: graph.nodes[link.to].id.clone(),
                weight: link.weight,
                thickness: geom.thickness,
                backward: geom.backward,
                outgoing: link.outgoing,
                path: geom.path.into_iter().map(|c| frame.command(c)).collect(),
                label_anchor: frame.point(geom.label_anchor.0, geom.label_anchor.1),
                color,
            }
        })
        .collect();

    Layout {
        width: config.width,
        height: config.height,
        inverted: config.inverted,
        scale: columns.scale,
        nodes,
        links,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::EdgeRecord;

    fn config_100() -> LayoutConfig {
        LayoutConfig {
            width: 100.0,
            height: 100.0,
            node_width: 20.0,
            node_padding: 10.0,
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn padding_hook_overrides_configured_padding() {
        let diagram = Diagram::from_edges(vec![
            EdgeRecord::new("A", "B", 5.0),
            EdgeRecord::new("A", "C", 5.0),
        ]);
        let config = config_100();
        let loose = compute_layout(&diagram, &config);
        let dense = compute_layout_with(&diagram, &config, Some(&|_: &LayoutConfig| 0.0));
        // No padding gap to reserve, so the dense variant scales larger.
        assert!(dense.scale > loose.scale);
        assert!((dense.scale - 10.0).abs() < 1e-4);
    }

    #[test]
    fn explicit_colors_win_over_palette() {
        let mut edge = EdgeRecord::new("A", "B", 1.0);
        edge.color = Some("#123456".to_string());
        let mut spec = crate::ir::NodeSpec::new("A");
        spec.color = Some("#abcdef".to_string());
        let diagram = Diagram {
            edges: vec![edge, EdgeRecord::new("A", "C", 1.0)],
            nodes: vec![spec],
        };
        let layout = compute_layout(&diagram, &config_100());
        assert_eq!(layout.nodes[0].color, "#abcdef");
        assert_eq!(layout.links[0].color, "#123456");
        // The second link inherits its source node's color.
        assert_eq!(layout.links[1].color, "#abcdef");
    }

    #[test]
    fn color_index_picks_from_palette() {
        let mut spec = crate::ir::NodeSpec::new("B");
        spec.color_index = Some(3);
        let diagram = Diagram {
            edges: vec![EdgeRecord::new("A", "B", 1.0)],
            nodes: vec![spec],
        };
        let layout = compute_layout(&diagram, &config_100());
        let b = layout.nodes.iter().find(|n| n.id == "B").unwrap();
        assert_eq!(b.color, crate::config::NODE_PALETTE[3]);
    }
}
