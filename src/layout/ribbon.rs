use crate::config::LayoutConfig;

use super::graph::FlowGraph;
use super::orient::Frame;
use super::types::PathCommand;

/// Geometry for one link, still in logical coordinates.
#[derive(Debug)]
pub(super) struct RibbonGeom {
    pub thickness: f32,
    pub backward: bool,
    pub path: Vec<PathCommand>,
    pub label_anchor: (f32, f32),
}

/// Computes every link's anchor interval on both endpoint nodes and emits
/// its ribbon outline. Anchors are cumulative in stored link order, so the
/// ribbons leaving or entering one node tile its edge exactly and never
/// overlap each other.
pub(super) fn generate_ribbons(
    graph: &FlowGraph,
    scale: f32,
    spacing: f32,
    config: &LayoutConfig,
    frame: &Frame,
) -> Vec<RibbonGeom> {
    let thickness: Vec<f32> = graph.links.iter().map(|l| l.weight * scale).collect();

    let mut from_top = vec![0.0f32; graph.links.len()];
    let mut to_top = vec![0.0f32; graph.links.len()];
    for node in &graph.nodes {
        let mut acc = node.pos_cross;
        for &link in &node.outgoing {
            from_top[link] = acc;
            acc += thickness[link];
        }
        let mut acc = node.pos_cross;
        for &link in &node.incoming {
            to_top[link] = acc;
            acc += thickness[link];
        }
    }

    let curvy = config.curve_factor * spacing;
    graph
        .links
        .iter()
        .enumerate()
        .map(|(idx, link)| {
            let source = &graph.nodes[link.from];
            let target = &graph.nodes[link.to];
            let t = thickness[idx];
            let x1 = source.pos_rank + config.node_width;
            let x2 = target.pos_rank;
            let ys = from_top[idx];
            let yt = to_top[idx];
            let backward = target.rank() <= source.rank();
            let path = if backward {
                backward_ribbon(x1, ys, x2, yt, t, config.backward_bend, frame.cross_extent)
            } else {
                let stub = link.outgoing.then_some(config.outgoing_stub);
                forward_ribbon(x1, ys, x2, yt, t, curvy, stub)
            };
            RibbonGeom {
                thickness: t,
                backward,
                path,
                label_anchor: ((x1 + x2) / 2.0, (ys + yt + t) / 2.0),
            }
        })
        .collect()
}

/// Straight ribbon: two cubic curves between the source's trailing edge and
/// the target's leading edge. An outgoing link gets a rectangular stub past
/// the target to signal that the flow exits the system.
fn forward_ribbon(
    x1: f32,
    ys: f32,
    x2: f32,
    yt: f32,
    t: f32,
    curvy: f32,
    stub: Option<f32>,
) -> Vec<PathCommand> {
    let mut path = vec![
        PathCommand::MoveTo(x1, ys),
        PathCommand::CurveTo(x1 + curvy, ys, x2 - curvy, yt, x2, yt),
    ];
    if let Some(stub) = stub {
        path.push(PathCommand::LineTo(x2 + stub, yt));
        path.push(PathCommand::LineTo(x2 + stub, yt + t));
    }
    path.push(PathCommand::LineTo(x2, yt + t));
    path.push(PathCommand::CurveTo(
        x2 - curvy,
        yt + t,
        x1 + curvy,
        ys + t,
        x1,
        ys + t,
    ));
    path.push(PathCommand::Close);
    path
}

/// Routed ribbon for a link pointing against the rank order: out of the
/// source's trailing edge, around past the lower bound of the draw area by
/// `bend`, back beneath the columns, and up into the target's leading edge.
/// All control points derive from the bend distance, the thickness and the
/// four corner anchors. Best effort only; two such ribbons on the same node
/// pair may cross.
fn backward_ribbon(
    x1: f32,
    ys: f32,
    x2: f32,
    yt: f32,
    t: f32,
    bend: f32,
    lower_bound: f32,
) -> Vec<PathCommand> {
    // Vertical runs sit `bend` outside each node; the bottom run sits
    // `bend` below the draw area. Outer edges offset by the thickness.
    let inner_right = x1 + bend;
    let outer_right = inner_right + t;
    let inner_left = x2 - bend;
    let outer_left = inner_left - t;
    let inner_bottom = lower_bound + bend;
    let outer_bottom = inner_bottom + t;
    let r_out = bend + t;
    let r_in = bend;

    vec![
        // Outer edge, source anchor top to target anchor top.
        PathCommand::MoveTo(x1, ys),
        PathCommand::CurveTo(outer_right, ys, outer_right, ys, outer_right, ys + r_out),
        PathCommand::LineTo(outer_right, outer_bottom - r_out),
        PathCommand::CurveTo(
            outer_right,
            outer_bottom,
            outer_right,
            outer_bottom,
            outer_right - r_out,
            outer_bottom,
        ),
        PathCommand::LineTo(outer_left + r_out, outer_bottom),
        PathCommand::CurveTo(
            outer_left,
            outer_bottom,
            outer_left,
            outer_bottom,
            outer_left,
            outer_bottom - r_out,
        ),
        PathCommand::LineTo(outer_left, yt + r_out),
        PathCommand::CurveTo(outer_left, yt, outer_left, yt, x2, yt),
        // Inner edge, back from target anchor bottom to source anchor bottom.
        PathCommand::LineTo(x2, yt + t),
        PathCommand::CurveTo(
            inner_left,
            yt + t,
            inner_left,
            yt + t,
            inner_left,
            yt + t + r_in,
        ),
        PathCommand::LineTo(inner_left, inner_bottom - r_in),
        PathCommand::CurveTo(
            inner_left,
            inner_bottom,
            inner_left,
            inner_bottom,
            inner_left + r_in,
            inner_bottom,
        ),
        PathCommand::LineTo(inner_right - r_in, inner_bottom),
        PathCommand::CurveTo(
            inner_right,
            inner_bottom,
            inner_right,
            inner_bottom,
            inner_right,
            inner_bottom - r_in,
        ),
        PathCommand::LineTo(inner_right, ys + t + r_in),
        PathCommand::CurveTo(inner_right, ys + t, inner_right, ys + t, x1, ys + t),
        PathCommand::Close,
    ]
}
