//! Output contract of the layout pass: typed geometry only, ready to be
//! handed to a rendering collaborator.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    /// Cubic Bezier: two control points then the end point.
    CurveTo(f32, f32, f32, f32, f32, f32),
    Close,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeLayout {
    pub id: String,
    /// Discrete column the node was assigned to.
    pub rank: usize,
    /// Total flow through the node: outgoing weights when any exist,
    /// incoming weights otherwise.
    pub sum: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
    /// Parent id when the node was placed by a hanging parent.
    pub hangs_from: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkLayout {
    pub from: String,
    pub to: String,
    pub weight: f32,
    /// Ribbon thickness in pixels (`weight * scale`).
    pub thickness: f32,
    /// True when the link points against the rank order and was routed
    /// around the columns instead of straight across.
    pub backward: bool,
    /// True when the link exits the system and carries a stub.
    pub outgoing: bool,
    /// Closed ribbon outline.
    pub path: Vec<PathCommand>,
    /// Midpoint between the source and target anchors.
    pub label_anchor: (f32, f32),
    /// Explicit link color, or the source node's color.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub inverted: bool,
    /// Pixels of extent per unit of weight, shared by every column.
    pub scale: f32,
    /// Nodes in ascending rank order, stable within a rank.
    pub nodes: Vec<NodeLayout>,
    /// Links in input order, invalid records excluded.
    pub links: Vec<LinkLayout>,
}
