use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read diagram: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse diagram: {0}")]
    Parse(#[from] json5::Error),
}

/// One weighted flow between two named nodes. A record whose `weight` is
/// absent or non-finite is invalid and silently excluded from layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub weight: Option<f32>,
    /// Marks a flow that exits the system: the ribbon gets a stub past the
    /// target instead of terminating flush on it.
    #[serde(default)]
    pub outgoing: bool,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub color_index: Option<usize>,
}

impl EdgeRecord {
    pub fn new(from: &str, to: &str, weight: f32) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            weight: Some(weight),
            outgoing: false,
            color: None,
            color_index: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodePlacement {
    #[default]
    Normal,
    /// Children of this node are indented one extra rank per outgoing edge,
    /// org-chart style, and keep a back-reference to the parent.
    Hanging,
}

/// Offset override for a node inside its column: absolute pixels, or a
/// percentage string like `"50%"` of the node's own stacked extent plus
/// padding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeOffset {
    Pixels(f32),
    Text(String),
}

impl NodeOffset {
    pub fn resolve(&self, relative_extent: f32) -> Option<f32> {
        match self {
            NodeOffset::Pixels(px) => Some(*px),
            NodeOffset::Text(text) => {
                let percent = text.trim().strip_suffix('%')?;
                let value: f32 = percent.trim().parse().ok()?;
                Some(value / 100.0 * relative_extent)
            }
        }
    }
}

/// Per-node override, keyed by id. Also the only way to introduce a node
/// that no edge references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    #[serde(default)]
    pub column: Option<usize>,
    #[serde(default)]
    pub offset: Option<NodeOffset>,
    #[serde(default)]
    pub layout: NodePlacement,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub color_index: Option<usize>,
}

impl NodeSpec {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            column: None,
            offset: None,
            layout: NodePlacement::Normal,
            color: None,
            color_index: None,
        }
    }
}

/// The full input contract: an ordered edge list plus node overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagram {
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
}

impl Diagram {
    pub fn from_edges(edges: Vec<EdgeRecord>) -> Self {
        Self {
            edges,
            nodes: Vec::new(),
        }
    }

    /// Parses a diagram from JSON5 (plain JSON is a subset).
    pub fn parse(input: &str) -> Result<Self, InputError> {
        Ok(json5::from_str(input)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }
}
