use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default node fill colors, rotated by registry index when a node carries
/// no explicit color.
pub const NODE_PALETTE: [&str; 10] = [
    "#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f", "#edc949", "#af7aa1", "#ff9da7",
    "#9c755f", "#bab0ab",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Draw area width in pixels.
    pub width: f32,
    /// Draw area height in pixels.
    pub height: f32,
    /// Transposed orientation: ranks run top-to-bottom instead of
    /// left-to-right.
    pub inverted: bool,
    /// Node thickness along the rank axis.
    pub node_width: f32,
    /// Gap between stacked nodes in one column.
    pub node_padding: f32,
    /// Ribbon curvature as a fraction of the column spacing. 0 gives
    /// straight-sided ribbons.
    pub curve_factor: f32,
    /// How far a backward ribbon sweeps past the nodes and the lower bound
    /// of the draw area.
    pub backward_bend: f32,
    /// Length of the stub drawn past the target for links marked outgoing.
    pub outgoing_stub: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            inverted: false,
            node_width: 20.0,
            node_padding: 10.0,
            curve_factor: 0.33,
            backward_bend: 20.0,
            outgoing_stub: 15.0,
        }
    }
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<LayoutConfig> {
    let Some(path) = path else {
        return Ok(LayoutConfig::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let config = json5::from_str(&contents)?;
    Ok(config)
}
