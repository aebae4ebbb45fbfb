use crate::layout::{Layout, LinkLayout, NodeLayout, PathCommand};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializable mirror of a computed layout, for the CLI and for golden
/// comparisons. Path commands keep their SVG-like single-letter tags.
#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f32,
    pub height: f32,
    pub inverted: bool,
    pub scale: f32,
    pub nodes: Vec<NodeDump>,
    pub links: Vec<LinkDump>,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub id: String,
    pub rank: usize,
    pub sum: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hangs_from: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LinkDump {
    pub from: String,
    pub to: String,
    pub weight: f32,
    pub thickness: f32,
    pub backward: bool,
    pub outgoing: bool,
    pub label_anchor: [f32; 2],
    pub color: String,
    pub path: Vec<CommandDump>,
}

#[derive(Debug, Serialize)]
pub enum CommandDump {
    #[serde(rename = "m")]
    Move([f32; 2]),
    #[serde(rename = "l")]
    Line([f32; 2]),
    #[serde(rename = "c")]
    Curve([f32; 6]),
    #[serde(rename = "z")]
    Close,
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout) -> Self {
        Self {
            width: layout.width,
            height: layout.height,
            inverted: layout.inverted,
            scale: layout.scale,
            nodes: layout.nodes.iter().map(NodeDump::from_node).collect(),
            links: layout.links.iter().map(LinkDump::from_link).collect(),
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    pub fn write_json(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

impl NodeDump {
    fn from_node(node: &NodeLayout) -> Self {
        Self {
            id: node.id.clone(),
            rank: node.rank,
            sum: node.sum,
            x: node.x,
            y: node.y,
            width: node.width,
            height: node.height,
            color: node.color.clone(),
            hangs_from: node.hangs_from.clone(),
        }
    }
}

impl LinkDump {
    fn from_link(link: &LinkLayout) -> Self {
        Self {
            from: link.from.clone(),
            to: link.to.clone(),
            weight: link.weight,
            thickness: link.thickness,
            backward: link.backward,
            outgoing: link.outgoing,
            label_anchor: [link.label_anchor.0, link.label_anchor.1],
            color: link.color.clone(),
            path: link.path.iter().map(|c| (*c).into()).collect(),
        }
    }
}

impl From<PathCommand> for CommandDump {
    fn from(command: PathCommand) -> Self {
        match command {
            PathCommand::MoveTo(x, y) => CommandDump::Move([x, y]),
            PathCommand::LineTo(x, y) => CommandDump::Line([x, y]),
            PathCommand::CurveTo(c1x, c1y, c2x, c2y, x, y) => {
                CommandDump::Curve([c1x, c1y, c2x, c2y, x, y])
            }
            PathCommand::Close => CommandDump::Close,
        }
    }
}
