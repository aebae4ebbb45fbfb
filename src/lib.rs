#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod dump;
pub mod ir;
pub mod layout;

pub use config::{LayoutConfig, load_config};
pub use ir::{Diagram, EdgeRecord, NodeOffset, NodePlacement, NodeSpec};
pub use layout::{Layout, LinkLayout, NodeLayout, PathCommand, compute_layout, compute_layout_with};

#[cfg(feature = "cli")]
pub use cli::run;
