use super::types::PathCommand;

/// Coordinate frame for one layout pass. All packing and ribbon geometry is
/// computed in logical coordinates (rank axis, cross axis); the frame maps
/// them to draw-area coordinates in one place, so the inverted orientation
/// never branches inside the algorithms.
#[derive(Debug, Clone, Copy)]
pub(super) struct Frame {
    /// Extent along the rank axis (columns spread across this).
    pub rank_extent: f32,
    /// Extent along the cross axis (nodes stack across this).
    pub cross_extent: f32,
    pub inverted: bool,
}

impl Frame {
    pub fn new(width: f32, height: f32, inverted: bool) -> Self {
        if inverted {
            Self {
                rank_extent: height,
                cross_extent: width,
                inverted,
            }
        } else {
            Self {
                rank_extent: width,
                cross_extent: height,
                inverted,
            }
        }
    }

    pub fn point(&self, u: f32, v: f32) -> (f32, f32) {
        if self.inverted { (v, u) } else { (u, v) }
    }

    /// Maps a logical rect (rank-axis position, cross-axis position,
    /// rank-axis extent, cross-axis extent) to an output rect.
    pub fn rect(&self, u: f32, v: f32, du: f32, dv: f32) -> (f32, f32, f32, f32) {
        if self.inverted {
            (v, u, dv, du)
        } else {
            (u, v, du, dv)
        }
    }

    pub fn command(&self, command: PathCommand) -> PathCommand {
        if !self.inverted {
            return command;
        }
        match command {
            PathCommand::MoveTo(u, v) => PathCommand::MoveTo(v, u),
            PathCommand::LineTo(u, v) => PathCommand::LineTo(v, u),
            PathCommand::CurveTo(c1u, c1v, c2u, c2v, u, v) => {
                PathCommand::CurveTo(c1v, c1u, c2v, c2u, v, u)
            }
            PathCommand::Close => PathCommand::Close,
        }
    }
}
