//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
///
/// Positions are in world pixels (origin top-left, y down); backends map them
/// to clip space.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// View a vertex list as raw bytes for upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.17, 0.24, 0.31, 1.0];
    pub const PLATFORM: [f32; 4] = [0.18, 0.80, 0.44, 1.0];
    pub const COIN: [f32; 4] = [0.95, 0.77, 0.06, 1.0];
    pub const SPIKE: [f32; 4] = [0.91, 0.30, 0.24, 1.0];
    pub const OBSTACLE: [f32; 4] = [0.61, 0.35, 0.71, 1.0];
    pub const PLAYER: [f32; 4] = [0.20, 0.60, 0.86, 1.0];
    pub const PLAYER_EYE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const GAME_OVER_OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.8];
    pub const STAR: [f32; 4] = [1.0, 1.0, 1.0, 0.3];
    pub const SCORE_PANEL: [f32; 4] = [0.20, 0.29, 0.37, 0.8];
    pub const SCORE_TEXT: [f32; 4] = [0.93, 0.94, 0.95, 1.0];
    pub const FINAL_SCORE: [f32; 4] = [0.91, 0.30, 0.24, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(Vertex::STRIDE, 24);
        let vertices = [Vertex::new(1.0, 2.0, colors::COIN); 3];
        assert_eq!(Vertex::as_bytes(&vertices).len(), 72);
    }
}
