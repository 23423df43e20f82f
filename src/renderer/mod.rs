//! Rendering module
//!
//! Renderers only read simulation state. The scene builder turns a
//! `GameState` into a backend-agnostic triangle list.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::build_scene;
pub use vertex::Vertex;

use crate::sim::GameState;

/// Something that draws a frame from the current state
pub trait Renderer {
    fn render(&mut self, state: &GameState);
}

/// Renderer that builds the frame geometry without presenting it
///
/// Used by the native driver and tests; keeps the last frame for inspection.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub frames: u64,
    pub last_frame: Vec<Vertex>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the last frame's vertex buffer in bytes
    pub fn last_frame_bytes(&self) -> usize {
        Vertex::as_bytes(&self.last_frame).len()
    }
}

impl Renderer for HeadlessRenderer {
    fn render(&mut self, state: &GameState) {
        self.last_frame = build_scene(state);
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_renderer_keeps_last_frame() {
        let state = GameState::new(3);
        let mut renderer = HeadlessRenderer::new();

        renderer.render(&state);
        renderer.render(&state);

        assert_eq!(renderer.frames, 2);
        assert!(!renderer.last_frame.is_empty());
        assert_eq!(
            renderer.last_frame_bytes(),
            renderer.last_frame.len() * Vertex::STRIDE
        );
    }
}
