//! The render-service seam between simulation and backend.

use crate::cache::MeshHandle;
use glam::Mat4;

/// Contract a backend implements to draw parts.
///
/// The caller sets a world transform, then draws a mesh under it; calls
/// arrive in a fixed per-entity order each frame.
pub trait RenderService {
    fn set_world_transform(&mut self, matrix: Mat4);
    fn draw_mesh(&mut self, mesh: MeshHandle);
}

/// Backend that records every draw with its transform. Used by tests and
/// headless runs to assert on draw order and matrices.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    current_transform: Mat4,
    /// Draws in submission order.
    pub draws: Vec<(Mat4, MeshHandle)>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.draws.clear();
    }
}

impl RenderService for RecordingBackend {
    fn set_world_transform(&mut self, matrix: Mat4) {
        self.current_transform = matrix;
    }

    fn draw_mesh(&mut self, mesh: MeshHandle) {
        self.draws.push((self.current_transform, mesh));
    }
}
