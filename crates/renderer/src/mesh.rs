//! CPU-side mesh data and procedural builders for the aeroplane parts.
//!
//! Meshes are plain vertex/index arrays; uploading them to a device is the
//! backend's concern. The four part meshes are composed from axis-aligned
//! boxes in part-local space, so each part's origin sits at its attachment
//! point in the hierarchy.

use crate::vertex::Vertex;
use glam::Vec3;

/// A mesh as vertex and index data.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Create an empty mesh with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append an axis-aligned box centered at `center` with the given half
    /// extents and a flat color.
    pub fn push_box(&mut self, center: Vec3, half: Vec3, color: [f32; 4]) {
        let (cx, cy, cz) = (center.x, center.y, center.z);
        let (hx, hy, hz) = (half.x, half.y, half.z);
        let base = self.vertices.len() as u32;

        #[rustfmt::skip]
        let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
            // Front (+Z)
            ([0.0, 0.0, 1.0], [
                [cx - hx, cy - hy, cz + hz], [cx + hx, cy - hy, cz + hz],
                [cx + hx, cy + hy, cz + hz], [cx - hx, cy + hy, cz + hz],
            ]),
            // Back (-Z)
            ([0.0, 0.0, -1.0], [
                [cx + hx, cy - hy, cz - hz], [cx - hx, cy - hy, cz - hz],
                [cx - hx, cy + hy, cz - hz], [cx + hx, cy + hy, cz - hz],
            ]),
            // Top (+Y)
            ([0.0, 1.0, 0.0], [
                [cx - hx, cy + hy, cz + hz], [cx + hx, cy + hy, cz + hz],
                [cx + hx, cy + hy, cz - hz], [cx - hx, cy + hy, cz - hz],
            ]),
            // Bottom (-Y)
            ([0.0, -1.0, 0.0], [
                [cx - hx, cy - hy, cz - hz], [cx + hx, cy - hy, cz - hz],
                [cx + hx, cy - hy, cz + hz], [cx - hx, cy - hy, cz + hz],
            ]),
            // Right (+X)
            ([1.0, 0.0, 0.0], [
                [cx + hx, cy - hy, cz + hz], [cx + hx, cy - hy, cz - hz],
                [cx + hx, cy + hy, cz - hz], [cx + hx, cy + hy, cz + hz],
            ]),
            // Left (-X)
            ([-1.0, 0.0, 0.0], [
                [cx - hx, cy - hy, cz - hz], [cx - hx, cy - hy, cz + hz],
                [cx - hx, cy + hy, cz + hz], [cx - hx, cy + hy, cz - hz],
            ]),
        ];

        let uvs = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];
        for (normal, corners) in faces {
            for (corner, uv) in corners.into_iter().zip(uvs) {
                self.vertices
                    .push(Vertex::with_color(corner, normal, uv, color));
            }
        }
        for face in 0..6u32 {
            let f = base + face * 4;
            self.indices
                .extend_from_slice(&[f, f + 1, f + 2, f, f + 2, f + 3]);
        }
    }

    /// Fuselage with wings and tail, nose toward +Z, origin at the body center.
    pub fn aeroplane_body() -> Self {
        let olive = [0.45, 0.47, 0.30, 1.0];
        let mut mesh = Self::new("plane_body");
        // Fuselage
        mesh.push_box(Vec3::new(0.0, 0.0, 0.2), Vec3::new(0.4, 0.4, 1.7), olive);
        // Main wing
        mesh.push_box(Vec3::new(0.0, 0.1, 0.3), Vec3::new(2.4, 0.06, 0.55), olive);
        // Tail plane and fin
        mesh.push_box(Vec3::new(0.0, 0.15, -1.5), Vec3::new(0.9, 0.05, 0.3), olive);
        mesh.push_box(Vec3::new(0.0, 0.55, -1.5), Vec3::new(0.05, 0.45, 0.3), olive);
        mesh
    }

    /// Two-blade propeller with hub, origin at the spinner, blades in XY.
    pub fn aeroplane_propeller() -> Self {
        let steel = [0.35, 0.35, 0.38, 1.0];
        let mut mesh = Self::new("plane_propeller");
        mesh.push_box(Vec3::ZERO, Vec3::new(0.1, 0.1, 0.15), steel);
        mesh.push_box(Vec3::new(0.0, 0.65, 0.0), Vec3::new(0.08, 0.65, 0.03), steel);
        mesh.push_box(Vec3::new(0.0, -0.65, 0.0), Vec3::new(0.08, 0.65, 0.03), steel);
        mesh
    }

    /// Turret base and ring, origin at the mount point on the fuselage spine.
    pub fn aeroplane_turret() -> Self {
        let olive = [0.40, 0.42, 0.27, 1.0];
        let mut mesh = Self::new("plane_turret");
        mesh.push_box(Vec3::new(0.0, 0.15, 0.0), Vec3::new(0.35, 0.15, 0.35), olive);
        mesh.push_box(Vec3::new(0.0, 0.4, 0.0), Vec3::new(0.25, 0.12, 0.25), olive);
        mesh
    }

    /// Gun barrel pointing along +Z, origin at the pivot atop the turret.
    pub fn aeroplane_gun() -> Self {
        let steel = [0.28, 0.28, 0.30, 1.0];
        let mut mesh = Self::new("plane_gun");
        mesh.push_box(Vec3::new(0.0, 0.0, 0.35), Vec3::new(0.06, 0.06, 0.45), steel);
        mesh.push_box(Vec3::new(0.0, -0.05, 0.0), Vec3::new(0.12, 0.1, 0.12), steel);
        mesh
    }
}
