//! Euler-angle transform composition for the part hierarchy.
//!
//! All angles are degrees at the API and are converted to radians at the
//! glam call. glam is column-vector, so a parent matrix multiplies on the
//! left: `world = parent * local`.

use glam::{Mat4, Vec3};

/// Local transform of an attached part: a fixed offset from its parent plus
/// Euler rotation angles in degrees (pitch = x, yaw = y, roll = z).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartTransform {
    pub offset: Vec3,
    pub rotation_deg: Vec3,
}

impl PartTransform {
    /// Create a part transform at the given offset with no rotation.
    pub fn from_offset(offset: Vec3) -> Self {
        Self {
            offset,
            rotation_deg: Vec3::ZERO,
        }
    }

    /// Local matrix of the part: `Translate(offset) * Rz * Ry * Rx`.
    ///
    /// Rotation applies X first, then Y, then Z, which is the standard order
    /// for attached parts (the root body uses a different one, see
    /// [`root_matrix`]).
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.offset)
            * Mat4::from_rotation_z(self.rotation_deg.z.to_radians())
            * Mat4::from_rotation_y(self.rotation_deg.y.to_radians())
            * Mat4::from_rotation_x(self.rotation_deg.x.to_radians())
    }
}

impl Default for PartTransform {
    fn default() -> Self {
        Self::from_offset(Vec3::ZERO)
    }
}

/// World matrix of the root body: `Translate(pos) * Ry(yaw) * Rx(pitch) * Rz(roll)`.
///
/// Roll applies first, then pitch, then yaw. This Z,X,Y order differs from
/// the X,Y,Z order used for parts and is a deliberate quirk of the flight
/// model; changing it changes the banked-turn behaviour.
pub fn root_matrix(position: Vec3, rotation_deg: Vec3) -> Mat4 {
    Mat4::from_translation(position)
        * Mat4::from_rotation_y(rotation_deg.y.to_radians())
        * Mat4::from_rotation_x(rotation_deg.x.to_radians())
        * Mat4::from_rotation_z(rotation_deg.z.to_radians())
}

/// Parent basis for a chase camera: translation plus yaw only.
///
/// Pitch and roll of the followed body are discarded so the camera never
/// banks or pitches with it.
pub fn chase_basis(position: Vec3, yaw_deg: f32) -> Mat4 {
    Mat4::from_translation(position) * Mat4::from_rotation_y(yaw_deg.to_radians())
}

/// Direction the matrix maps the local +Z axis to (w = 0, translation ignored).
pub fn forward_axis(world: Mat4) -> Vec3 {
    world.transform_vector3(Vec3::Z)
}

/// Translation component of a world matrix, via decomposition.
pub fn translation_of(world: Mat4) -> Vec3 {
    let (_scale, _rotation, translation) = world.to_scale_rotation_translation();
    translation
}
