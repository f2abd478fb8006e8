//! The aeroplane entity: a fixed four-part transform hierarchy
//! (body -> {propeller, turret} -> gun) with a switchable chase / gun camera.
//!
//! The hierarchy is hand-composed, parent first, every tick. World matrices
//! are never assigned directly; they are a pure function of the local state
//! recomputed by `update_matrices`.

use engine_core::{
    chase_basis, forward_axis, root_matrix, translation_of, Mat4, PartTransform, Vec3,
};
use input::FlightControls;
use renderer::{AeroplaneMeshes, MeshCache, RenderService, ResourceError};

/// Propeller mount, ahead of the body origin.
const PROPELLER_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 1.9);
/// Turret mount, above and behind the body origin.
const TURRET_OFFSET: Vec3 = Vec3::new(0.0, 1.05, -1.3);
/// Gun pivot, above the turret ring.
const GUN_OFFSET: Vec3 = Vec3::new(0.0, 0.5, 0.0);
/// Camera seat, above and behind its parent (body in chase mode, gun in gun-cam).
const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 4.5, -15.0);

/// Rotation applied per tick while a control signal is active, degrees.
const CONTROL_STEP_DEG: f32 = 0.5;
/// Pitch stops responding to control beyond this angle, degrees.
const PITCH_LIMIT_DEG: f32 = 60.0;
/// Roll stops responding to control beyond this angle, degrees.
const ROLL_LIMIT_DEG: f32 = 20.0;
/// Self-leveling step toward zero pitch/roll, degrees per tick.
const LEVEL_STEP_DEG: f32 = 0.15;
/// Forward thrust per tick.
const THRUST_PER_TICK: f32 = 0.001;
/// Speed cap.
const MAX_SPEED: f32 = 1.0;
/// Propeller spin in degrees per tick at full speed.
const PROPELLER_SPIN_PER_SPEED_DEG: f32 = 100.0;
/// Turret spin in degrees per tick.
const TURRET_SPIN_DEG: f32 = 0.1;
/// Amplitude of the gun's nod as the turret spins, degrees.
const GUN_NOD_AMPLITUDE_DEG: f32 = 10.0;
/// Nod cycles per turret revolution.
const GUN_NOD_FREQUENCY: f32 = 4.0;

/// A single aeroplane with propeller, turret, and gun sub-parts.
pub struct Aeroplane {
    position: Vec3,
    /// Body Euler angles in degrees: pitch = x, yaw = y, roll = z.
    rotation_deg: Vec3,
    propeller: PartTransform,
    turret: PartTransform,
    gun: PartTransform,
    camera: PartTransform,
    /// Forward velocity in [0, 1].
    speed: f32,
    /// Camera parent: gun when true, yaw-only body basis otherwise.
    gun_cam: bool,

    // Derived each recompute, never mutated directly.
    world: Mat4,
    propeller_world: Mat4,
    turret_world: Mat4,
    gun_world: Mat4,
    camera_world: Mat4,
    forward: Vec3,
    camera_position: Vec3,
}

impl Aeroplane {
    /// Create an aeroplane at the given position and heading.
    ///
    /// World matrices start at identity; the first `update` or
    /// `set_position` computes them.
    pub fn new(x: f32, y: f32, z: f32, yaw_deg: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            rotation_deg: Vec3::new(0.0, yaw_deg, 0.0),
            propeller: PartTransform::from_offset(PROPELLER_OFFSET),
            turret: PartTransform::from_offset(TURRET_OFFSET),
            gun: PartTransform::from_offset(GUN_OFFSET),
            camera: PartTransform::from_offset(CAMERA_OFFSET),
            speed: 0.0,
            gun_cam: false,
            world: Mat4::IDENTITY,
            propeller_world: Mat4::IDENTITY,
            turret_world: Mat4::IDENTITY,
            gun_world: Mat4::IDENTITY,
            camera_world: Mat4::IDENTITY,
            forward: Vec3::ZERO,
            camera_position: Vec3::ZERO,
        }
    }

    /// Teleport the aeroplane. Recomputes every world matrix immediately.
    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position = Vec3::new(x, y, z);
        self.update_matrices();
    }

    /// Select the camera parent: the gun when `true`, the yaw-only body
    /// basis otherwise. Takes effect on the next recompute.
    pub fn set_gun_camera(&mut self, active: bool) {
        self.gun_cam = active;
    }

    /// One fixed simulation tick.
    pub fn update(&mut self, controls: &FlightControls) {
        // Control deltas. Pitch and roll stop at their limits; yaw is free.
        if controls.pitch_up && self.rotation_deg.x > -PITCH_LIMIT_DEG {
            self.rotation_deg.x -= CONTROL_STEP_DEG;
        }
        if controls.pitch_down && self.rotation_deg.x < PITCH_LIMIT_DEG {
            self.rotation_deg.x += CONTROL_STEP_DEG;
        }
        if controls.left {
            if self.rotation_deg.z < ROLL_LIMIT_DEG {
                self.rotation_deg.z += CONTROL_STEP_DEG;
            }
            self.rotation_deg.y -= CONTROL_STEP_DEG;
        }
        if controls.right {
            if self.rotation_deg.z > -ROLL_LIMIT_DEG {
                self.rotation_deg.z -= CONTROL_STEP_DEG;
            }
            self.rotation_deg.y += CONTROL_STEP_DEG;
        }

        // Fixed-step return toward level, every tick, yaw excluded. A
        // residual smaller than the step crosses zero and settles into an
        // oscillation within one step of level.
        if self.rotation_deg.x != 0.0 {
            self.rotation_deg.x -= self.rotation_deg.x.signum() * LEVEL_STEP_DEG;
        }
        if self.rotation_deg.z != 0.0 {
            self.rotation_deg.z -= self.rotation_deg.z.signum() * LEVEL_STEP_DEG;
        }

        self.speed = (self.speed + THRUST_PER_TICK).min(MAX_SPEED);

        self.propeller.rotation_deg.z += PROPELLER_SPIN_PER_SPEED_DEG * self.speed;
        self.turret.rotation_deg.y += TURRET_SPIN_DEG;

        // The gun nods as the turret spins; its pitch is a function of the
        // turret yaw, never advanced independently.
        self.gun.rotation_deg.x = (self.turret.rotation_deg.y * GUN_NOD_FREQUENCY)
            .to_radians()
            .sin()
            * GUN_NOD_AMPLITUDE_DEG
            - GUN_NOD_AMPLITUDE_DEG;

        self.update_matrices();

        // Forward Euler, one step.
        self.position += self.forward * self.speed;
    }

    /// Recompute every world matrix from local state, parent first.
    fn update_matrices(&mut self) {
        self.world = root_matrix(self.position, self.rotation_deg);
        self.forward = forward_axis(self.world);

        self.propeller_world = self.world * self.propeller.local_matrix();
        self.turret_world = self.world * self.turret.local_matrix();
        self.gun_world = self.turret_world * self.gun.local_matrix();

        let camera_basis = if self.gun_cam {
            self.gun_world
        } else {
            chase_basis(self.position, self.rotation_deg.y)
        };
        self.camera_world = camera_basis * self.camera.local_matrix();
        self.camera_position = translation_of(self.camera_world);
    }

    /// Draw the four parts in fixed order: body, propeller, turret, gun.
    ///
    /// Fails before the first draw call if any shared part mesh has been
    /// released; partial frames are never submitted.
    pub fn draw(
        &self,
        meshes: &AeroplaneMeshes,
        cache: &MeshCache,
        backend: &mut dyn RenderService,
    ) -> Result<(), ResourceError> {
        meshes.ensure_available(cache)?;

        backend.set_world_transform(self.world);
        backend.draw_mesh(meshes.body);
        backend.set_world_transform(self.propeller_world);
        backend.draw_mesh(meshes.propeller);
        backend.set_world_transform(self.turret_world);
        backend.draw_mesh(meshes.turret);
        backend.set_world_transform(self.gun_world);
        backend.draw_mesh(meshes.gun);
        Ok(())
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Body Euler angles in degrees (pitch = x, yaw = y, roll = z).
    pub fn rotation_deg(&self) -> Vec3 {
        self.rotation_deg
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn gun_cam(&self) -> bool {
        self.gun_cam
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn world_matrix(&self) -> Mat4 {
        self.world
    }

    pub fn propeller_world_matrix(&self) -> Mat4 {
        self.propeller_world
    }

    pub fn turret_world_matrix(&self) -> Mat4 {
        self.turret_world
    }

    pub fn gun_world_matrix(&self) -> Mat4 {
        self.gun_world
    }

    pub fn camera_world_matrix(&self) -> Mat4 {
        self.camera_world
    }

    /// Camera position extracted from the camera world matrix.
    pub fn camera_position(&self) -> Vec3 {
        self.camera_position
    }

    pub fn propeller_rotation_deg(&self) -> Vec3 {
        self.propeller.rotation_deg
    }

    pub fn turret_rotation_deg(&self) -> Vec3 {
        self.turret.rotation_deg
    }

    pub fn gun_rotation_deg(&self) -> Vec3 {
        self.gun.rotation_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use renderer::RecordingBackend;

    const NO_INPUT: FlightControls = FlightControls {
        pitch_up: false,
        pitch_down: false,
        left: false,
        right: false,
    };

    fn pitch_up() -> FlightControls {
        FlightControls {
            pitch_up: true,
            ..Default::default()
        }
    }

    fn pitch_down() -> FlightControls {
        FlightControls {
            pitch_down: true,
            ..Default::default()
        }
    }

    fn left() -> FlightControls {
        FlightControls {
            left: true,
            ..Default::default()
        }
    }

    /// 1000 idle ticks from rest: speed climbs to the cap, attitude stays
    /// level the whole way (leveling is a no-op at exactly zero).
    #[test]
    fn idle_run_reaches_full_speed_and_stays_level() {
        let mut plane = Aeroplane::new(0.0, 0.0, 0.0, 0.0);
        for _ in 0..1000 {
            plane.update(&NO_INPUT);
            assert_eq!(plane.rotation_deg().x, 0.0);
            assert_eq!(plane.rotation_deg().z, 0.0);
        }
        assert!((plane.speed() - 1.0).abs() < 1e-3);

        for _ in 0..100 {
            plane.update(&NO_INPUT);
        }
        assert_eq!(plane.speed(), 1.0);
    }

    /// One tick of pitch-up: -0.5 from control, +0.15 back from leveling.
    #[test]
    fn single_pitch_up_tick_nets_control_minus_leveling() {
        let mut plane = Aeroplane::new(0.0, 0.0, 0.0, 0.0);
        plane.update(&pitch_up());
        assert!((plane.rotation_deg().x + 0.35).abs() < 1e-4);
    }

    /// Pitch saturates near its limit and never runs past it by more than
    /// one control step; speed stays capped.
    #[test]
    fn pitch_saturates_at_limit() {
        let mut plane = Aeroplane::new(0.0, 0.0, 0.0, 0.0);
        for _ in 0..400 {
            plane.update(&pitch_down());
            assert!(plane.rotation_deg().x < PITCH_LIMIT_DEG + CONTROL_STEP_DEG);
            assert!(plane.speed() <= 1.0);
        }
        assert!(plane.rotation_deg().x > PITCH_LIMIT_DEG - 1.0);
    }

    /// Roll saturates at its limit while yaw keeps winding without a cap.
    #[test]
    fn roll_saturates_but_yaw_is_unbounded() {
        let mut plane = Aeroplane::new(0.0, 0.0, 0.0, 0.0);
        for _ in 0..200 {
            plane.update(&left());
            assert!(plane.rotation_deg().z < ROLL_LIMIT_DEG + CONTROL_STEP_DEG);
        }
        // Yaw moves 0.5 degrees per tick unconditionally; 0.5 is exact in f32.
        assert_eq!(plane.rotation_deg().y, -100.0);
    }

    /// With controls released, pitch and roll step back toward level and
    /// never grow; yaw stays where the turn left it.
    #[test]
    fn self_leveling_returns_to_level_and_spares_yaw() {
        let mut plane = Aeroplane::new(0.0, 0.0, 0.0, 0.0);
        for _ in 0..40 {
            plane.update(&FlightControls {
                pitch_down: true,
                left: true,
                ..Default::default()
            });
        }
        let yaw_after_turn = plane.rotation_deg().y;

        let mut prev_pitch = plane.rotation_deg().x.abs();
        let mut prev_roll = plane.rotation_deg().z.abs();
        for _ in 0..300 {
            plane.update(&NO_INPUT);
            let pitch = plane.rotation_deg().x.abs();
            let roll = plane.rotation_deg().z.abs();
            // Monotone while above the step size; below it the angle only
            // oscillates inside the residual band.
            if prev_pitch > LEVEL_STEP_DEG {
                assert!(pitch < prev_pitch);
            } else {
                assert!(pitch <= LEVEL_STEP_DEG + 1e-4);
            }
            if prev_roll > LEVEL_STEP_DEG {
                assert!(roll < prev_roll);
            } else {
                assert!(roll <= LEVEL_STEP_DEG + 1e-4);
            }
            prev_pitch = pitch;
            prev_roll = roll;
        }
        assert_eq!(plane.rotation_deg().y, yaw_after_turn);
        assert!(plane.rotation_deg().x.abs() <= LEVEL_STEP_DEG + 1e-4);
        assert!(plane.rotation_deg().z.abs() <= LEVEL_STEP_DEG + 1e-4);
    }

    /// The gun's pitch tracks the turret yaw through the nod formula every
    /// tick and stays inside [-2A, 0].
    #[test]
    fn gun_pitch_is_a_function_of_turret_yaw() {
        let mut plane = Aeroplane::new(0.0, 0.0, 0.0, 0.0);
        for _ in 0..500 {
            plane.update(&NO_INPUT);
            let turret_yaw = plane.turret_rotation_deg().y;
            let expected = (turret_yaw * GUN_NOD_FREQUENCY).to_radians().sin()
                * GUN_NOD_AMPLITUDE_DEG
                - GUN_NOD_AMPLITUDE_DEG;
            let gun_pitch = plane.gun_rotation_deg().x;
            assert!((gun_pitch - expected).abs() < 1e-5);
            assert!(gun_pitch <= 1e-5);
            assert!(gun_pitch >= -2.0 * GUN_NOD_AMPLITUDE_DEG - 1e-5);
        }
    }

    /// Propeller spin follows speed and the turret winds at its fixed rate.
    #[test]
    fn propeller_and_turret_spin_rates() {
        let mut plane = Aeroplane::new(0.0, 0.0, 0.0, 0.0);
        let mut expected_prop = 0.0_f32;
        for tick in 1..=50 {
            plane.update(&NO_INPUT);
            expected_prop += 100.0 * plane.speed();
            assert!((plane.propeller_rotation_deg().z - expected_prop).abs() < 1e-3);
            assert!((plane.turret_rotation_deg().y - 0.1 * tick as f32).abs() < 1e-3);
        }
    }

    /// Matrix recomputation is pure: identical histories give bit-identical
    /// matrices, and recomputing without a state change changes nothing.
    #[test]
    fn recompute_is_pure() {
        let mut a = Aeroplane::new(3.0, 20.0, -4.0, 120.0);
        let mut b = Aeroplane::new(3.0, 20.0, -4.0, 120.0);
        let script = [pitch_up(), pitch_up(), left(), NO_INPUT, left(), pitch_down()];
        for controls in script.iter().cycle().take(60) {
            a.update(controls);
            b.update(controls);
        }
        assert_eq!(
            a.world_matrix().to_cols_array(),
            b.world_matrix().to_cols_array()
        );
        assert_eq!(
            a.gun_world_matrix().to_cols_array(),
            b.gun_world_matrix().to_cols_array()
        );
        assert_eq!(
            a.camera_world_matrix().to_cols_array(),
            b.camera_world_matrix().to_cols_array()
        );

        // `update` integrates `position` after the recompute, so re-seating
        // the plane at its integrated position legitimately moves the
        // translation column; recomputing from equal state must still agree.
        let pos = a.position();
        a.set_position(pos.x, pos.y, pos.z);
        b.set_position(pos.x, pos.y, pos.z);
        assert_eq!(translation_of(a.world_matrix()), a.position());
        assert_eq!(
            a.world_matrix().to_cols_array(),
            b.world_matrix().to_cols_array()
        );
        assert_eq!(
            a.camera_world_matrix().to_cols_array(),
            b.camera_world_matrix().to_cols_array()
        );
    }

    /// `set_position` recomputes eagerly and the root translation column
    /// recovers the exact position set.
    #[test]
    fn set_position_roundtrip_is_exact() {
        let mut plane = Aeroplane::new(0.0, 0.0, 0.0, 47.0);
        plane.set_position(12.5, -3.75, 900.25);
        let translation = engine_core::translation_of(plane.world_matrix());
        assert_eq!(translation, Vec3::new(12.5, -3.75, 900.25));
        assert_eq!(plane.position(), translation);
    }

    /// In chase mode the camera hangs off the yaw-only basis: banking and
    /// pitching the body does not tilt it.
    #[test]
    fn chase_camera_ignores_pitch_and_roll() {
        let mut plane = Aeroplane::new(5.0, 10.0, 15.0, 90.0);
        for _ in 0..30 {
            plane.update(&FlightControls {
                pitch_up: true,
                left: true,
                ..Default::default()
            });
        }
        assert!(plane.rotation_deg().x != 0.0 && plane.rotation_deg().z != 0.0);

        // The basis uses the position the matrices were computed from, which
        // is the root translation (integration advances `position` after the
        // recompute).
        let basis_pos = engine_core::translation_of(plane.world_matrix());
        let expected = chase_basis(basis_pos, plane.rotation_deg().y)
            * PartTransform::from_offset(CAMERA_OFFSET).local_matrix();
        assert_eq!(
            plane.camera_world_matrix().to_cols_array(),
            expected.to_cols_array()
        );
    }

    /// Switching to the gun camera parents it to the gun matrix of the same
    /// tick, not the previous one.
    #[test]
    fn gun_camera_uses_same_tick_gun_matrix() {
        let mut plane = Aeroplane::new(0.0, 50.0, 0.0, 30.0);
        for _ in 0..10 {
            plane.update(&NO_INPUT);
        }
        plane.set_gun_camera(true);
        plane.update(&NO_INPUT);
        assert!(plane.gun_cam());

        let expected = plane.gun_world_matrix()
            * PartTransform::from_offset(CAMERA_OFFSET).local_matrix();
        assert_eq!(
            plane.camera_world_matrix().to_cols_array(),
            expected.to_cols_array()
        );
        assert_eq!(
            plane.camera_position(),
            engine_core::translation_of(expected)
        );
    }

    /// Parts compose parent-first: the propeller sits ahead of the body
    /// along the heading, the gun rides the turret.
    #[test]
    fn hierarchy_offsets_follow_parents() {
        let mut plane = Aeroplane::new(0.0, 0.0, 0.0, 90.0);
        plane.set_position(0.0, 0.0, 0.0);

        // Yaw 90: body +Z now points along world +X.
        let prop_pos = engine_core::translation_of(plane.propeller_world_matrix());
        assert!((prop_pos - Vec3::new(1.9, 0.0, 0.0)).length() < 1e-5);

        let turret_pos = engine_core::translation_of(plane.turret_world_matrix());
        assert!((turret_pos - Vec3::new(-1.3, 1.05, 0.0)).length() < 1e-5);

        // Turret has not spun yet, so the gun is directly above it.
        let gun_pos = engine_core::translation_of(plane.gun_world_matrix());
        assert!((gun_pos - (turret_pos + Vec3::new(0.0, 0.5, 0.0))).length() < 1e-5);
    }

    /// Idle flight moves the plane along its heading only.
    #[test]
    fn integration_moves_along_heading() {
        let mut plane = Aeroplane::new(0.0, 0.0, 0.0, 0.0);
        for _ in 0..100 {
            plane.update(&NO_INPUT);
        }
        let pos = plane.position();
        assert_eq!(pos.x, 0.0);
        assert_eq!(pos.y, 0.0);
        assert!(pos.z > 0.0);
        assert!((plane.forward() - Vec3::Z).length() < 1e-6);
    }

    /// Draw submits the four parts in fixed order with their matrices.
    #[test]
    fn draw_submits_parts_in_order() {
        let mut cache = MeshCache::new();
        let meshes = AeroplaneMeshes::load(&mut cache);
        let mut backend = RecordingBackend::new();

        let mut plane = Aeroplane::new(0.0, 0.0, 0.0, 0.0);
        plane.update(&NO_INPUT);
        plane.draw(&meshes, &cache, &mut backend).unwrap();

        assert_eq!(backend.draws.len(), 4);
        let handles: Vec<_> = backend.draws.iter().map(|(_, h)| *h).collect();
        assert_eq!(
            handles,
            vec![meshes.body, meshes.propeller, meshes.turret, meshes.gun]
        );
        assert_eq!(
            backend.draws[0].0.to_cols_array(),
            plane.world_matrix().to_cols_array()
        );
        assert_eq!(
            backend.draws[3].0.to_cols_array(),
            plane.gun_world_matrix().to_cols_array()
        );
    }

    /// Released resources fail the draw before anything is submitted.
    #[test]
    fn draw_fails_cleanly_without_resources() {
        let mut cache = MeshCache::new();
        let meshes = AeroplaneMeshes::load(&mut cache);
        meshes.release(&mut cache);

        let mut backend = RecordingBackend::new();
        let mut plane = Aeroplane::new(0.0, 0.0, 0.0, 0.0);
        plane.update(&NO_INPUT);

        let err = plane.draw(&meshes, &cache, &mut backend).unwrap_err();
        assert!(matches!(err, ResourceError::Unavailable { .. }));
        assert!(backend.draws.is_empty());
    }
}
