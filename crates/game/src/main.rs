//! Headless trainer loop: flies one aeroplane through a scripted control
//! sequence at a fixed 60 Hz timestep and logs its state.

use anyhow::Result;
use game::Aeroplane;
use engine_core::{Mat4, Time};
use input::FlightControls;
use renderer::{AeroplaneMeshes, MeshCache, MeshHandle, RenderService};

/// Total fixed ticks to simulate before exiting.
const RUN_TICKS: u64 = 600;

/// Backend that logs draws instead of submitting them to a device.
struct LogBackend {
    current: Mat4,
}

impl RenderService for LogBackend {
    fn set_world_transform(&mut self, matrix: Mat4) {
        self.current = matrix;
    }

    fn draw_mesh(&mut self, mesh: MeshHandle) {
        log::trace!("draw {:?} at {:?}", mesh, self.current.w_axis);
    }
}

/// Scripted control phases standing in for a live keyboard: climb, bank
/// left, then a nose-down right turn.
fn scripted_controls(tick: u64) -> FlightControls {
    match tick {
        60..=179 => FlightControls {
            pitch_up: true,
            ..Default::default()
        },
        240..=359 => FlightControls {
            left: true,
            ..Default::default()
        },
        420..=479 => FlightControls {
            right: true,
            pitch_down: true,
            ..Default::default()
        },
        _ => FlightControls::inactive(),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut cache = MeshCache::new();
    let meshes = AeroplaneMeshes::load(&mut cache);
    log::info!("loaded {} shared part meshes", cache.len());

    let mut plane = Aeroplane::new(0.0, 3.5, 0.0, 105.0);
    let mut backend = LogBackend {
        current: Mat4::IDENTITY,
    };
    let mut time = Time::new();
    let mut tick: u64 = 0;

    while tick < RUN_TICKS {
        time.update();
        while time.should_fixed_update() && tick < RUN_TICKS {
            // Gun camera for the middle third of the flight.
            plane.set_gun_camera((200..400).contains(&tick));
            plane.update(&scripted_controls(tick));
            plane.draw(&meshes, &cache, &mut backend)?;

            if tick % 120 == 0 {
                let pos = plane.position();
                log::info!(
                    "tick {:4}  pos ({:7.2} {:7.2} {:7.2})  speed {:.3}  cam {:?}",
                    tick,
                    pos.x,
                    pos.y,
                    pos.z,
                    plane.speed(),
                    plane.camera_position()
                );
            }
            tick += 1;
        }
        std::thread::sleep(std::time::Duration::from_millis(1));
    }

    // Shared meshes outlive every entity; releasing twice is a no-op.
    meshes.release(&mut cache);
    meshes.release(&mut cache);
    log::info!("released shared meshes, {} resident", cache.len());
    Ok(())
}
