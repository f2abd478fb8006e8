//! Owned mesh cache and the shared aeroplane mesh bundle.
//!
//! The cache is an explicit object passed around by reference instead of
//! process-wide statics, so tests and multiple scenes can each own one.
//! Handles stay valid for the lifetime of the cache; releasing a handle
//! twice is a no-op.

use crate::mesh::MeshData;
use thiserror::Error;

/// Error raised by the draw path when a required mesh is missing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResourceError {
    /// A part mesh was released (or never loaded) before drawing.
    #[error("mesh resource '{name}' unavailable")]
    Unavailable { name: &'static str },
}

/// Opaque handle to a mesh slot in a [`MeshCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(u32);

/// Slot-based mesh store. Slots are never reused, so a stale handle can
/// only miss, never alias another mesh.
#[derive(Debug, Default)]
pub struct MeshCache {
    slots: Vec<Option<MeshData>>,
}

impl MeshCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a mesh and return its handle.
    pub fn insert(&mut self, mesh: MeshData) -> MeshHandle {
        log::debug!("mesh cache: loaded '{}'", mesh.name);
        self.slots.push(Some(mesh));
        MeshHandle(self.slots.len() as u32 - 1)
    }

    /// Look up a mesh. Returns `None` for released or foreign handles.
    pub fn get(&self, handle: MeshHandle) -> Option<&MeshData> {
        self.slots.get(handle.0 as usize)?.as_ref()
    }

    /// Check whether a handle still resolves to a mesh.
    pub fn contains(&self, handle: MeshHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Release a mesh. Releasing an already-released handle is a no-op.
    pub fn release(&mut self, handle: MeshHandle) {
        if let Some(slot) = self.slots.get_mut(handle.0 as usize) {
            if let Some(mesh) = slot.take() {
                log::debug!("mesh cache: released '{}'", mesh.name);
            }
        }
    }

    /// Release every mesh still resident.
    pub fn release_all(&mut self) {
        for slot in &mut self.slots {
            slot.take();
        }
    }

    /// Number of meshes currently resident.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handles for the four shared aeroplane part meshes.
///
/// Loaded once before any aeroplane is created and released once after the
/// last one is gone; individual entities borrow these, they never own them.
#[derive(Debug, Clone, Copy)]
pub struct AeroplaneMeshes {
    pub body: MeshHandle,
    pub propeller: MeshHandle,
    pub turret: MeshHandle,
    pub gun: MeshHandle,
}

impl AeroplaneMeshes {
    /// Build the four procedural part meshes and store them in the cache.
    pub fn load(cache: &mut MeshCache) -> Self {
        Self {
            body: cache.insert(MeshData::aeroplane_body()),
            propeller: cache.insert(MeshData::aeroplane_propeller()),
            turret: cache.insert(MeshData::aeroplane_turret()),
            gun: cache.insert(MeshData::aeroplane_gun()),
        }
    }

    /// Release all four part meshes. Idempotent.
    pub fn release(&self, cache: &mut MeshCache) {
        cache.release(self.body);
        cache.release(self.propeller);
        cache.release(self.turret);
        cache.release(self.gun);
    }

    /// Check that every part mesh is still resident.
    pub fn available(&self, cache: &MeshCache) -> bool {
        self.ensure_available(cache).is_ok()
    }

    /// Availability check that names the first missing part.
    pub fn ensure_available(&self, cache: &MeshCache) -> Result<(), ResourceError> {
        for (handle, name) in [
            (self.body, "plane_body"),
            (self.propeller, "plane_propeller"),
            (self.turret, "plane_turret"),
            (self.gun, "plane_gun"),
        ] {
            if !cache.contains(handle) {
                return Err(ResourceError::Unavailable { name });
            }
        }
        Ok(())
    }
}
