//! Rendering interface for the aeroplane trainer.
//!
//! Simulation code talks to rendering through [`RenderService`] and owns its
//! mesh resources through [`MeshCache`]; everything device-side lives behind
//! that seam.

pub mod cache;
pub mod mesh;
pub mod service;
pub mod vertex;

pub use cache::*;
pub use mesh::*;
pub use service::*;
pub use vertex::*;
