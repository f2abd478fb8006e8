//! Core engine types for the aeroplane trainer.
//!
//! This crate provides the foundations shared by the other systems:
//! - Euler-angle transform composition for the part hierarchy
//! - Fixed-timestep frame timing

pub mod time;
pub mod transform;

pub use time::*;
pub use transform::*;

// Re-export commonly used math types
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
