//! Game logic for the aeroplane trainer.

pub mod aeroplane;

pub use aeroplane::Aeroplane;
