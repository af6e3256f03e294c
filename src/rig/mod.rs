//! The engine's view of the loaded avatar rig: named bones with
//! independently driven rotation/position channels.
//!
//! Model loading, camera, and lighting belong to the rendering substrate;
//! only the per-bone pose state crosses this boundary.

pub mod pose;
pub mod skeleton;
