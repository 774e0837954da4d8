//! ringclock engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the clock face: the winit
//! window loop, wgpu device and surface, a z-ordered draw list and the arc
//! renderer.

pub mod core;
pub mod device;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
