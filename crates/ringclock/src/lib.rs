//! Concentric-ring analog clock.
//!
//! Six nested arcs show progress through the current second, minute, hour,
//! day, year and century. [`fractions`] turns a wall-clock instant into the six
//! progress values, [`face`] lays them out as arcs, and [`app`] redraws them
//! every frame on top of `ringclock-engine`.

pub mod app;
pub mod face;
pub mod fractions;

pub use app::ClockApp;
pub use face::{ClockFace, Ring};
pub use fractions::TimeFractions;
