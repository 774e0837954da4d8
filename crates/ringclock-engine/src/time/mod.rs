//! Time subsystem.
//!
//! - [`FrameClock`]: monotonic per-window frame timing (`tick()` once per frame)
//! - [`RedrawPolicy`]: when the runtime schedules the next frame
//! - [`WallClock`]: timezone-aware wall-clock source, swappable for tests

mod frame_clock;
mod pacing;
mod wall_clock;

pub use frame_clock::{FrameClock, FrameTime};
pub use pacing::RedrawPolicy;
pub use wall_clock::{FixedClock, SystemClock, WallClock};
