use anyhow::Result;

use ringclock::ClockApp;
use ringclock_engine::device::GpuInit;
use ringclock_engine::logging::{init_logging, LoggingConfig};
use ringclock_engine::time::{RedrawPolicy, SystemClock};
use ringclock_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Clock".to_string(),
        redraw: RedrawPolicy::Continuous,
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GpuInit::default(), ClockApp::new(SystemClock::new()))
}
