pub mod command;
pub mod logging;
pub mod scheduler;
pub mod sources;
pub mod widget;

pub use command::Command;
pub use scheduler::{Scheduler, ThreadScheduler};
pub use sources::{FixedTheme, LocalClock, Settings, ThemeSource, TimeSource};
pub use widget::{ClockTick, ClockWidget, ClockWidgetState, TICK_INTERVAL};
