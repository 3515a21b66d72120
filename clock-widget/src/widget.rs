use std::mem;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use clock_face::{render_document, Surface};
use clock_lib::RenderParameters;

use crate::scheduler::Scheduler;
use crate::sources::{Settings, ThemeSource, TimeSource};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// One refresh of the clock: read the time, draw it, show it.
pub struct ClockTick {
    time: Box<dyn TimeSource>,
    theme: Arc<dyn ThemeSource>,
    settings: Arc<Settings>,
    surface: Mutex<Box<dyn Surface>>,
}

impl ClockTick {
    pub fn new(
        time: Box<dyn TimeSource>,
        theme: Arc<dyn ThemeSource>,
        settings: Arc<Settings>,
        surface: Box<dyn Surface>,
    ) -> Self {
        Self {
            time,
            theme,
            settings,
            surface: Mutex::new(surface),
        }
    }

    pub fn run(&self) {
        let now = self.time.now();
        let params = RenderParameters::new(&now, self.settings.size(), &self.theme.colors());
        let document = render_document(&params);

        log::trace!(
            "tick {:02}:{:02}:{:02}",
            now.hour(),
            now.minute(),
            now.second()
        );

        let mut surface = self.surface.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = surface.show(&document) {
            log::warn!("failed to show clock: {err}");
        }
    }
}

#[derive(Debug)]
pub enum ClockWidgetState<H> {
    Stopped,
    Running(H),
}

pub struct ClockWidget<S: Scheduler> {
    scheduler: S,
    tick: Arc<ClockTick>,
    state: ClockWidgetState<S::Handle>,
}

impl<S: Scheduler> ClockWidget<S> {
    pub fn new(scheduler: S, tick: ClockTick) -> Self {
        Self {
            scheduler,
            tick: Arc::new(tick),
            state: ClockWidgetState::Stopped,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, ClockWidgetState::Running(_))
    }

    /// Starts a stopped clock or stops a running one. Returns whether the
    /// clock is running afterwards.
    pub fn toggle(&mut self) -> bool {
        match mem::replace(&mut self.state, ClockWidgetState::Stopped) {
            ClockWidgetState::Stopped => {
                self.tick.run();
                let tick = Arc::clone(&self.tick);
                let handle = self
                    .scheduler
                    .schedule_repeating(TICK_INTERVAL, Box::new(move || tick.run()));
                self.state = ClockWidgetState::Running(handle);
                log::info!("clock started");
                true
            }
            ClockWidgetState::Running(handle) => {
                self.scheduler.cancel(handle);
                log::info!("clock stopped");
                false
            }
        }
    }

    /// Stops the clock if it is running.
    pub fn shutdown(&mut self) {
        if self.is_running() {
            self.toggle();
        }
    }
}
