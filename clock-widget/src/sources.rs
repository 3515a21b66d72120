//! Where each tick reads the time, the colors and the size from.

use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{PoisonError, RwLock};

use chrono::{Local, Timelike};
use clock_lib::{ColorPair, WallClockTime};

pub const DEFAULT_SIZE: u32 = 250;

/// Below this APCA lightness contrast the hands are hard to make out.
pub const MIN_CONTRAST: f32 = 30.0;

/// The colors' contrast, if it is too low to read the clock comfortably.
pub fn low_contrast(colors: &ColorPair) -> Option<f32> {
    let lc = colors.contrast();
    (lc.abs() < MIN_CONTRAST).then_some(lc)
}

pub trait TimeSource: Send + Sync {
    fn now(&self) -> WallClockTime;
}

/// The system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> WallClockTime {
        let now = Local::now();
        WallClockTime::new(now.hour(), now.minute(), now.second())
            .expect("chrono time fields are in range")
    }
}

pub trait ThemeSource: Send + Sync {
    fn colors(&self) -> ColorPair;
}

/// Colors set at startup and changed from the command line.
#[derive(Debug, Default)]
pub struct FixedTheme {
    colors: RwLock<ColorPair>,
}

impl FixedTheme {
    pub fn new(colors: ColorPair) -> Self {
        Self {
            colors: RwLock::new(colors),
        }
    }

    pub fn update(&self, f: impl FnOnce(&mut ColorPair)) -> ColorPair {
        let mut colors = self.colors.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut colors);
        *colors
    }
}

impl ThemeSource for FixedTheme {
    fn colors(&self) -> ColorPair {
        *self.colors.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Live settings, read fresh on every tick.
#[derive(Debug)]
pub struct Settings {
    size: AtomicU32,
}

impl Settings {
    pub fn new(size: NonZeroU32) -> Self {
        Self {
            size: AtomicU32::new(size.get()),
        }
    }

    pub fn size(&self) -> NonZeroU32 {
        // only ever stored from a NonZeroU32
        NonZeroU32::new(self.size.load(Ordering::Relaxed)).unwrap_or(NonZeroU32::MIN)
    }

    pub fn set_size(&self, size: NonZeroU32) {
        self.size.store(size.get(), Ordering::Relaxed);
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: AtomicU32::new(DEFAULT_SIZE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings() {
        let settings = Settings::default();
        assert_eq!(settings.size().get(), DEFAULT_SIZE);
        settings.set_size(NonZeroU32::new(400).unwrap());
        assert_eq!(settings.size().get(), 400);
    }

    #[test]
    fn test_fixed_theme_update() {
        let theme = FixedTheme::default();
        assert_eq!(theme.colors(), ColorPair::default());
        let updated = theme.update(|c| c.foreground = [0x12, 0x34, 0x56]);
        assert_eq!(updated.foreground, [0x12, 0x34, 0x56]);
        assert_eq!(theme.colors(), updated);
    }

    #[test]
    fn test_low_contrast() {
        assert_eq!(low_contrast(&ColorPair::default()), None);

        let dim = ColorPair {
            foreground: [0x11, 0x22, 0x33],
            background: [0x22, 0x33, 0x44],
        };
        assert!(low_contrast(&dim).is_some());

        // light on dark is negative, and judged by magnitude
        let inverted = ColorPair {
            foreground: [0xff, 0xff, 0xff],
            background: [0x00, 0x00, 0x00],
        };
        assert!(inverted.contrast() < -MIN_CONTRAST);
        assert_eq!(low_contrast(&inverted), None);

        let grey = ColorPair {
            foreground: [0x77, 0x77, 0x77],
            background: [0x66, 0x66, 0x66],
        };
        assert!(grey.contrast() < 0.0);
        assert!(low_contrast(&grey).is_some());
    }

    #[test]
    fn test_local_clock_in_range() {
        let t = LocalClock.now();
        assert!(t.hour() < 24 && t.minute() < 60 && t.second() < 60);
    }
}
