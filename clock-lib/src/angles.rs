use thiserror::Error;

/// Side length of the face's internal coordinate grid.
pub const NATIVE_SIZE: f64 = 100.0;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeError {
    #[error("{field} {value} is out of range 0..={max}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

/// A time of day as read from the system clock, 24-hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClockTime {
    hour: u32,
    minute: u32,
    second: u32,
}

fn check(field: &'static str, value: u32, max: u32) -> Result<u32, TimeError> {
    if value > max {
        Err(TimeError::OutOfRange { field, value, max })
    } else {
        Ok(value)
    }
}

impl WallClockTime {
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, TimeError> {
        Ok(Self {
            hour: check("hour", hour, 23)?,
            minute: check("minute", minute, 59)?,
            second: check("second", second, 59)?,
        })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }
}

/// Clockwise rotation of each hand from 12 o'clock, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    pub fn from_time(t: &WallClockTime) -> Self {
        // The hour hand creeps with the minute only; seconds don't move it.
        Self {
            hour: (t.hour % 12) as f64 * 30.0 + t.minute as f64 / 2.0,
            minute: t.minute as f64 * 6.0 + t.second as f64 / 10.0,
            second: t.second as f64 * 6.0,
        }
    }
}

pub fn scale_factor(size_pixels: u32) -> f64 {
    size_pixels as f64 / NATIVE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use itertools::iproduct;

    fn at(h: u32, m: u32, s: u32) -> HandAngles {
        HandAngles::from_time(&WallClockTime::new(h, m, s).unwrap())
    }

    #[test]
    fn test_hour_hand() {
        for (h, m) in iproduct!(0..24, 0..60) {
            let angle = at(h, m, 0).hour;
            assert_eq!(angle, (h % 12) as f64 * 30.0 + m as f64 / 2.0);
            assert!((0.0..360.0).contains(&angle), "{h}:{m} -> {angle}");
        }
    }

    #[test]
    fn test_hour_hand_ignores_seconds() {
        for (h, m, s) in iproduct!(0..24, [0, 17, 59], 0..60) {
            assert_eq!(at(h, m, s).hour, at(h, m, 0).hour);
        }
    }

    #[test]
    fn test_minute_hand() {
        for (m, s) in iproduct!(0..60, 0..60) {
            assert_abs_diff_eq!(
                at(0, m, s).minute,
                m as f64 * 6.0 + s as f64 / 10.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_second_hand() {
        let angles: Vec<f64> = (0..60).map(|s| at(0, 0, s).second).collect();
        for (s, angle) in angles.iter().enumerate() {
            assert_eq!(*angle, s as f64 * 6.0);
        }
        assert_eq!(angles.first(), Some(&0.0));
        assert_eq!(angles.last(), Some(&354.0));
    }

    #[test]
    fn test_quarter_past_three() {
        let angles = at(3, 15, 30);
        assert_eq!(angles.hour, 97.5);
        assert_eq!(angles.minute, 93.0);
        assert_eq!(angles.second, 180.0);
        assert_eq!(at(15, 15, 30), angles);
    }

    #[test]
    fn test_scale_factor() {
        assert_eq!(scale_factor(250), 2.5);
        assert_eq!(scale_factor(100), 1.0);
        assert_abs_diff_eq!(scale_factor(33), 0.33, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            WallClockTime::new(24, 0, 0),
            Err(TimeError::OutOfRange {
                field: "hour",
                value: 24,
                max: 23
            })
        );
        assert!(WallClockTime::new(0, 60, 0).is_err());
        assert!(WallClockTime::new(0, 0, 60).is_err());
        assert!(WallClockTime::new(23, 59, 59).is_ok());
    }
}
