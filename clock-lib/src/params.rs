use std::num::NonZeroU32;

use crate::angles::{scale_factor, HandAngles, WallClockTime};
use crate::color::{to_string, ColorPair};

/// Everything substituted into the face for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParameters {
    pub hour_angle: f64,
    pub minute_angle: f64,
    pub second_angle: f64,
    pub size_pixels: u32,
    pub scale_factor: f64,
    pub foreground: String,
    pub background: String,
}

impl RenderParameters {
    pub fn new(time: &WallClockTime, size: NonZeroU32, colors: &ColorPair) -> Self {
        let angles = HandAngles::from_time(time);
        Self {
            hour_angle: angles.hour,
            minute_angle: angles.minute,
            second_angle: angles.second,
            size_pixels: size.get(),
            scale_factor: scale_factor(size.get()),
            foreground: to_string(&colors.foreground),
            background: to_string(&colors.background),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let time = WallClockTime::new(3, 15, 30).unwrap();
        let colors = ColorPair {
            foreground: [0x20, 0x20, 0x20],
            background: [0xfa, 0xfa, 0xf0],
        };
        let params = RenderParameters::new(&time, NonZeroU32::new(250).unwrap(), &colors);

        assert_eq!(
            params,
            RenderParameters {
                hour_angle: 97.5,
                minute_angle: 93.0,
                second_angle: 180.0,
                size_pixels: 250,
                scale_factor: 2.5,
                foreground: "#202020".into(),
                background: "#FAFAF0".into(),
            }
        );
    }
}
