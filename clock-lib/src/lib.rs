pub mod angles;
pub mod color;
pub mod params;

pub use angles::{scale_factor, HandAngles, TimeError, WallClockTime, NATIVE_SIZE};
pub use color::{sRGB, ColorPair, ParseColorError};
pub use params::RenderParameters;
