/*!
 # funkellicht

 Timed lighting effects for addressable RGB strips.

 An [`Animation`] owns a frame period, a base color and the next allowed draw
 time. The caller polls [`Animation::animate`] from its own loop; whenever a
 frame is due the attached [`Effect`] renders into a [`PixelBuffer`] and
 presents it.

 ## Example

 ```rust
 use std::time::Duration;

 use funkellicht::color::RED;
 use funkellicht::effects::Comet;
 use funkellicht::{Animation, PixelStrip};

 fn main() -> funkellicht::Result<()> {
     let mut strip = PixelStrip::new(30);
     let mut comet = Animation::new(&mut strip, Duration::from_millis(50), RED, Comet::new(6))?;

     // Call this from the main loop; it only draws when a frame is due.
     comet.animate();

     drop(comet);
     assert_eq!(strip.present_count(), 1);
     Ok(())
 }
 ```
*/

use thiserror::Error;

/// Errors raised while setting up an animation
#[derive(Error, Debug)]
pub enum Error {
    /// The pixel buffer has no pixels
    #[error("Pixel buffer is empty")]
    EmptyBuffer,

    /// Comet tail does not fit the strip
    #[error("Tail length {tail_length} must be between 1 and the pixel count ({pixel_count})")]
    TailLength {
        tail_length: usize,
        pixel_count: usize,
    },

    /// Effect needs a longer strip
    #[error("{effect} needs at least {required} pixels, got {actual}")]
    TooFewPixels {
        effect: String,
        required: usize,
        actual: usize,
    },

    /// Frame period is negative or not a number
    #[error("Invalid frame period: {0} s")]
    InvalidPeriod(f32),

    /// Driver loop rate is zero, negative or not a number
    #[error("Invalid poll rate: {0} Hz")]
    InvalidPollRate(f32),

    /// Color text could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Configuration file could not be read
    #[error(transparent)]
    ConfigFile(#[from] config_file::ConfigFileError),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod animation;
pub mod clock;
pub mod color;
pub mod config;
pub mod effects;
pub mod pixelbuffer;

pub use animation::Animation;
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use color::{Color, ColorValue};
pub use config::AnimationConfig;
pub use effects::{Effect, EffectKind};
pub use pixelbuffer::{PixelBuffer, PixelStrip};
