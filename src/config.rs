//! Settings for one animation, read from a config file and/or the command line.

use std::path::Path;

use config_file::FromConfigFile;
use serde::Deserialize;

use crate::animation::{period_from_secs, Animation};
use crate::color::{parse_color, BLACK};
use crate::effects::{Blink, Comet, Effect, EffectKind, Sparkle};
use crate::pixelbuffer::PixelBuffer;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub effect: EffectKind,
    pub pixel_count: usize,
    /// Seconds between frames
    pub period: f32,
    pub color: String,
    /// Blink only
    pub off_color: Option<String>,
    /// Comet only
    pub tail_length: usize,
    /// How often the driver loop polls the animation, in Hz
    pub poll_rate: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            effect: EffectKind::Comet,
            pixel_count: 30,
            period: 0.1,
            color: "red".to_string(),
            off_color: None,
            tail_length: crate::effects::comet::DEFAULT_TAIL_LENGTH,
            poll_rate: 200.0,
        }
    }
}

impl AnimationConfig {
    /// Reads a config file; the format follows the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<AnimationConfig> {
        let config = AnimationConfig::from_config_file(path)?;
        log::debug!("Loaded {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pixel_count == 0 {
            return Err(Error::EmptyBuffer);
        }
        if !self.poll_rate.is_finite() || self.poll_rate <= 0.0 {
            return Err(Error::InvalidPollRate(self.poll_rate));
        }
        period_from_secs(self.period)?;
        parse_color(&self.color)?;
        if let Some(off_color) = &self.off_color {
            parse_color(off_color)?;
        }
        self.effect()?.validate(self.pixel_count)
    }

    pub fn effect(&self) -> Result<Box<dyn Effect>> {
        Ok(match self.effect {
            EffectKind::Blink => {
                let off_color = match &self.off_color {
                    Some(off_color) => parse_color(off_color)?,
                    None => BLACK,
                };
                Box::new(Blink::with_off_color(off_color))
            }
            EffectKind::Comet => Box::new(Comet::new(self.tail_length)),
            EffectKind::Sparkle => Box::new(Sparkle::new()),
        })
    }

    /// Sets up the configured animation on `pixels`.
    pub fn build<P: PixelBuffer>(&self, pixels: P) -> Result<Animation<P, Box<dyn Effect>>> {
        self.validate()?;
        Animation::new(
            pixels,
            period_from_secs(self.period)?,
            parse_color(&self.color)?,
            self.effect()?,
        )
    }
}
