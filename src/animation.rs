//! Frame gating shared by every effect.

use std::time::{Duration, Instant};

use crate::clock::{Clock, MonotonicClock};
use crate::color::{normalize, Color, ColorValue};
use crate::effects::Effect;
use crate::pixelbuffer::PixelBuffer;
use crate::{Error, Result};

/// Converts a period in seconds, rejecting negative and non-finite values.
pub fn period_from_secs(secs: f32) -> Result<Duration> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(Error::InvalidPeriod(secs));
    }
    Duration::try_from_secs_f32(secs).map_err(|_| Error::InvalidPeriod(secs))
}

/// Runs an [`Effect`] on a pixel buffer at most once per period.
///
/// The animation switches the buffer's auto-present off so only the effect
/// decides when a frame becomes visible. Pass `&mut strip` to keep ownership
/// of the buffer with the caller.
pub struct Animation<P: PixelBuffer, E: Effect, C: Clock = MonotonicClock> {
    pixels: P,
    effect: E,
    clock: C,
    period: Duration,
    color: Color,
    next_update: Instant,
}

impl<P: PixelBuffer, E: Effect> Animation<P, E, MonotonicClock> {
    pub fn new(
        pixels: P,
        period: Duration,
        color: impl Into<ColorValue>,
        effect: E,
    ) -> Result<Animation<P, E, MonotonicClock>> {
        Animation::with_clock(pixels, period, color, effect, MonotonicClock)
    }
}

impl<P: PixelBuffer, E: Effect, C: Clock> Animation<P, E, C> {
    pub fn with_clock(
        mut pixels: P,
        period: Duration,
        color: impl Into<ColorValue>,
        effect: E,
        clock: C,
    ) -> Result<Animation<P, E, C>> {
        if pixels.is_empty() {
            return Err(Error::EmptyBuffer);
        }
        effect.validate(pixels.len())?;

        pixels.set_auto_present(false);
        let next_update = clock.now();
        let mut animation = Animation {
            pixels,
            effect,
            clock,
            period,
            color: normalize(color),
            next_update,
        };
        let color = animation.color;
        animation.set_color(color);
        Ok(animation)
    }

    /// Call this from the main loop. Draws a frame if one is due and tells
    /// whether it did.
    pub fn animate(&mut self) -> bool {
        let now = self.clock.now();
        if now < self.next_update {
            return false;
        }

        self.next_update = now + self.period;
        self.draw();
        true
    }

    /// Draws the next frame right away without touching the schedule.
    pub fn draw(&mut self) {
        log::trace!("{}: drawing frame", self.effect.name());
        self.effect.draw_frame(&mut self.pixels, self.color);
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, value: impl Into<ColorValue>) {
        self.color = normalize(value);
        log::debug!("{}: color set to {:?}", self.effect.name(), self.color);
        self.effect.on_color_changed(&mut self.pixels, self.color);
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Takes effect after the next drawn frame.
    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
    }

    pub fn effect(&self) -> &E {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }

    pub fn pixels(&self) -> &P {
        &self.pixels
    }

    pub fn into_pixels(self) -> P {
        self.pixels
    }
}
