pub mod blink;
pub mod comet;
pub mod sparkle;

pub use blink::Blink;
pub use comet::Comet;
pub use sparkle::Sparkle;

use serde::Deserialize;

use crate::color::Color;
use crate::pixelbuffer::PixelBuffer;
use crate::Result;

/// One draw strategy driven by an [`Animation`](crate::Animation).
pub trait Effect {
    fn name(&self) -> &str;

    /// Rejects strips this effect cannot draw on.
    fn validate(&self, _pixel_count: usize) -> Result<()> {
        Ok(())
    }

    /// Renders the next frame and presents it.
    fn draw_frame(&mut self, pixels: &mut dyn PixelBuffer, color: Color);

    /// Rebuilds anything derived from the base color.
    fn on_color_changed(&mut self, _pixels: &mut dyn PixelBuffer, _color: Color) {}
}

impl<E: Effect + ?Sized> Effect for Box<E> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn validate(&self, pixel_count: usize) -> Result<()> {
        (**self).validate(pixel_count)
    }

    fn draw_frame(&mut self, pixels: &mut dyn PixelBuffer, color: Color) {
        (**self).draw_frame(pixels, color)
    }

    fn on_color_changed(&mut self, pixels: &mut dyn PixelBuffer, color: Color) {
        (**self).on_color_changed(pixels, color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    Blink,
    #[default]
    Comet,
    Sparkle,
}
