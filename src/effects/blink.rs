use crate::color::{Color, BLACK};
use crate::effects::Effect;
use crate::pixelbuffer::PixelBuffer;

/// Alternates the whole strip between the base color and an off color,
/// starting with the off color.
pub struct Blink {
    // whether the next frame is lit
    on: bool,
    off_color: Color,
}

impl Blink {
    pub fn new() -> Blink {
        Blink::with_off_color(BLACK)
    }

    pub fn with_off_color(off_color: Color) -> Blink {
        Blink {
            on: false,
            off_color,
        }
    }

    /// Whether the next frame will be lit.
    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl Default for Blink {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for Blink {
    fn name(&self) -> &str {
        "Blink"
    }

    fn draw_frame(&mut self, pixels: &mut dyn PixelBuffer, color: Color) {
        pixels.fill(if self.on { color } else { self.off_color });
        pixels.present();
        self.on = !self.on;
    }
}
