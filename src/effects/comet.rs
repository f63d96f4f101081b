use crate::color::{scale, Color, BLACK};
use crate::effects::Effect;
use crate::pixelbuffer::PixelBuffer;
use crate::{Error, Result};

pub const DEFAULT_TAIL_LENGTH: usize = 10;

// Brightness of the dimmest tail pixel, so the tail end never fades to black
const TAIL_FLOOR: f64 = 0.2;

/// A lit head with a fading tail that travels along the strip and wraps.
///
/// The head position moves through `-tail_length..=pixel_count`. While it is
/// negative the tail is still entering from index 0; at `pixel_count` the last
/// pixel gets cleared and the cursor wraps around.
pub struct Comet {
    tail_length: usize,
    gradient: Vec<Color>,
    start: isize,
}

impl Comet {
    pub fn new(tail_length: usize) -> Comet {
        Comet {
            tail_length,
            gradient: vec![BLACK; tail_length],
            start: -(tail_length as isize),
        }
    }

    pub fn tail_length(&self) -> usize {
        self.tail_length
    }

    /// Tail colors, dimmest first.
    pub fn gradient(&self) -> &[Color] {
        &self.gradient
    }

    /// Position the next frame is drawn at.
    pub fn position(&self) -> isize {
        self.start
    }

    fn advance(&mut self, pixel_count: isize) {
        self.start = if self.start >= pixel_count {
            -(self.tail_length as isize)
        } else {
            self.start + 1
        };
    }
}

impl Default for Comet {
    fn default() -> Self {
        Self::new(DEFAULT_TAIL_LENGTH)
    }
}

impl Effect for Comet {
    fn name(&self) -> &str {
        "Comet"
    }

    fn validate(&self, pixel_count: usize) -> Result<()> {
        if self.tail_length == 0 || self.tail_length > pixel_count {
            return Err(Error::TailLength {
                tail_length: self.tail_length,
                pixel_count,
            });
        }
        Ok(())
    }

    fn on_color_changed(&mut self, _pixels: &mut dyn PixelBuffer, color: Color) {
        let step = (1.0 - TAIL_FLOOR) / self.tail_length as f64;
        self.gradient = (0..self.tail_length)
            .map(|n| scale(color, n as f64 * step + TAIL_FLOOR))
            .collect();
    }

    fn draw_frame(&mut self, pixels: &mut dyn PixelBuffer, _color: Color) {
        let pixel_count = pixels.len() as isize;
        let tail_length = self.tail_length as isize;
        let start = self.start;

        if start > 0 {
            pixels.set((start - 1) as usize, BLACK);
        }

        let end = if start + tail_length < pixel_count {
            tail_length
        } else {
            pixel_count - start
        };

        if start < 0 {
            // Only the bright end of the tail is on the strip yet
            let visible = (tail_length + start) as usize;
            pixels.set_range(0, &self.gradient[self.tail_length - visible..]);
        } else {
            pixels.set_range(start as usize, &self.gradient[..end as usize]);
        }

        pixels.present();
        self.advance(pixel_count);
    }
}
