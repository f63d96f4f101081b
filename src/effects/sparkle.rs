use rand::rngs::ThreadRng;
use rand::Rng;

use crate::color::Color;
use crate::effects::Effect;
use crate::pixelbuffer::PixelBuffer;
use crate::{Error, Result};

/// Random single-pixel flashes over a dimmed strip.
///
/// Every frame one random pixel flashes at full color, then settles to half
/// brightness with its right neighbour dropping to the dim background.
pub struct Sparkle<R: Rng = ThreadRng> {
    rng: R,
    half_color: Option<Color>,
    dim_color: Color,
}

impl Sparkle<ThreadRng> {
    pub fn new() -> Sparkle<ThreadRng> {
        Sparkle::with_rng(rand::thread_rng())
    }
}

impl Default for Sparkle<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Sparkle<R> {
    pub fn with_rng(rng: R) -> Sparkle<R> {
        Sparkle {
            rng,
            half_color: None,
            dim_color: Color::new(0, 0, 0),
        }
    }

    pub fn half_color(&self) -> Option<Color> {
        self.half_color
    }

    pub fn dim_color(&self) -> Color {
        self.dim_color
    }
}

fn divide(color: Color, divisor: u8) -> Color {
    Color::new(
        color.red / divisor,
        color.green / divisor,
        color.blue / divisor,
    )
}

impl<R: Rng> Effect for Sparkle<R> {
    fn name(&self) -> &str {
        "Sparkle"
    }

    fn validate(&self, pixel_count: usize) -> Result<()> {
        if pixel_count < 2 {
            return Err(Error::TooFewPixels {
                effect: self.name().to_string(),
                required: 2,
                actual: pixel_count,
            });
        }
        Ok(())
    }

    fn on_color_changed(&mut self, pixels: &mut dyn PixelBuffer, color: Color) {
        let half_color = divide(color, 2);
        let dim_color = divide(color, 10);

        // Pixels still glowing at half brightness keep glowing in the new color
        for index in 0..pixels.len() {
            if Some(pixels.get(index)) == self.half_color {
                pixels.set(index, half_color);
            } else {
                pixels.set(index, dim_color);
            }
        }

        self.half_color = Some(half_color);
        self.dim_color = dim_color;
    }

    fn draw_frame(&mut self, pixels: &mut dyn PixelBuffer, color: Color) {
        let index = self.rng.gen_range(0..=pixels.len() - 2);
        let half_color = self.half_color.unwrap_or_else(|| divide(color, 2));

        pixels.set(index, color);
        pixels.present();
        pixels.set(index, half_color);
        pixels.set(index + 1, self.dim_color);
        pixels.present();
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::color::{BLACK, BLUE, RED};
    use crate::pixelbuffer::testing::RecordingStrip;

    fn sparkle(seed: u64, strip: &mut dyn PixelBuffer, color: Color) -> Sparkle<StdRng> {
        let mut sparkle = Sparkle::with_rng(StdRng::seed_from_u64(seed));
        sparkle.on_color_changed(strip, color);
        sparkle
    }

    #[test]
    fn derives_half_and_dim_colors() {
        let mut strip = RecordingStrip::new(4);
        let sparkle = sparkle(1, &mut strip, Color::new(255, 99, 9));
        assert_eq!(sparkle.half_color(), Some(Color::new(127, 49, 4)));
        assert_eq!(sparkle.dim_color(), Color::new(25, 9, 0));
    }

    #[test]
    fn color_change_dims_the_whole_strip() {
        let mut strip = RecordingStrip::new(5);
        strip.set_auto_present(false);
        sparkle(1, &mut strip, RED);
        for index in 0..5 {
            assert_eq!(strip.get(index), Color::new(25, 0, 0));
        }
    }

    #[test]
    fn flashes_then_settles_within_one_frame() {
        let mut strip = RecordingStrip::new(8);
        strip.set_auto_present(false);
        let mut sparkle = sparkle(7, &mut strip, RED);
        let half = Color::new(127, 0, 0);
        let dim = Color::new(25, 0, 0);

        for _ in 0..50 {
            let before = strip.strip.pending().to_vec();
            let presents = strip.frames.len();
            sparkle.draw_frame(&mut strip, RED);
            assert_eq!(strip.frames.len(), presents + 2);

            let flash = &strip.frames[presents];
            let settled = &strip.frames[presents + 1];
            let index = flash.iter().position(|c| *c == RED).unwrap();
            assert_ne!(index, 7);
            assert_eq!(flash.iter().filter(|c| **c == RED).count(), 1);

            assert_eq!(settled[index], half);
            assert_eq!(settled[index + 1], dim);

            let changed = (0..8).filter(|i| settled[*i] != before[*i]).count();
            assert!(changed <= 2);
            assert!(settled.iter().all(|c| *c == half || *c == dim));
        }
    }

    #[test]
    fn half_lit_pixels_follow_a_color_change() {
        let mut strip = RecordingStrip::new(6);
        strip.set_auto_present(false);
        let mut sparkle = sparkle(3, &mut strip, RED);
        sparkle.draw_frame(&mut strip, RED);

        let old_half = Color::new(127, 0, 0);
        let half_lit: Vec<usize> = (0..6).filter(|i| strip.get(*i) == old_half).collect();
        assert_eq!(half_lit.len(), 1);

        sparkle.on_color_changed(&mut strip, BLUE);
        for index in 0..6 {
            let expected = if half_lit.contains(&index) {
                Color::new(0, 0, 127)
            } else {
                Color::new(0, 0, 25)
            };
            assert_eq!(strip.get(index), expected);
        }
    }

    #[test]
    fn needs_two_pixels() {
        let sparkle = Sparkle::with_rng(StdRng::seed_from_u64(0));
        assert!(sparkle.validate(1).is_err());
        assert!(sparkle.validate(2).is_ok());
        assert_eq!(BLACK, Sparkle::with_rng(StdRng::seed_from_u64(0)).dim_color());
    }
}
