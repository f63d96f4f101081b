use std::io::{self, Write};

use funkellicht::color::BLACK;
use funkellicht::{Color, PixelBuffer};

/// Shows the strip as a row of colored blocks on a truecolor terminal.
pub struct TerminalStrip<W: Write> {
    out: W,
    pixels: Vec<Color>,
    auto_present: bool,
}

impl TerminalStrip<io::Stdout> {
    pub fn stdout(pixel_count: usize) -> Self {
        TerminalStrip::new(io::stdout(), pixel_count)
    }
}

impl<W: Write> TerminalStrip<W> {
    pub fn new(out: W, pixel_count: usize) -> Self {
        TerminalStrip {
            out,
            pixels: vec![BLACK; pixel_count],
            auto_present: true,
        }
    }

    /// Ends the strip line so the shell prompt starts on a fresh one.
    pub fn finish(&mut self) {
        if let Err(err) = writeln!(self.out).and_then(|_| self.out.flush()) {
            log::warn!("Failed to write to terminal: {err}");
        }
    }

    fn write_frame(&mut self) -> io::Result<()> {
        let mut line = String::with_capacity(self.pixels.len() * 24 + 8);
        line.push('\r');
        for pixel in &self.pixels {
            line.push_str(&format!(
                "\x1b[38;2;{};{};{}m\u{2588}",
                pixel.red, pixel.green, pixel.blue
            ));
        }
        line.push_str("\x1b[0m");

        self.out.write_all(line.as_bytes())?;
        self.out.flush()
    }

    fn written(&mut self) {
        if self.auto_present {
            self.present();
        }
    }
}

impl<W: Write> PixelBuffer for TerminalStrip<W> {
    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn get(&self, index: usize) -> Color {
        self.pixels[index]
    }

    fn set(&mut self, index: usize, color: Color) {
        self.pixels[index] = color;
        self.written();
    }

    fn set_range(&mut self, start: usize, colors: &[Color]) {
        self.pixels[start..start + colors.len()].copy_from_slice(colors);
        self.written();
    }

    fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
        self.written();
    }

    fn present(&mut self) {
        if let Err(err) = self.write_frame() {
            log::warn!("Failed to write to terminal: {err}");
        }
    }

    fn set_auto_present(&mut self, enabled: bool) {
        self.auto_present = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use funkellicht::color::RED;

    #[test]
    fn renders_one_block_per_pixel() {
        let mut strip = TerminalStrip::new(Vec::new(), 2);
        strip.set_auto_present(false);
        strip.set(1, RED);
        assert!(strip.out.is_empty());

        strip.present();
        let text = String::from_utf8(strip.out.clone()).unwrap();
        assert_eq!(
            text,
            "\r\x1b[38;2;0;0;0m\u{2588}\x1b[38;2;255;0;0m\u{2588}\x1b[0m"
        );
    }

    #[test]
    fn auto_present_writes_on_every_change() {
        let mut strip = TerminalStrip::new(Vec::new(), 1);
        strip.fill(RED);
        strip.set(0, BLACK);
        let text = String::from_utf8(strip.out.clone()).unwrap();
        assert_eq!(text.matches('\r').count(), 2);
    }
}
